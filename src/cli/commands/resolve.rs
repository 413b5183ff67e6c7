//! Resolve command implementation.
//!
//! The `stratum resolve` command prints the template selected for a request.

use crate::cli::args::RequestArgs;
use crate::error::Result;
use crate::hierarchy::HostValue;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::workspace::Workspace;

/// The resolve command implementation.
pub struct ResolveCommand {
    workspace: Workspace,
    args: RequestArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(workspace: Workspace, args: RequestArgs) -> Self {
        Self { workspace, args }
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = self
            .workspace
            .resolve_file(&self.args.request, &self.args.available)?;
        let resolution = &outcome.resolution;

        if self.args.json {
            let json = serde_json::to_string_pretty(&serde_json::json!({
                "template": resolution.template,
                "path": outcome.path,
            }))
            .map_err(anyhow::Error::from)?;
            ui.message(&json);
        } else {
            match &resolution.template {
                HostValue::Template(template) if template.is_empty() => {}
                HostValue::Template(template) => ui.message(template),
                HostValue::Other(value) => {
                    ui.message(&value.to_string());
                    ui.detail("passthrough value from another extension");
                }
            }
            if ui.output_mode().shows_details() {
                if let Some(path) = &outcome.path {
                    ui.detail(&format!("path: {}", path.display()));
                }
                ui.detail(&format!("hierarchy: {}", resolution.hierarchy.join(", ")));
            }
        }

        if resolution.template == HostValue::empty() {
            ui.warning("No template found for this request");
            return Ok(CommandResult::failure(1));
        }

        Ok(CommandResult::success())
    }
}
