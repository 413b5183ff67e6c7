//! Explain command implementation.
//!
//! The `stratum explain` command shows every evaluated page view with its
//! candidates, the recorded hierarchy and the final selection.

use crate::cli::args::RequestArgs;
use crate::error::Result;
use crate::hierarchy::{BuilderOrigin, HostValue, ViewTrace};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::workspace::Workspace;

/// The explain command implementation.
pub struct ExplainCommand {
    workspace: Workspace,
    args: RequestArgs,
}

impl ExplainCommand {
    /// Create a new explain command.
    pub fn new(workspace: Workspace, args: RequestArgs) -> Self {
        Self { workspace, args }
    }

    fn show_view(&self, ui: &mut dyn UserInterface, trace: &ViewTrace) {
        let origin = match trace.origin {
            BuilderOrigin::Override => "",
            BuilderOrigin::HostDefault => " (host default)",
        };
        ui.message(&format!("{}{}", trace.view, origin));

        if trace.candidates.is_empty() {
            ui.message("    (no candidates)");
        }
        for candidate in &trace.candidates {
            let marker = if trace.found.as_deref() == Some(candidate.as_str()) {
                "✓"
            } else {
                " "
            };
            ui.message(&format!("  {} {}", marker, candidate));
        }
    }
}

impl Command for ExplainCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = self
            .workspace
            .resolve_file(&self.args.request, &self.args.available)?;
        let resolution = &outcome.resolution;

        if self.args.json {
            let json =
                serde_json::to_string_pretty(resolution).map_err(anyhow::Error::from)?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header("Page views");
        for trace in &resolution.views {
            self.show_view(ui, trace);
        }

        ui.show_header("Recorded hierarchy");
        for (position, name) in resolution.hierarchy.iter().enumerate() {
            ui.message(&format!("{:>3}. {}", position + 1, name));
        }

        ui.show_header("Selection");
        match &resolution.template {
            HostValue::Template(template) if template.is_empty() => {
                ui.warning("No template found for this request");
            }
            HostValue::Template(template) => ui.success(template),
            HostValue::Other(value) => {
                ui.success(&format!("{} (passthrough)", value));
            }
        }
        if let Some(path) = &outcome.path {
            ui.detail(&format!("path: {}", path.display()));
        }

        Ok(CommandResult::success())
    }
}
