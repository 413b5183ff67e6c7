//! Shared setup for request-driven commands.

use std::path::{Path, PathBuf};

use crate::config::{load_config, StratumConfig};
use crate::error::Result;
use crate::hierarchy::{
    template_roots, DirectoryLocator, Pipeline, Resolution, StaticLocator, TemplateLocator,
};
use crate::query::{load_request, Request};

/// A project root with its loaded configuration.
#[derive(Debug, Clone)]
pub struct Workspace {
    project_root: PathBuf,
    config: StratumConfig,
}

/// A finished resolution plus the file it points at, when known.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub resolution: Resolution,
    pub path: Option<PathBuf>,
}

impl Workspace {
    /// Load the configuration for `project_root`.
    pub fn load(project_root: &Path, config_path: Option<&Path>) -> Result<Self> {
        let config = load_config(project_root, config_path)?;
        Ok(Self::new(project_root, config))
    }

    pub fn new(project_root: &Path, config: StratumConfig) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
        }
    }

    /// Template directories to probe, in order.
    pub fn template_roots(&self) -> Vec<PathBuf> {
        template_roots(&self.project_root, &self.config.template_dirs)
    }

    /// Load a request file and resolve it.
    pub fn resolve_file(&self, request_path: &Path, available: &[String]) -> Result<Outcome> {
        let request = load_request(request_path)?;
        Ok(self.resolve(&request, available))
    }

    /// Resolve a request.
    ///
    /// A non-empty `available` list replaces the directory probe.
    pub fn resolve(&self, request: &Request, available: &[String]) -> Outcome {
        if available.is_empty() {
            let locator = DirectoryLocator::new(self.template_roots());
            self.run(request, &locator)
        } else {
            let locator = StaticLocator::new(available.iter().cloned());
            self.run(request, &locator)
        }
    }

    fn run(&self, request: &Request, locator: &dyn TemplateLocator) -> Outcome {
        let resolution = Pipeline::new(request, locator)
            .with_extension(self.config.normalized_extension())
            .with_incoming(request.chosen.clone())
            .run();

        let path = resolution
            .template
            .as_template()
            .and_then(|template| locator.path_of(template));

        Outcome { resolution, path }
    }
}
