//! Configuration file discovery and loading.

use crate::config::schema::StratumConfig;
use crate::config::validator::validate;
use crate::error::{Result, StratumError};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config location relative to the project root.
pub fn default_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".stratum").join("config.yml")
}

/// Load a single config file and parse it into StratumConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<StratumConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StratumError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            StratumError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into StratumConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<StratumConfig> {
    if content.trim().is_empty() {
        return Ok(StratumConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| StratumError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and validate the configuration for a project.
///
/// An explicit path must exist. Without one, `.stratum/config.yml` under the
/// project root is used when present and defaults apply otherwise.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<StratumConfig> {
    let config = match explicit {
        Some(path) => load_config_file(path)?,
        None => {
            let path = default_config_path(project_root);
            if path.is_file() {
                load_config_file(&path)?
            } else {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                StratumConfig::default()
            }
        }
    };

    validate(&config)?;
    Ok(config)
}
