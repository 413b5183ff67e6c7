//! Configuration schema for `.stratum/config.yml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::hierarchy::DEFAULT_EXTENSION;

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StratumConfig {
    /// Template file extension, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Template directories, most specific (child) first.
    ///
    /// Relative paths are resolved against the project root. Empty means the
    /// project root itself.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub template_dirs: Vec<PathBuf>,
}

impl Default for StratumConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            template_dirs: Vec::new(),
        }
    }
}

impl StratumConfig {
    /// The extension with any leading dot removed.
    pub fn normalized_extension(&self) -> &str {
        self.extension.trim().trim_start_matches('.')
    }
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = StratumConfig::default();
        assert_eq!(config.extension, "php");
        assert!(config.template_dirs.is_empty());
    }

    #[test]
    fn empty_yaml_uses_defaults() {
        let config: StratumConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, StratumConfig::default());
    }

    #[test]
    fn parses_fields() {
        let config: StratumConfig =
            serde_yaml::from_str("extension: html\ntemplate_dirs: [child, parent]").unwrap();
        assert_eq!(config.extension, "html");
        assert_eq!(
            config.template_dirs,
            vec![PathBuf::from("child"), PathBuf::from("parent")]
        );
    }

    #[test]
    fn leading_dot_is_tolerated() {
        let config = StratumConfig {
            extension: ".twig".to_string(),
            ..Default::default()
        };
        assert_eq!(config.normalized_extension(), "twig");
    }
}
