//! Configuration validation.

use crate::config::schema::StratumConfig;
use crate::error::{Result, StratumError};

/// Validate a configuration, failing on the first problem.
pub fn validate(config: &StratumConfig) -> Result<()> {
    let extension = config.normalized_extension();

    if extension.is_empty() {
        return Err(StratumError::ConfigValidationError {
            message: "extension must not be empty".to_string(),
        });
    }

    if !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(StratumError::ConfigValidationError {
            message: format!(
                "extension '{}' must contain only letters and digits",
                config.extension
            ),
        });
    }

    Ok(())
}
