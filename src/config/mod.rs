//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use stratum::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".stratum");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "extension: html").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.extension, "html");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{default_config_path, load_config, load_config_file, parse_config};
pub use schema::StratumConfig;
pub use validator::validate;
