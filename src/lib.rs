//! Stratum - granular template hierarchy resolution.
//!
//! For every page view a request matches (front page, single post, term
//! archive, author archive, date archive, ...) Stratum builds an ordered list
//! of candidate template names, most specific first, records all of them,
//! and selects the first one that exists. Compared to a host's stock
//! hierarchy it splits taxonomy templates by taxonomy, author templates by
//! role and attachment templates by MIME subtype.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Error types and result aliases
//! - [`hierarchy`] - Candidate builders and the resolution pipeline
//! - [`query`] - Host query state and request files
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use stratum::hierarchy::{HostValue, Pipeline, StaticLocator};
//! use stratum::query::Request;
//!
//! let request: Request = serde_yaml::from_str(
//!     r#"
//! views: [date, archive]
//! vars: { year: 2024, monthnum: 5, day: 1, hour: 9, minute: 30 }
//! "#,
//! )
//! .unwrap();
//!
//! let locator = StaticLocator::new(["time.php", "archive.php"]);
//! let resolution = Pipeline::new(&request, &locator).run();
//!
//! assert_eq!(resolution.hierarchy, ["minute", "time", "date", "archive", "index"]);
//! assert_eq!(resolution.template, HostValue::Template("time.php".to_string()));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod query;
pub mod ui;

pub use error::{Result, StratumError};
