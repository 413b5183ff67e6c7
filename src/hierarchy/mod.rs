//! Template hierarchy resolution.
//!
//! This module builds an ordered list of candidate templates for every page
//! view of a request, records all of them, and selects the first one that
//! exists.
//!
//! - [`builders`] - candidate lists per page view
//! - [`candidates`] - list construction and filtering
//! - [`context`] - per-request recorded hierarchy and located template
//! - [`locator`] - existence probes
//! - [`pipeline`] - the stage machine tying it together
//!
//! # Example
//!
//! ```
//! use stratum::hierarchy::{HostValue, Pipeline, StaticLocator};
//! use stratum::query::Request;
//!
//! let request: Request = serde_yaml::from_str(
//!     r#"
//! views: [taxonomy, archive]
//! queried: { kind: term, id: 4, taxonomy: post_format, slug: post-format-aside }
//! "#,
//! )
//! .unwrap();
//!
//! let locator = StaticLocator::new(["taxonomy-post_format-aside.php", "archive.php"]);
//! let resolution = Pipeline::new(&request, &locator).run();
//!
//! assert_eq!(
//!     resolution.template,
//!     HostValue::Template("taxonomy-post_format-aside.php".to_string())
//! );
//! ```

pub mod builders;
pub mod candidates;
pub mod context;
pub mod locator;
pub mod pipeline;

pub use builders::{builder, Builder, BuilderOrigin};
pub use candidates::{strip_extension, CandidateFilter, Candidates, UniqueFilter};
pub use context::{HostValue, ResolutionContext};
pub use locator::{template_roots, DirectoryLocator, StaticLocator, TemplateLocator};
pub use pipeline::{detect_views, Pipeline, Resolution, Stage, ViewTrace, DEFAULT_EXTENSION};
