//! Host query state.
//!
//! The resolver never inspects a request directly. Everything it needs to
//! know (which page views apply, what object was queried, which query
//! variables are set) goes through the [`QueryState`] trait. [`Request`] is
//! the file-backed implementation used by the CLI and the tests.
//!
//! # Example
//!
//! ```
//! use stratum::query::{PageView, QueryState, Request};
//!
//! let request: Request = serde_yaml::from_str(
//!     r#"
//! views: [single, singular]
//! queried: { kind: post, id: 42, post_type: post, slug: hello-world }
//! "#,
//! )
//! .unwrap();
//!
//! assert!(request.is(PageView::Single));
//! assert!(request.is(PageView::Index));
//! assert!(!request.is(PageView::Author));
//! ```

pub mod entity;
pub mod request;
pub mod vars;

pub use entity::{MimeType, Post, QueriedObject, Term, User};
pub use request::{load_request, parse_request, CustomTemplates, Request};
pub use vars::QueryVars;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A page-view type the host can report for a request.
///
/// Variants are declared in host evaluation order; see [`PageView::ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageView {
    /// Nothing matched the request.
    #[serde(rename = "404")]
    NotFound,
    /// Search results.
    Search,
    /// The front of the site.
    FrontPage,
    /// The posts index.
    Home,
    /// Archive of a single post type.
    PostTypeArchive,
    /// Term archive of any taxonomy, including categories and tags.
    Taxonomy,
    /// A single attachment.
    Attachment,
    /// A single post of any non-page type.
    Single,
    /// A single page.
    Page,
    /// Any single entity.
    Singular,
    /// Author archive.
    Author,
    /// Date or time archive.
    Date,
    /// Any archive.
    Archive,
    /// Last-resort view, always evaluated.
    Index,
}

impl PageView {
    /// Host evaluation order.
    pub const ORDER: [PageView; 14] = [
        PageView::NotFound,
        PageView::Search,
        PageView::FrontPage,
        PageView::Home,
        PageView::PostTypeArchive,
        PageView::Taxonomy,
        PageView::Attachment,
        PageView::Single,
        PageView::Page,
        PageView::Singular,
        PageView::Author,
        PageView::Date,
        PageView::Archive,
        PageView::Index,
    ];

    /// Stable name, as used in request files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "404",
            Self::Search => "search",
            Self::FrontPage => "front_page",
            Self::Home => "home",
            Self::PostTypeArchive => "post_type_archive",
            Self::Taxonomy => "taxonomy",
            Self::Attachment => "attachment",
            Self::Single => "single",
            Self::Page => "page",
            Self::Singular => "singular",
            Self::Author => "author",
            Self::Date => "date",
            Self::Archive => "archive",
            Self::Index => "index",
        }
    }
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the front of the site shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontDisplay {
    /// Latest posts.
    #[default]
    Posts,
    /// A fixed, static page.
    Page,
}

/// Key for a custom-template override lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityRef {
    Post(u64),
    Term(u64),
    User(u64),
}

/// Read-only view of the host's query state for one request.
pub trait QueryState {
    /// Whether the request is a page view of the given type.
    fn is(&self, view: PageView) -> bool;

    /// The object the request is about, if any.
    fn queried_object(&self) -> Option<&QueriedObject>;

    /// Query variables.
    fn vars(&self) -> &QueryVars;

    /// What the front of the site is configured to show.
    fn front_display(&self) -> FrontDisplay;

    /// Look up a user profile by id.
    fn user(&self, id: u64) -> Option<&User>;

    /// Custom template assigned to an entity, if any.
    fn custom_template(&self, entity: EntityRef) -> Option<&str>;
}
