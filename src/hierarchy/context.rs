//! Per-request resolution state.
//!
//! A [`ResolutionContext`] is created at the start of a request and dropped
//! at its end. It owns the two pieces of state the resolver keeps:
//!
//! - the recorded hierarchy, every candidate of every evaluated view with its
//!   extension stripped, in build order
//! - the located template, the first candidate the probe confirmed; once set
//!   it never changes

use serde::{Deserialize, Serialize};
use std::fmt;

use super::candidates::strip_extension;

/// The value travelling through the host's final selection point.
///
/// The host normally passes a template identifier. Anything else (`false`,
/// `null`, an object) is a sentinel from another extension that has taken
/// over the response, and is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HostValue {
    Template(String),
    Other(serde_json::Value),
}

impl HostValue {
    /// An empty template identifier.
    pub fn empty() -> Self {
        Self::Template(String::new())
    }

    /// The template identifier, if this is one and it is not empty.
    pub fn as_template(&self) -> Option<&str> {
        match self {
            Self::Template(t) if !t.is_empty() => Some(t),
            _ => None,
        }
    }

    /// Whether this is a non-template sentinel.
    pub fn is_passthrough(&self) -> bool {
        matches!(self, Self::Other(_))
    }
}

impl Default for HostValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(t) => f.write_str(t),
            Self::Other(v) => write!(f, "{}", v),
        }
    }
}

/// Resolution state for a single request.
#[derive(Debug, Clone, Default)]
pub struct ResolutionContext {
    hierarchy: Vec<String>,
    located: Option<String>,
}

impl ResolutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a view's candidates and hand them on unchanged.
    pub fn record(&mut self, candidates: Vec<String>) -> Vec<String> {
        self.hierarchy.extend(
            candidates
                .iter()
                .map(|candidate| strip_extension(candidate).to_string()),
        );
        candidates
    }

    /// Note what the probe found for one view.
    ///
    /// The first non-empty match is kept. The return value is always empty,
    /// which tells the host to keep evaluating the remaining views.
    pub fn report_match(&mut self, found: &str) -> String {
        if self.located.is_none() && !found.is_empty() {
            tracing::debug!(template = found, "located template");
            self.located = Some(found.to_string());
        }
        String::new()
    }

    /// Pick the final template.
    ///
    /// Sentinels pass through, a non-empty identifier chosen by someone else
    /// wins, and otherwise the located template (or an empty identifier) is
    /// returned.
    pub fn select(&self, incoming: HostValue) -> HostValue {
        match incoming {
            HostValue::Template(chosen) if chosen.is_empty() => {
                HostValue::Template(self.located.clone().unwrap_or_default())
            }
            other => other,
        }
    }

    /// Every candidate recorded so far, extensions stripped.
    pub fn hierarchy(&self) -> &[String] {
        &self.hierarchy
    }

    pub fn located(&self) -> Option<&str> {
        self.located.as_deref()
    }

    /// Consume the context, returning the hierarchy and located template.
    pub fn into_parts(self) -> (Vec<String>, Option<String>) {
        (self.hierarchy, self.located)
    }
}
