//! Candidate lists and the filter applied before probing.

use std::collections::HashSet;
use std::path::{Component, Path};

/// Ordered candidate list under construction, most specific first.
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    extension: &'a str,
    names: Vec<String>,
}

impl<'a> Candidates<'a> {
    /// Start an empty list whose stems get `extension` appended.
    pub fn new(extension: &'a str) -> Self {
        Self {
            extension,
            names: Vec::new(),
        }
    }

    /// Append `{stem}.{extension}`.
    pub fn stem(&mut self, stem: impl AsRef<str>) -> &mut Self {
        let stem = stem.as_ref();
        if !stem.is_empty() {
            let name = format!("{}.{}", stem, self.extension);
            self.push(name);
        }
        self
    }

    /// Append a custom-template identifier as-is.
    pub fn custom(&mut self, identifier: Option<&str>) -> &mut Self {
        if let Some(identifier) = identifier.filter(|i| !i.is_empty()) {
            self.push(identifier.to_string());
        }
        self
    }

    fn push(&mut self, name: String) {
        if !self.names.contains(&name) {
            self.names.push(name);
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}

/// Remove the trailing file extension of the last path segment.
///
/// Dotfiles and names without an extension are returned unchanged.
pub fn strip_extension(identifier: &str) -> &str {
    let segment_start = identifier.rfind('/').map(|i| i + 1).unwrap_or(0);
    match identifier[segment_start..].rfind('.') {
        Some(0) | None => identifier,
        Some(dot) => &identifier[..segment_start + dot],
    }
}

/// Filtering applied to every candidate list before it is probed.
pub trait CandidateFilter {
    fn filter(&self, candidates: Vec<String>) -> Vec<String>;
}

/// Default filter: trims names, drops empty and unsafe paths, and removes
/// duplicates while keeping the first occurrence.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueFilter;

impl UniqueFilter {
    fn is_safe(name: &str) -> bool {
        let path = Path::new(name);
        !path.is_absolute()
            && !name.starts_with('/')
            && path
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
    }
}

impl CandidateFilter for UniqueFilter {
    fn filter(&self, candidates: Vec<String>) -> Vec<String> {
        let mut seen = HashSet::new();
        candidates
            .into_iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty() && Self::is_safe(c))
            .filter(|c| seen.insert(c.clone()))
            .collect()
    }
}
