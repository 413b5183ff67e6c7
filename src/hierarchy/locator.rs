//! Template existence probes.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Finds the first candidate that exists.
pub trait TemplateLocator {
    /// Return the first candidate confirmed present, in list order.
    fn locate(&self, candidates: &[String]) -> Option<String>;

    /// Filesystem path of a located template, when the probe knows it.
    fn path_of(&self, _identifier: &str) -> Option<PathBuf> {
        None
    }
}

/// Probes template directories on disk.
///
/// Directories are tried in order (child before parent) for each candidate
/// before moving on to the next candidate, so a more specific name in the
/// parent beats a generic one in the child.
#[derive(Debug, Clone)]
pub struct DirectoryLocator {
    roots: Vec<PathBuf>,
}

impl DirectoryLocator {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    fn find(&self, identifier: &str) -> Option<PathBuf> {
        self.roots
            .iter()
            .map(|root| root.join(identifier))
            .find(|path| path.is_file())
    }
}

impl TemplateLocator for DirectoryLocator {
    fn locate(&self, candidates: &[String]) -> Option<String> {
        for candidate in candidates {
            if let Some(path) = self.find(candidate) {
                tracing::debug!(candidate = %candidate, path = %path.display(), "probe hit");
                return Some(candidate.clone());
            }
            tracing::trace!(candidate = %candidate, "probe miss");
        }
        None
    }

    fn path_of(&self, identifier: &str) -> Option<PathBuf> {
        self.find(identifier)
    }
}

/// Treats a fixed set of identifiers as present.
#[derive(Debug, Clone, Default)]
pub struct StaticLocator {
    available: HashSet<String>,
}

impl StaticLocator {
    pub fn new<I, S>(available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available: available.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.available.contains(identifier)
    }
}

impl TemplateLocator for StaticLocator {
    fn locate(&self, candidates: &[String]) -> Option<String> {
        candidates.iter().find(|c| self.contains(c)).cloned()
    }
}

/// Resolve configured template directories against a project root.
///
/// Relative directories are joined onto `root`; an empty list means the root
/// itself.
pub fn template_roots(root: &Path, dirs: &[PathBuf]) -> Vec<PathBuf> {
    if dirs.is_empty() {
        return vec![root.to_path_buf()];
    }
    dirs.iter()
        .map(|dir| {
            if dir.is_absolute() {
                dir.clone()
            } else {
                root.join(dir)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn candidates(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn touch(dir: &Path, name: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    #[test]
    fn directory_locator_returns_first_existing() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "single.php");
        touch(temp.path(), "index.php");

        let locator = DirectoryLocator::new(vec![temp.path().to_path_buf()]);
        let found = locator.locate(&candidates(&["single-post-1.php", "single.php", "index.php"]));
        assert_eq!(found.as_deref(), Some("single.php"));
    }

    #[test]
    fn directory_locator_misses() {
        let temp = TempDir::new().unwrap();
        let locator = DirectoryLocator::new(vec![temp.path().to_path_buf()]);
        assert!(locator.locate(&candidates(&["single.php"])).is_none());
    }

    #[test]
    fn directory_locator_ignores_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("single.php")).unwrap();
        let locator = DirectoryLocator::new(vec![temp.path().to_path_buf()]);
        assert!(locator.locate(&candidates(&["single.php"])).is_none());
    }

    #[test]
    fn specific_parent_template_beats_generic_child_template() {
        let temp = TempDir::new().unwrap();
        let child = temp.path().join("child");
        let parent = temp.path().join("parent");
        touch(&child, "single.php");
        touch(&parent, "single-post-1.php");

        let locator = DirectoryLocator::new(vec![child.clone(), parent.clone()]);
        let found = locator.locate(&candidates(&["single-post-1.php", "single.php"]));
        assert_eq!(found.as_deref(), Some("single-post-1.php"));
        assert_eq!(
            locator.path_of("single-post-1.php"),
            Some(parent.join("single-post-1.php"))
        );
    }

    #[test]
    fn child_wins_for_the_same_name() {
        let temp = TempDir::new().unwrap();
        let child = temp.path().join("child");
        let parent = temp.path().join("parent");
        touch(&child, "index.php");
        touch(&parent, "index.php");

        let locator = DirectoryLocator::new(vec![child.clone(), parent]);
        assert_eq!(locator.path_of("index.php"), Some(child.join("index.php")));
    }

    #[test]
    fn nested_identifiers_resolve() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "templates/landing.php");
        let locator = DirectoryLocator::new(vec![temp.path().to_path_buf()]);
        let found = locator.locate(&candidates(&["templates/landing.php"]));
        assert_eq!(found.as_deref(), Some("templates/landing.php"));
    }

    #[test]
    fn static_locator_respects_order() {
        let locator = StaticLocator::new(["index.php", "single.php"]);
        let found = locator.locate(&candidates(&["single-post-1.php", "single.php", "index.php"]));
        assert_eq!(found.as_deref(), Some("single.php"));
        assert!(locator.path_of("single.php").is_none());
    }

    #[test]
    fn template_roots_default_to_project_root() {
        let root = Path::new("/site");
        assert_eq!(template_roots(root, &[]), vec![PathBuf::from("/site")]);
        assert_eq!(
            template_roots(root, &[PathBuf::from("child"), PathBuf::from("/themes/parent")]),
            vec![PathBuf::from("/site/child"), PathBuf::from("/themes/parent")]
        );
    }
}
