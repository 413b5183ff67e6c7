//! File-backed request description.
//!
//! A request file describes everything the host would know about one page
//! request. Example:
//!
//! ```yaml
//! views: [attachment, single, singular]
//! queried: { kind: post, id: 7, post_type: attachment, slug: sunset, mime_type: image/jpeg }
//! custom_templates:
//!   posts: { 7: templates/gallery.php }
//! ```

use crate::error::{Result, StratumError};
use crate::hierarchy::HostValue;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use super::{EntityRef, FrontDisplay, PageView, QueriedObject, QueryState, QueryVars, User};

/// Custom-template overrides, keyed by entity id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomTemplates {
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub posts: HashMap<u64, String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub terms: HashMap<u64, String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub users: HashMap<u64, String>,
}

impl CustomTemplates {
    fn get(&self, entity: EntityRef) -> Option<&str> {
        let (map, id) = match entity {
            EntityRef::Post(id) => (&self.posts, id),
            EntityRef::Term(id) => (&self.terms, id),
            EntityRef::User(id) => (&self.users, id),
        };
        map.get(&id).map(String::as_str).filter(|t| !t.is_empty())
    }
}

/// One page request as seen by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Request {
    /// Page views the host reports for this request.
    pub views: BTreeSet<PageView>,

    /// What the front of the site shows.
    pub show_on_front: FrontDisplay,

    /// The queried object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queried: Option<QueriedObject>,

    /// Query variables.
    pub vars: QueryVars,

    /// User profiles the host can resolve by id.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<User>,

    /// Per-entity custom templates.
    pub custom_templates: CustomTemplates,

    /// Value other extensions placed at the final selection point.
    pub chosen: HostValue,
}

impl QueryState for Request {
    fn is(&self, view: PageView) -> bool {
        view == PageView::Index || self.views.contains(&view)
    }

    fn queried_object(&self) -> Option<&QueriedObject> {
        self.queried.as_ref()
    }

    fn vars(&self) -> &QueryVars {
        &self.vars
    }

    fn front_display(&self) -> FrontDisplay {
        self.show_on_front
    }

    fn user(&self, id: u64) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .or_else(|| self.queried_user().filter(|u| u.id == id))
    }

    fn custom_template(&self, entity: EntityRef) -> Option<&str> {
        self.custom_templates.get(entity)
    }
}

impl Request {
    fn queried_user(&self) -> Option<&User> {
        self.queried.as_ref().and_then(QueriedObject::as_user)
    }
}

/// Load a request description from a YAML file.
///
/// # Errors
///
/// Returns `RequestNotFound` if the file doesn't exist.
/// Returns `RequestParseError` if the YAML is invalid.
pub fn load_request(path: &Path) -> Result<Request> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StratumError::RequestNotFound {
                path: path.to_path_buf(),
            }
        } else {
            StratumError::Io(e)
        }
    })?;

    parse_request(&content, path)
}

/// Parse YAML content into a [`Request`].
///
/// `source_path` is only used for error reporting.
pub fn parse_request(content: &str, source_path: &Path) -> Result<Request> {
    serde_yaml::from_str(content).map_err(|e| StratumError::RequestParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
