//! Queried entities: posts, terms and users.

use serde::{Deserialize, Serialize};

/// Post type name used for attachments.
pub const ATTACHMENT_POST_TYPE: &str = "attachment";

/// A single post of any type, including pages and attachments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub post_type: String,
    pub slug: String,
    /// Full MIME type, only meaningful for attachments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl Post {
    /// Whether this post is an attachment.
    pub fn is_attachment(&self) -> bool {
        self.post_type == ATTACHMENT_POST_TYPE
    }

    /// Decomposed MIME type, if the post carries one.
    pub fn mime(&self) -> Option<MimeType> {
        self.mime_type.as_deref().and_then(MimeType::parse)
    }
}

/// A taxonomy term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: u64,
    pub taxonomy: String,
    pub slug: String,
}

/// A user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub nicename: String,
    /// Roles in the order the host reports them.
    #[serde(default)]
    pub roles: Vec<String>,
}

/// The object a request is about.
///
/// Written in request files as a map tagged by `kind`:
/// `{ kind: post, id: 42, post_type: post, slug: hello }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueriedObject {
    Post(Post),
    Term(Term),
    User(User),
}

impl QueriedObject {
    pub fn as_post(&self) -> Option<&Post> {
        match self {
            Self::Post(post) => Some(post),
            _ => None,
        }
    }

    pub fn as_term(&self) -> Option<&Term> {
        match self {
            Self::Term(term) => Some(term),
            _ => None,
        }
    }

    pub fn as_user(&self) -> Option<&User> {
        match self {
            Self::User(user) => Some(user),
            _ => None,
        }
    }
}

/// A MIME type split into its top-level type and subtype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeType {
    pub kind: String,
    pub subtype: String,
}

impl MimeType {
    /// Split a full MIME type such as `image/jpeg`.
    ///
    /// Parameters (`; charset=...`) are dropped and the result is lowercased.
    /// A value without a `/` yields an empty subtype. Returns `None` when no
    /// top-level type is present.
    pub fn parse(raw: &str) -> Option<Self> {
        let essence = raw.split(';').next().unwrap_or_default().trim();
        let (kind, subtype) = match essence.split_once('/') {
            Some((kind, subtype)) => (kind.trim(), subtype.trim()),
            None => (essence, ""),
        };

        if kind.is_empty() {
            return None;
        }

        Some(Self {
            kind: kind.to_ascii_lowercase(),
            subtype: subtype.to_ascii_lowercase(),
        })
    }
}
