//! Candidate-list builders, one per page view.
//!
//! Front page, singular, taxonomy, author and date views get the granular
//! hierarchies defined here and always replace whatever the host would have
//! built. The remaining views fall back to the host's default lists so the
//! pipeline can run end to end.
//!
//! Every builder is a pure function of the query state and the template
//! extension.

use serde::Serialize;

use super::candidates::Candidates;
use crate::query::{EntityRef, FrontDisplay, PageView, Post, QueryState, User};

/// Taxonomy whose term slugs carry [`POST_FORMAT_PREFIX`].
pub const POST_FORMAT_TAXONOMY: &str = "post_format";

/// Prefix the host stores on post format term slugs.
pub const POST_FORMAT_PREFIX: &str = "post-format-";

/// Signature shared by every builder.
pub type BuildFn = fn(&dyn QueryState, &str) -> Vec<String>;

/// Where a builder comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuilderOrigin {
    /// Granular hierarchy that replaces the host's list.
    Override,
    /// The host's own list.
    HostDefault,
}

/// A builder bound to the view it serves.
#[derive(Clone, Copy)]
pub struct Builder {
    pub view: PageView,
    pub origin: BuilderOrigin,
    build: BuildFn,
}

impl Builder {
    /// Build the candidate list for the current request.
    pub fn build(&self, query: &dyn QueryState, extension: &str) -> Vec<String> {
        (self.build)(query, extension)
    }
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("view", &self.view)
            .field("origin", &self.origin)
            .finish()
    }
}

/// Look up the builder for a page view.
pub fn builder(view: PageView) -> Builder {
    let origin = match view {
        PageView::FrontPage
        | PageView::Attachment
        | PageView::Single
        | PageView::Page
        | PageView::Taxonomy
        | PageView::Author
        | PageView::Date => BuilderOrigin::Override,
        _ => BuilderOrigin::HostDefault,
    };

    Builder {
        view,
        origin,
        build: build_fn(view),
    }
}

fn build_fn(view: PageView) -> BuildFn {
    match view {
        PageView::FrontPage => front_page,
        PageView::Attachment => attachment,
        PageView::Single => single,
        PageView::Page => page,
        PageView::Taxonomy => taxonomy,
        PageView::Author => author,
        PageView::Date => date,
        PageView::NotFound => not_found,
        PageView::Search => search,
        PageView::Home => home,
        PageView::PostTypeArchive => post_type_archive,
        PageView::Singular => singular,
        PageView::Archive => archive,
        PageView::Index => index,
    }
}

/// Front page hierarchy.
///
/// Only a static front page gets candidates. When the front shows the latest
/// posts the list is empty so `front-page` never shadows the posts index.
pub fn front_page(query: &dyn QueryState, extension: &str) -> Vec<String> {
    if query.front_display() != FrontDisplay::Page {
        return Vec::new();
    }

    let mut list = Candidates::new(extension);
    if let Some(post) = queried_post(query) {
        list.custom(query.custom_template(EntityRef::Post(post.id)));
    }
    list.stem("front-page");
    list.into_vec()
}

pub fn attachment(query: &dyn QueryState, extension: &str) -> Vec<String> {
    singular_hierarchy(query, extension, "attachment")
}

pub fn single(query: &dyn QueryState, extension: &str) -> Vec<String> {
    singular_hierarchy(query, extension, "single")
}

pub fn page(query: &dyn QueryState, extension: &str) -> Vec<String> {
    singular_hierarchy(query, extension, "page")
}

/// Shared hierarchy for attachments, posts and pages.
///
/// Attachments try MIME-qualified names (`attachment-image-jpeg`,
/// `attachment-jpeg`, `attachment-image`). Other posts try id- and
/// slug-qualified names with and without the `single-` prefix. Both then try
/// the bare post type and finally `generic`.
fn singular_hierarchy(query: &dyn QueryState, extension: &str, generic: &str) -> Vec<String> {
    let mut list = Candidates::new(extension);

    if let Some(post) = queried_post(query) {
        list.custom(query.custom_template(EntityRef::Post(post.id)));

        let post_type = post.post_type.as_str();
        if post.is_attachment() {
            if let Some(mime) = post.mime() {
                if !mime.subtype.is_empty() {
                    list.stem(format!("attachment-{}-{}", mime.kind, mime.subtype));
                    list.stem(format!("attachment-{}", mime.subtype));
                }
                list.stem(format!("attachment-{}", mime.kind));
            }
        } else {
            list.stem(format!("single-{}-{}", post_type, post.id));
            list.stem(format!("{}-{}", post_type, post.id));
            if !post.slug.is_empty() {
                list.stem(format!("single-{}-{}", post_type, post.slug));
                list.stem(format!("{}-{}", post_type, post.slug));
            }
        }
        list.stem(post_type);
    }

    list.stem(generic);
    list.into_vec()
}

/// Term archive hierarchy: `taxonomy-{taxonomy}-{slug}`, `taxonomy-{taxonomy}`,
/// `taxonomy`.
pub fn taxonomy(query: &dyn QueryState, extension: &str) -> Vec<String> {
    let mut list = Candidates::new(extension);

    if let Some(term) = query.queried_object().and_then(|o| o.as_term()) {
        let slug = normalize_term_slug(&term.taxonomy, &term.slug);

        list.custom(query.custom_template(EntityRef::Term(term.id)));
        if !slug.is_empty() {
            list.stem(format!("taxonomy-{}-{}", term.taxonomy, slug));
        }
        list.stem(format!("taxonomy-{}", term.taxonomy));
    }

    list.stem("taxonomy");
    list.into_vec()
}

/// Strip the stored prefix from post format slugs (`post-format-aside` → `aside`).
pub fn normalize_term_slug<'a>(taxonomy: &str, slug: &'a str) -> &'a str {
    if taxonomy == POST_FORMAT_TAXONOMY {
        slug.strip_prefix(POST_FORMAT_PREFIX).unwrap_or(slug)
    } else {
        slug
    }
}

/// Author archive hierarchy: `user-{nicename}`, one `user-role-{role}` per
/// role, `user`, `author`.
pub fn author(query: &dyn QueryState, extension: &str) -> Vec<String> {
    let mut list = Candidates::new(extension);

    if let Some(user) = queried_author(query) {
        list.custom(query.custom_template(EntityRef::User(user.id)));
        if !user.nicename.is_empty() {
            list.stem(format!("user-{}", user.nicename));
        }
        for role in &user.roles {
            list.stem(format!("user-role-{}", role));
        }
    }

    list.stem("user");
    list.stem("author");
    list.into_vec()
}

/// Date archive hierarchy.
///
/// Time archives try `minute` or `hour`, then `time`. Other archives try the
/// first of `day`, `week`, `month`, `year` that applies. `date` always closes
/// the list.
pub fn date(query: &dyn QueryState, extension: &str) -> Vec<String> {
    let vars = query.vars();
    let mut list = Candidates::new(extension);

    if vars.is_time() {
        if vars.minute.is_some() {
            list.stem("minute");
        } else if vars.hour.is_some() {
            list.stem("hour");
        }
        list.stem("time");
    } else if vars.is_day() {
        list.stem("day");
    } else if vars.is_week() {
        list.stem("week");
    } else if vars.is_month() {
        list.stem("month");
    } else if vars.is_year() {
        list.stem("year");
    }

    list.stem("date");
    list.into_vec()
}

fn not_found(_query: &dyn QueryState, extension: &str) -> Vec<String> {
    let mut list = Candidates::new(extension);
    list.stem("404");
    list.into_vec()
}

fn search(_query: &dyn QueryState, extension: &str) -> Vec<String> {
    let mut list = Candidates::new(extension);
    list.stem("search");
    list.into_vec()
}

fn home(_query: &dyn QueryState, extension: &str) -> Vec<String> {
    let mut list = Candidates::new(extension);
    list.stem("home").stem("index");
    list.into_vec()
}

fn post_type_archive(query: &dyn QueryState, extension: &str) -> Vec<String> {
    let mut list = Candidates::new(extension);
    if let Some(post_type) = query.vars().post_type.as_deref() {
        list.stem(format!("archive-{}", post_type));
    }
    list.stem("archive");
    list.into_vec()
}

fn singular(_query: &dyn QueryState, extension: &str) -> Vec<String> {
    let mut list = Candidates::new(extension);
    list.stem("singular");
    list.into_vec()
}

fn archive(_query: &dyn QueryState, extension: &str) -> Vec<String> {
    let mut list = Candidates::new(extension);
    list.stem("archive");
    list.into_vec()
}

fn index(_query: &dyn QueryState, extension: &str) -> Vec<String> {
    let mut list = Candidates::new(extension);
    list.stem("index");
    list.into_vec()
}

fn queried_post(query: &dyn QueryState) -> Option<&Post> {
    query.queried_object().and_then(|o| o.as_post())
}

fn queried_author(query: &dyn QueryState) -> Option<&User> {
    match query.vars().author {
        Some(id) => query.user(id),
        None => query.queried_object().and_then(|o| o.as_user()),
    }
}
