//! The resolution pipeline.
//!
//! One request runs through a fixed sequence of stages:
//!
//! ```text
//! Idle → Building(v₁) → Recording(v₁) → Matching(v₁) → Building(v₂) → … → Selecting → Done
//! ```
//!
//! For each detected page view the builder produces a candidate list, the
//! context records it and the filter cleans it, and the probe looks for the
//! first existing candidate. The match report is always empty, so every view
//! is evaluated and the full hierarchy is recorded. Selection then picks the
//! first located template.

use serde::Serialize;
use std::fmt;

use super::builders::{builder, BuilderOrigin};
use super::candidates::{CandidateFilter, UniqueFilter};
use super::context::{HostValue, ResolutionContext};
use super::locator::TemplateLocator;
use crate::query::{PageView, QueryState};

/// Default template file extension.
pub const DEFAULT_EXTENSION: &str = "php";

/// Pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Building(PageView),
    Recording(PageView),
    Matching(PageView),
    Selecting,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Building(view) => write!(f, "building({})", view),
            Self::Recording(view) => write!(f, "recording({})", view),
            Self::Matching(view) => write!(f, "matching({})", view),
            Self::Selecting => write!(f, "selecting"),
            Self::Done => write!(f, "done"),
        }
    }
}

/// What happened for one evaluated view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewTrace {
    pub view: PageView,
    pub origin: BuilderOrigin,
    /// Candidates as probed, after filtering.
    pub candidates: Vec<String>,
    /// What the probe found for this view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found: Option<String>,
}

/// Outcome of a finished pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    /// The selected template, or the passthrough value.
    pub template: HostValue,
    /// First template the probe confirmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub located: Option<String>,
    /// Every candidate recorded, extensions stripped.
    pub hierarchy: Vec<String>,
    pub views: Vec<ViewTrace>,
}

/// Page views to evaluate for a request, in host order, `index` last.
pub fn detect_views(query: &dyn QueryState) -> Vec<PageView> {
    let mut views: Vec<PageView> = PageView::ORDER
        .into_iter()
        .filter(|view| *view != PageView::Index && query.is(*view))
        .collect();
    views.push(PageView::Index);
    views
}

/// Drives one request through the resolution stages.
pub struct Pipeline<'a> {
    query: &'a dyn QueryState,
    locator: &'a dyn TemplateLocator,
    filter: Box<dyn CandidateFilter + 'a>,
    extension: String,
    views: Vec<PageView>,
    cursor: usize,
    stage: Stage,
    pending: Vec<String>,
    incoming: HostValue,
    context: ResolutionContext,
    traces: Vec<ViewTrace>,
    output: Option<HostValue>,
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline with the default extension and filter.
    pub fn new(query: &'a dyn QueryState, locator: &'a dyn TemplateLocator) -> Self {
        Self {
            query,
            locator,
            filter: Box::new(UniqueFilter),
            extension: DEFAULT_EXTENSION.to_string(),
            views: detect_views(query),
            cursor: 0,
            stage: Stage::Idle,
            pending: Vec::new(),
            incoming: HostValue::empty(),
            context: ResolutionContext::new(),
            traces: Vec::new(),
            output: None,
        }
    }

    /// Use a different template extension (without the leading dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Use a different candidate filter.
    pub fn with_filter(mut self, filter: impl CandidateFilter + 'a) -> Self {
        self.filter = Box::new(filter);
        self
    }

    /// Value other extensions placed at the final selection point.
    pub fn with_incoming(mut self, incoming: HostValue) -> Self {
        self.incoming = incoming;
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn views(&self) -> &[PageView] {
        &self.views
    }

    pub fn context(&self) -> &ResolutionContext {
        &self.context
    }

    /// Advance by one stage. Returns `false` once the pipeline is done.
    pub fn step(&mut self) -> bool {
        let next = match self.stage {
            Stage::Idle => self.first_stage(),
            Stage::Building(view) => {
                self.pending = builder(view).build(self.query, &self.extension);
                tracing::trace!(view = %view, candidates = ?self.pending, "built candidates");
                Stage::Recording(view)
            }
            Stage::Recording(view) => {
                let recorded = self.context.record(std::mem::take(&mut self.pending));
                self.pending = self.filter.filter(recorded);
                Stage::Matching(view)
            }
            Stage::Matching(view) => self.match_view(view),
            Stage::Selecting => {
                let incoming = std::mem::take(&mut self.incoming);
                let selected = self.context.select(incoming);
                tracing::debug!(template = %selected, "selected template");
                self.output = Some(selected);
                Stage::Done
            }
            Stage::Done => return false,
        };

        self.stage = next;
        true
    }

    /// Run every remaining stage and return the outcome.
    pub fn run(mut self) -> Resolution {
        while self.step() {}

        let template = self.output.take().unwrap_or_default();
        let (hierarchy, located) = self.context.into_parts();
        Resolution {
            template,
            located,
            hierarchy,
            views: self.traces,
        }
    }

    fn first_stage(&self) -> Stage {
        match self.views.first() {
            Some(view) => Stage::Building(*view),
            None => Stage::Selecting,
        }
    }

    fn match_view(&mut self, view: PageView) -> Stage {
        let candidates = std::mem::take(&mut self.pending);
        let found = if candidates.is_empty() {
            None
        } else {
            self.locator.locate(&candidates)
        };

        // The report is always empty, so evaluation moves on to the next view.
        self.context.report_match(found.as_deref().unwrap_or_default());

        self.traces.push(ViewTrace {
            view,
            origin: builder(view).origin,
            candidates,
            found,
        });

        self.cursor += 1;
        match self.views.get(self.cursor) {
            Some(next) => Stage::Building(*next),
            None => Stage::Selecting,
        }
    }
}

impl fmt::Debug for Pipeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("extension", &self.extension)
            .field("views", &self.views)
            .field("stage", &self.stage)
            .field("context", &self.context)
            .finish()
    }
}
