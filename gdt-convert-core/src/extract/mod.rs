//! Field extraction from per-component documents
//!
//! Two source grammars produce the same shape: the JSON output files
//! (primary, [`json`]) and the legacy markdown documents (fallback,
//! [`markdown`]). Unmatched fields yield empty values; missing narrative
//! content is expected and handled by the completeness resolver, not here.

pub mod json;
pub mod mapping;
pub mod markdown;

use std::fmt;

use crate::bundle::ComponentSource;
use crate::component::ComponentId;
use crate::model::{ScoreBreakdown, WsnContent};

/// Where a component's data came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceKind {
    Json,
    Markdown,
    /// No document; only the summary rollup is available
    #[default]
    Rollup,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Markdown => write!(f, "markdown"),
            Self::Rollup => write!(f, "rollup"),
        }
    }
}

/// Everything pulled out of one component document
#[derive(Debug, Clone, Default)]
pub struct ComponentExtraction {
    /// Component name as stated by the document, empty if unstated
    pub name: String,
    pub score: f64,
    pub tier: String,
    pub wsn: WsnContent,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub competitive_context: String,
    pub rationale: String,
    pub recommendations: String,
    pub score_breakdown: ScoreBreakdown,
    pub source: SourceKind,
}

/// Extract fields from a component document, dispatching on source grammar
pub fn extract(id: ComponentId, source: &ComponentSource) -> ComponentExtraction {
    match source {
        ComponentSource::Json(doc) => json::extract(id, doc),
        ComponentSource::Markdown(text) => markdown::extract(text),
    }
}
