//! Per-component completeness records and the conversion report
//!
//! Created fresh per run and never mutated after assembly; consumed only by
//! the report renderer and the CLI's strict-mode policy.

use std::fmt;

use serde::Serialize;

use crate::extract::SourceKind;

/// Deep-dive presence thresholds for the per-component flags
const MIN_BULLETS: usize = 2;
const MIN_CONTEXT_LEN: usize = 20;
const MIN_RATIONALE_LEN: usize = 50;

/// Overall completion status of one component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompletionStatus {
    Complete,
    Derived,
    Incomplete,
    Partial,
}

impl fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete => write!(f, "COMPLETE"),
            Self::Derived => write!(f, "DERIVED"),
            Self::Incomplete => write!(f, "INCOMPLETE"),
            Self::Partial => write!(f, "PARTIAL"),
        }
    }
}

/// Validation outcome for one component's extraction
#[derive(Debug, Clone, Serialize)]
pub struct ComponentValidation {
    pub component_id: String,
    pub component_name: String,
    pub source: String,
    pub wsn_complete: bool,
    pub wsn_missing_fields: Vec<&'static str>,
    pub has_strengths: bool,
    pub has_weaknesses: bool,
    pub has_competitive_context: bool,
    pub has_score_breakdown: bool,
    pub has_rationale: bool,
    pub wsn_derived_from_rationale: bool,
    pub warnings: Vec<String>,
}

impl ComponentValidation {
    /// Empty validation shell for a component before its flags are filled
    pub fn new(component_id: &str, component_name: &str, source: SourceKind) -> Self {
        Self {
            component_id: component_id.to_string(),
            component_name: component_name.to_string(),
            source: source.to_string(),
            wsn_complete: false,
            wsn_missing_fields: Vec::new(),
            has_strengths: false,
            has_weaknesses: false,
            has_competitive_context: false,
            has_score_breakdown: false,
            has_rationale: false,
            wsn_derived_from_rationale: false,
            warnings: Vec::new(),
        }
    }

    /// Set the deep-dive presence flags from raw counts/lengths
    pub fn set_deep_dive_flags(
        &mut self,
        strengths: usize,
        weaknesses: usize,
        context_len: usize,
        breakdown: usize,
        rationale_len: usize,
    ) {
        self.has_strengths = strengths >= MIN_BULLETS;
        self.has_weaknesses = weaknesses >= MIN_BULLETS;
        self.has_competitive_context = context_len > MIN_CONTEXT_LEN;
        self.has_score_breakdown = breakdown >= MIN_BULLETS;
        self.has_rationale = rationale_len > MIN_RATIONALE_LEN;
    }

    pub fn overall_status(&self) -> CompletionStatus {
        if self.wsn_complete && self.has_strengths && self.has_weaknesses {
            CompletionStatus::Complete
        } else if self.wsn_derived_from_rationale {
            CompletionStatus::Derived
        } else if !self.wsn_missing_fields.is_empty() {
            CompletionStatus::Incomplete
        } else {
            CompletionStatus::Partial
        }
    }
}

/// Status tallies across all components of a run
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct StatusTally {
    pub complete: usize,
    pub derived: usize,
    pub incomplete: usize,
    pub total: usize,
}

/// Completeness report for one conversion run
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub brand_name: String,
    pub timestamp: String,
    pub total_score: f64,
    pub components: Vec<ComponentValidation>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ConversionReport {
    pub fn new(brand_name: &str, timestamp: &str, total_score: f64) -> Self {
        Self {
            brand_name: brand_name.to_string(),
            timestamp: timestamp.to_string(),
            total_score,
            components: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn tally(&self) -> StatusTally {
        let mut tally = StatusTally { total: self.components.len(), ..Default::default() };
        for component in &self.components {
            match component.overall_status() {
                CompletionStatus::Complete => tally.complete += 1,
                CompletionStatus::Derived => tally.derived += 1,
                CompletionStatus::Incomplete => tally.incomplete += 1,
                CompletionStatus::Partial => {}
            }
        }
        tally
    }
}
