//! Per-component JSON field mappings
//!
//! Upstream document schemas differ per component, so each id carries a
//! small declarative map of dot-notation source paths instead of branching
//! logic. B1 is the outlier: its finding uses connection-specific field
//! names, its rating nests scores under `component_scores`, and it is the
//! only component that ships explicit recommendations.

use serde_json::Value;

use crate::component::ComponentId;

/// Dot-notation source paths for one component's JSON document
#[derive(Debug, Clone, Copy)]
pub struct FieldMap {
    pub headline: &'static str,
    pub strengths: &'static str,
    pub weaknesses: &'static str,
    pub context: &'static str,
    pub rationale: &'static str,
    pub recommendations: Option<&'static str>,
    pub scores: &'static str,
    pub tier: &'static str,
    pub rating: &'static str,
}

/// Generic headline paths tried when the id-specific field is absent
pub const HEADLINE_FALLBACKS: [&str; 2] = ["finding.summary", "finding.overall_summary"];

const STANDARD: FieldMap = FieldMap {
    headline: "",
    strengths: "finding.strengths",
    weaknesses: "finding.weaknesses",
    context: "finding.competitive_context",
    rationale: "rating.rationale",
    recommendations: None,
    scores: "rating.scores",
    tier: "rating.rating_tier",
    rating: "rating.overall_rating",
};

/// Look up the field map for a component id
pub fn for_component(id: ComponentId) -> FieldMap {
    match id {
        ComponentId::A1 => FieldMap { headline: "finding.positioning_summary", ..STANDARD },
        ComponentId::A2 => FieldMap {
            headline: "finding.pricing_summary",
            context: "finding.competitive_positioning",
            ..STANDARD
        },
        ComponentId::A3 => FieldMap { headline: "finding.growth_summary", ..STANDARD },
        ComponentId::B1 => FieldMap {
            headline: "finding.overall_connection_strength",
            strengths: "finding.connection_strengths",
            weaknesses: "finding.connection_weaknesses",
            context: "finding.competitive_positioning",
            recommendations: Some("rating.recommendations"),
            scores: "rating.component_scores",
            rating: "rating.final_rating",
            ..STANDARD
        },
        ComponentId::B2 => FieldMap { headline: "finding.cultural_summary", ..STANDARD },
        ComponentId::B3 => FieldMap { headline: "finding.experience_summary", ..STANDARD },
        ComponentId::C1 => FieldMap { headline: "finding.distinctiveness_summary", ..STANDARD },
        ComponentId::C2 => FieldMap { headline: "finding.innovation_summary", ..STANDARD },
        ComponentId::C3 => FieldMap { headline: "finding.disruption_summary", ..STANDARD },
    }
}

/// Walk a dot-notation path through nested objects
pub fn get_nested<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }
    let mut current = value;
    for key in path.split('.') {
        current = current.as_object()?.get(key)?;
    }
    Some(current)
}

/// String at a path; non-strings and missing paths yield empty.
/// A string array is joined with spaces (recommendation lists).
pub fn get_str(value: &Value, path: &str) -> String {
    match get_nested(value, path) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str())
            .collect::<Vec<_>>()
            .join(" "),
        _ => String::new(),
    }
}

/// Number at a path, defaulting to zero
pub fn get_f64(value: &Value, path: &str) -> f64 {
    get_nested(value, path).and_then(Value::as_f64).unwrap_or(0.0)
}
