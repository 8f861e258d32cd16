//! JSON-first component extraction
//!
//! The primary path. The WSN narrative is seeded from the id-specific
//! headline paragraph split into sentences; competitive context becomes the
//! implication and explicit recommendations (B1 only) become the action.
//! Gaps are left empty for the completeness resolver.

use gdt_patterns::sentence;
use serde_json::Value;
use tracing::debug;

use crate::component::ComponentId;
use crate::extract::mapping::{self, HEADLINE_FALLBACKS};
use crate::extract::{ComponentExtraction, SourceKind};
use crate::model::{ScoreBreakdown, WsnContent};

/// Extract one component from its JSON output document
pub fn extract(id: ComponentId, doc: &Value) -> ComponentExtraction {
    let map = mapping::for_component(id);

    let mut headline_text = mapping::get_str(doc, map.headline);
    if headline_text.is_empty() {
        for alt in HEADLINE_FALLBACKS {
            headline_text = mapping::get_str(doc, alt);
            if !headline_text.is_empty() {
                break;
            }
        }
    }
    if headline_text.is_empty() {
        debug!(component = %id, "no headline field found in JSON document");
    }

    let context = mapping::get_str(doc, map.context);
    let rationale = mapping::get_str(doc, map.rationale);
    let recommendations =
        map.recommendations.map(|path| mapping::get_str(doc, path)).unwrap_or_default();

    ComponentExtraction {
        name: String::new(),
        score: mapping::get_f64(doc, map.rating),
        tier: mapping::get_str(doc, map.tier),
        wsn: wsn_from_text(&headline_text, &context, &recommendations),
        strengths: format_strengths(mapping::get_nested(doc, map.strengths)),
        weaknesses: format_weaknesses(mapping::get_nested(doc, map.weaknesses)),
        competitive_context: context,
        rationale,
        recommendations,
        score_breakdown: camel_case_scores(mapping::get_nested(doc, map.scores)),
        source: SourceKind::Json,
    }
}

/// Seed a WSN record from a summary paragraph: first sentence is the
/// headline, second the subline, the rest the observation.
pub fn wsn_from_text(full_text: &str, context: &str, recommendations: &str) -> WsnContent {
    let mut wsn = WsnContent::default();
    if full_text.trim().is_empty() {
        return wsn;
    }

    let sentences = sentence::split(full_text);
    if let Some(first) = sentences.first() {
        wsn.headline = first.trim().to_string();
    }
    if let Some(second) = sentences.get(1) {
        wsn.subline = second.trim().to_string();
    }
    if sentences.len() >= 3 {
        wsn.what = sentences[2..].join(" ").trim().to_string();
    } else if sentences.len() == 2 {
        wsn.what = sentences[1].trim().to_string();
    }

    if !context.trim().is_empty() {
        wsn.so_what = context.trim().to_string();
    }
    if !recommendations.trim().is_empty() {
        wsn.now_what = recommendations.trim().to_string();
    }

    wsn
}

/// Normalize strengths: plain strings pass through, structured entries are
/// flattened ("element (high impact)" / "theme (strong)")
fn format_strengths(data: Option<&Value>) -> Vec<String> {
    list_items(data)
        .map(|item| match item {
            Value::String(s) => s.clone(),
            Value::Object(obj) => {
                if let Some(element) = obj.get("element").and_then(Value::as_str) {
                    format!("{} ({} impact)", element, str_field(obj, "impact"))
                } else if let Some(theme) = obj.get("theme").and_then(Value::as_str) {
                    format!("{} ({})", theme, str_field(obj, "strength"))
                } else {
                    Value::Object(obj.clone()).to_string()
                }
            }
            other => other.to_string(),
        })
        .collect()
}

/// Normalize weaknesses: structured entries flatten to "element (high priority)"
fn format_weaknesses(data: Option<&Value>) -> Vec<String> {
    list_items(data)
        .map(|item| match item {
            Value::String(s) => s.clone(),
            Value::Object(obj) => {
                if let Some(element) = obj.get("element").and_then(Value::as_str) {
                    format!("{} ({} priority)", element, str_field(obj, "priority"))
                } else {
                    Value::Object(obj.clone()).to_string()
                }
            }
            other => other.to_string(),
        })
        .collect()
}

fn list_items(data: Option<&Value>) -> impl Iterator<Item = &Value> {
    data.and_then(Value::as_array).map(|a| a.as_slice()).unwrap_or_default().iter()
}

fn str_field(obj: &serde_json::Map<String, Value>, key: &str) -> String {
    obj.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
}

/// Convert a snake_case score map to camelCase display keys, dropping any
/// non-numeric values
fn camel_case_scores(data: Option<&Value>) -> ScoreBreakdown {
    let mut result = ScoreBreakdown::new();
    let Some(scores) = data.and_then(Value::as_object) else {
        return result;
    };
    for (key, value) in scores {
        if value.is_number() {
            result.insert(snake_to_camel(key), value.clone());
        }
    }
    result
}

fn snake_to_camel(key: &str) -> String {
    let mut camel = String::with_capacity(key.len());
    for (i, word) in key.split('_').filter(|w| !w.is_empty()).enumerate() {
        let mut chars = word.chars();
        match chars.next() {
            Some(first) if i == 0 => {
                camel.extend(first.to_lowercase());
            }
            Some(first) => {
                camel.extend(first.to_uppercase());
            }
            None => {}
        }
        camel.extend(chars.flat_map(|c| c.to_lowercase()));
    }
    camel
}
