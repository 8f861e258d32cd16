//! Completeness resolver for the WSN narrative
//!
//! Decides per field whether extracted content is usable and, when the
//! record is incomplete, derives replacements from the rating rationale via
//! lighter-weight sentence heuristics. Derived values only ever fill gaps;
//! a usable original is never overwritten.

use gdt_patterns::{metric, sentence};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::WsnContent;

/// A field must be strictly longer than this to count as usable
pub const MIN_FIELD_LEN: usize = 10;

/// Case-insensitive substrings marking placeholder content
const PLACEHOLDERS: [&str; 7] = [
    "pending",
    "in progress",
    "tbd",
    "to be determined",
    "placeholder",
    "[insert",
    "coming soon",
];

const OBSERVATION_KEYWORDS: [&str; 6] = ["when", "people", "consumers", "buyers", "most", "the brand"];
const IMPLICATION_KEYWORDS: [&str; 5] = ["means", "creates", "results", "leaves", "puts"];
const ACTION_KEYWORDS: [&str; 6] = ["need", "should", "must", "requires", "demands", "calls for"];

/// "Acme earns a solid rating because ..." preamble on rationale openers
static EARNS_PREAMBLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Za-z]+\s+earns\s+an?\s+\w+\s+rating\s+because\s+")
        .expect("Invalid regex pattern")
});

/// The six WSN fields, addressable for per-field merge bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WsnField {
    Headline,
    Subline,
    What,
    Evidence,
    SoWhat,
    NowWhat,
}

impl WsnField {
    pub const ALL: [WsnField; 6] = [
        Self::Headline,
        Self::Subline,
        Self::What,
        Self::Evidence,
        Self::SoWhat,
        Self::NowWhat,
    ];

    /// Fields required for an overall "complete" verdict
    pub const REQUIRED: [WsnField; 4] = [Self::Headline, Self::What, Self::SoWhat, Self::NowWhat];

    /// Wire-facing field name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Headline => "headline",
            Self::Subline => "subline",
            Self::What => "what",
            Self::Evidence => "evidence",
            Self::SoWhat => "soWhat",
            Self::NowWhat => "nowWhat",
        }
    }

    pub fn get<'a>(&self, wsn: &'a WsnContent) -> &'a str {
        match self {
            Self::Headline => &wsn.headline,
            Self::Subline => &wsn.subline,
            Self::What => &wsn.what,
            Self::Evidence => &wsn.evidence,
            Self::SoWhat => &wsn.so_what,
            Self::NowWhat => &wsn.now_what,
        }
    }

    fn set(&self, wsn: &mut WsnContent, value: String) {
        match self {
            Self::Headline => wsn.headline = value,
            Self::Subline => wsn.subline = value,
            Self::What => wsn.what = value,
            Self::Evidence => wsn.evidence = value,
            Self::SoWhat => wsn.so_what = value,
            Self::NowWhat => wsn.now_what = value,
        }
    }
}

/// Whether text contains a known placeholder phrase (case-insensitive,
/// substring match)
pub fn is_placeholder(text: &str) -> bool {
    let lowered = text.to_lowercase();
    PLACEHOLDERS.iter().any(|p| lowered.contains(p))
}

/// A value is usable when it is non-empty, long enough, and not a placeholder
pub fn is_usable(text: &str) -> bool {
    text.len() > MIN_FIELD_LEN && !is_placeholder(text)
}

/// Overall verdict over the required fields only
pub fn is_complete(wsn: &WsnContent) -> bool {
    WsnField::REQUIRED.iter().all(|field| is_usable(field.get(wsn)))
}

/// Names of all fields currently failing the usability test
pub fn missing_fields(wsn: &WsnContent) -> Vec<&'static str> {
    WsnField::ALL
        .iter()
        .filter(|field| !is_usable(field.get(wsn)))
        .map(|field| field.name())
        .collect()
}

/// Derive a WSN record from rationale prose and competitive context.
///
/// Heuristics only; every field may stay empty when no sentence qualifies.
pub fn derive_from_rationale(rationale: &str, competitive_context: &str, tier: &str) -> WsnContent {
    let mut wsn = WsnContent::default();
    if rationale.trim().is_empty() {
        return wsn;
    }

    let sentences = sentence::split(rationale);

    if let Some(first) = sentences.first() {
        let stripped = EARNS_PREAMBLE.replace(first.trim(), "");
        wsn.headline = capitalize_first(stripped.trim());
    }

    for candidate in sentences.iter().skip(1).take(3) {
        if contains_keyword(candidate, &OBSERVATION_KEYWORDS) {
            wsn.what = candidate.trim().to_string();
            break;
        }
    }

    if !competitive_context.trim().is_empty() {
        wsn.so_what = sentence::first(competitive_context);
    } else {
        for candidate in &sentences {
            if contains_keyword(candidate, &IMPLICATION_KEYWORDS) {
                wsn.so_what = candidate.trim().to_string();
                break;
            }
        }
    }

    for candidate in &sentences {
        if contains_keyword(candidate, &ACTION_KEYWORDS) {
            wsn.now_what = candidate.trim().to_string();
            break;
        }
    }

    if !tier.is_empty() {
        wsn.subline = format!("{} positioning in the category.", tier);
    }

    if let Some(token) = metric::find(rationale) {
        wsn.evidence = format!("Rating reflects {}.", token);
    }

    wsn
}

/// Merge per field: keep the usable original, otherwise substitute the
/// derived value if one exists, otherwise leave the field as it was.
/// Returns the merged record and the names of substituted fields.
pub fn merge(original: &WsnContent, derived: &WsnContent) -> (WsnContent, Vec<&'static str>) {
    let mut merged = WsnContent::default();
    let mut derived_fields = Vec::new();

    for field in WsnField::ALL {
        let original_value = field.get(original);
        let derived_value = field.get(derived);

        if is_usable(original_value) {
            field.set(&mut merged, original_value.to_string());
        } else if !derived_value.is_empty() {
            field.set(&mut merged, derived_value.to_string());
            derived_fields.push(field.name());
        } else {
            field.set(&mut merged, original_value.to_string());
        }
    }

    (merged, derived_fields)
}

fn contains_keyword(sentence: &str, keywords: &[&str]) -> bool {
    let lowered = sentence.to_lowercase();
    keywords.iter().any(|kw| lowered.contains(kw))
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
