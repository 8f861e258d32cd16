//! Legacy markdown component extraction
//!
//! Fallback grammar for the older per-component markdown documents. An
//! ordered set of first-match-wins patterns pulls the WSN narrative out of
//! the Summary section and the supporting material out of the Deep Dive
//! section. Anything unmatched stays empty.

use gdt_patterns::slug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::{ComponentExtraction, SourceKind};
use crate::model::{ScoreBreakdown, WsnContent};

static TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#\s*([A-C][1-3]):\s*(.+)$").expect("Invalid regex pattern"));
static SCORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*Score:\*\*\s*([\d.]+)/10").expect("Invalid regex pattern"));
static TIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*Tier:\*\*\s*([^\n|*]+)").expect("Invalid regex pattern"));

static SUMMARY_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)## Summary\s*\n(.*?)(\n---|\n## )").expect("Invalid regex pattern")
});
static BOLD_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\*\*([^*]+)\*\*\s*$").expect("Invalid regex pattern"));
static ITALIC_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\*([^*]+)\*\s*$").expect("Invalid regex pattern"));
static WHAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\*\*What:\*\*\s*(.+?)(\n\*Evidence:|\n\n\*\*So What|\n\*\*So What|\n\n---)")
        .expect("Invalid regex pattern")
});
static EVIDENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*Evidence:\s*([^*]+)\*").expect("Invalid regex pattern"));
static SO_WHAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\*\*So What:\*\*\s*(.+?)(\n\n\*\*Now What|\n\*\*Now What|\n\n---|\n---)")
        .expect("Invalid regex pattern")
});
static NOW_WHAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\*\*Now What:\*\*\s*(.+?)(\n\n---|\n---|\n\n\n|\z)")
        .expect("Invalid regex pattern")
});

static DEEP_DIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)## Deep Dive\s*\n(.*?)(\n## Score Breakdown|\z)")
        .expect("Invalid regex pattern")
});
static STRENGTHS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)### Strengths\s*\n(.*?)(\n### |\z)").expect("Invalid regex pattern")
});
static WEAKNESSES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)### Weaknesses\s*\n(.*?)(\n### |\z)").expect("Invalid regex pattern")
});
static COMPETITIVE_CONTEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)### Competitive Context\s*\n(.*?)(\n### |\z)").expect("Invalid regex pattern")
});
static RATIONALE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)### Rating Rationale\s*\n(.*?)(\n### |\n---|\z)")
        .expect("Invalid regex pattern")
});
static RECOMMENDATIONS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)### Recommendations\s*\n(.*?)(\n### |\n---|\z)")
        .expect("Invalid regex pattern")
});
static BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^- (.+)$").expect("Invalid regex pattern"));

static BREAKDOWN_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)## Score Breakdown\s*\n(.*?)(\n\*Generated|\z)").expect("Invalid regex pattern")
});
static TABLE_ROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\|\s*([^|]+?)\s*\|\s*([^|]+?)\s*\|").expect("Invalid regex pattern"));

/// Extract one component from its legacy markdown document
pub fn extract(text: &str) -> ComponentExtraction {
    let mut extraction = ComponentExtraction { source: SourceKind::Markdown, ..Default::default() };

    if let Some(caps) = TITLE.captures(text) {
        extraction.name = caps[2].trim().to_string();
    }
    if let Some(caps) = SCORE.captures(text) {
        extraction.score = caps[1].parse().unwrap_or(0.0);
    }
    if let Some(caps) = TIER.captures(text) {
        extraction.tier = caps[1].trim().to_string();
    }

    extraction.wsn = parse_wsn(text);

    if let Some(caps) = DEEP_DIVE.captures(text) {
        let deep_dive = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        extraction.strengths = bullets(&STRENGTHS, deep_dive);
        extraction.weaknesses = bullets(&WEAKNESSES, deep_dive);
        extraction.competitive_context = section_text(&COMPETITIVE_CONTEXT, deep_dive);
        extraction.rationale = section_text(&RATIONALE, deep_dive);
        extraction.recommendations = section_text(&RECOMMENDATIONS, deep_dive);
    }

    extraction.score_breakdown = parse_score_breakdown(text);
    extraction
}

/// WSN narrative from the Summary section: first standalone bold line is the
/// headline, first standalone italic line not mentioning evidence is the
/// subline, labelled spans cover the rest.
fn parse_wsn(text: &str) -> WsnContent {
    let mut wsn = WsnContent::default();
    let Some(caps) = SUMMARY_SECTION.captures(text) else {
        return wsn;
    };
    let summary = caps.get(1).map(|m| m.as_str()).unwrap_or_default();

    if let Some(caps) = BOLD_LINE.captures(summary) {
        wsn.headline = caps[1].trim().to_string();
    }
    for caps in ITALIC_LINE.captures_iter(summary) {
        if !caps[0].to_lowercase().contains("evidence") {
            wsn.subline = caps[1].trim().to_string();
            break;
        }
    }
    if let Some(caps) = WHAT.captures(summary) {
        wsn.what = caps[1].trim().to_string();
    }
    if let Some(caps) = EVIDENCE.captures(summary) {
        wsn.evidence = caps[1].trim().to_string();
    }
    if let Some(caps) = SO_WHAT.captures(summary) {
        wsn.so_what = caps[1].trim().to_string();
    }
    if let Some(caps) = NOW_WHAT.captures(summary) {
        wsn.now_what = caps[1].trim().to_string();
    }
    wsn
}

fn bullets(section: &Regex, deep_dive: &str) -> Vec<String> {
    let Some(caps) = section.captures(deep_dive) else {
        return Vec::new();
    };
    BULLET
        .captures_iter(caps.get(1).map(|m| m.as_str()).unwrap_or_default())
        .map(|b| b[1].trim().to_string())
        .collect()
}

fn section_text(section: &Regex, deep_dive: &str) -> String {
    section
        .captures(deep_dive)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Two-column table rows under the Score Breakdown section. The first column
/// is normalized to a lowercase underscore key; rows whose second column does
/// not parse as a number are silently dropped.
fn parse_score_breakdown(text: &str) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::new();
    let Some(caps) = BREAKDOWN_SECTION.captures(text) else {
        return breakdown;
    };
    for row in TABLE_ROW.captures_iter(caps.get(1).map(|m| m.as_str()).unwrap_or_default()) {
        let name = row[1].trim();
        if name.is_empty() || name.chars().all(|c| c == '-') {
            continue;
        }
        let Ok(score) = row[2].trim().parse::<f64>() else {
            continue;
        };
        let key = slug::slugify_underscore(name);
        if !key.is_empty() {
            breakdown.insert(key, score.into());
        }
    }
    breakdown
}
