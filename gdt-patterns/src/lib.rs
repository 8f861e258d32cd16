//! Text patterns for gdt-convert
//! Extracted to a separate crate for compilation optimization

use once_cell::sync::Lazy;
use regex::Regex;

/// URL-friendly slug generation
pub mod slug {
    use super::*;

    static NON_ALNUM: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("Invalid regex pattern"));

    /// Convert text to a lowercase, dash-joined slug
    pub fn slugify(text: &str) -> String {
        NON_ALNUM
            .replace_all(&text.to_lowercase(), "-")
            .trim_matches('-')
            .to_string()
    }

    /// Slug with underscores instead of dashes, used for score-breakdown keys
    pub fn slugify_underscore(text: &str) -> String {
        slugify(text).replace('-', "_")
    }
}

/// Sentence-level text handling for narrative prose
pub mod sentence {
    use super::*;

    static BOUNDARY: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"[.!?]\s+").expect("Invalid regex pattern"));

    static FIRST: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(.+?[.!?])\s").expect("Invalid regex pattern"));

    /// Split prose into sentences. A boundary is `.`, `!` or `?` followed by
    /// whitespace; the terminator stays with its sentence.
    pub fn split(text: &str) -> Vec<String> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }
        let mut sentences = Vec::new();
        let mut start = 0;
        for m in BOUNDARY.find_iter(text) {
            sentences.push(text[start..m.start() + 1].to_string());
            start = m.end();
        }
        if start < text.len() {
            sentences.push(text[start..].to_string());
        }
        sentences
    }

    /// First sentence of a paragraph, best effort when no terminator exists
    pub fn first(text: &str) -> String {
        let text = text.trim();
        if text.is_empty() {
            return String::new();
        }
        if let Some(caps) = FIRST.captures(text) {
            return caps[1].to_string();
        }
        match text.split_once('.') {
            Some((head, _)) => format!("{}.", head),
            None => text.to_string(),
        }
    }
}

/// Numeric/percentage token detection in rationale prose
pub mod metric {
    use super::*;

    static TOKEN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)([\d.]+%|[\d.]+/10|score[sd]?\s+[\d.]+)").expect("Invalid regex pattern")
    });

    /// Find the first metric-looking token ("62%", "5.4/10", "scored 7.1")
    pub fn find(text: &str) -> Option<String> {
        TOKEN.find(text).map(|m| m.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slug::slugify("Espolon Tequila"), "espolon-tequila");
        assert_eq!(slug::slugify("  CAVA!  "), "cava");
        assert_eq!(slug::slugify("Brand & Business"), "brand-business");
        assert_eq!(slug::slugify_underscore("Cultural Authenticity"), "cultural_authenticity");
    }

    #[test]
    fn test_sentence_split() {
        let sentences =
            sentence::split("First point. Second point! Third point? Trailing fragment");
        assert_eq!(
            sentences,
            vec!["First point.", "Second point!", "Third point?", "Trailing fragment"]
        );
    }

    #[test]
    fn test_sentence_split_keeps_inline_numbers() {
        let sentences = sentence::split("The brand scores 5.4/10 overall. Reach is limited.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "The brand scores 5.4/10 overall.");
    }

    #[test]
    fn test_sentence_split_empty() {
        assert!(sentence::split("   ").is_empty());
    }

    #[test]
    fn test_first_sentence() {
        assert_eq!(sentence::first("One thing. Another thing."), "One thing.");
        assert_eq!(sentence::first("No terminator here"), "No terminator here");
        assert_eq!(sentence::first("Tail period.Another"), "Tail period.");
    }

    #[test]
    fn test_metric_find() {
        assert_eq!(metric::find("share rose to 62% among buyers"), Some("62%".to_string()));
        assert_eq!(metric::find("rated 5.4/10 overall"), Some("5.4/10".to_string()));
        assert_eq!(metric::find("the brand scored 7.1 on recall"), Some("scored 7.1".to_string()));
        assert_eq!(metric::find("no numbers here"), None);
    }
}
