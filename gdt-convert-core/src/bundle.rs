//! Source loader for one brand's analysis bundle
//!
//! Reads the summary document (fatal if absent) and, per component, the
//! JSON output file as the primary source with the legacy markdown document
//! as fallback. Missing or unreadable component documents degrade to
//! warnings; the pipeline later falls back to the summary rollup data.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::component::ComponentId;
use crate::error::{ConvertError, Result};
use crate::summary::SummaryDoc;

/// Canonical summary filename inside a bundle folder
pub const SUMMARY_FILE: &str = "gdt-summary-output.json";

/// Raw per-component source text, tagged by origin
#[derive(Debug, Clone)]
pub enum ComponentSource {
    Json(serde_json::Value),
    Markdown(String),
}

/// One brand's full analysis bundle, loaded once and immutable thereafter
#[derive(Debug, Clone)]
pub struct AnalysisBundle {
    pub folder: PathBuf,
    pub summary: SummaryDoc,
    pub documents: BTreeMap<ComponentId, ComponentSource>,
    /// Components with no usable document; rollup data fills in downstream
    pub missing: Vec<ComponentId>,
    /// Load-time degradations worth surfacing on the report
    pub warnings: Vec<String>,
}

/// Load a bundle from a folder.
///
/// Fails only when the summary file is absent or unreadable; every
/// per-component problem is recorded and the load continues.
pub fn load(folder: &Path) -> Result<AnalysisBundle> {
    let summary_path = folder.join(SUMMARY_FILE);
    if !summary_path.exists() {
        return Err(ConvertError::MissingSummary { path: summary_path });
    }

    let raw = fs::read_to_string(&summary_path)
        .map_err(|source| ConvertError::Io { path: summary_path.clone(), source })?;
    let summary: SummaryDoc = serde_json::from_str(&raw)
        .map_err(|source| ConvertError::Json { path: summary_path.clone(), source })?;
    debug!(brand = %summary.brand_name, "loaded summary document");

    let mut documents = BTreeMap::new();
    let mut missing = Vec::new();
    let mut warnings = Vec::new();

    for id in ComponentId::ALL {
        match load_component(folder, id, &mut warnings) {
            Some(source) => {
                documents.insert(id, source);
            }
            None => {
                warn!(component = %id, "no component document found, using summary rollup");
                warnings
                    .push(format!("[{}] Component document missing; using summary rollup", id));
                missing.push(id);
            }
        }
    }

    Ok(AnalysisBundle { folder: folder.to_path_buf(), summary, documents, missing, warnings })
}

fn load_component(
    folder: &Path,
    id: ComponentId,
    warnings: &mut Vec<String>,
) -> Option<ComponentSource> {
    let json_path = folder.join(id.json_filename());
    if json_path.exists() {
        match read_json(&json_path) {
            Ok(value) => return Some(ComponentSource::Json(value)),
            Err(err) => {
                warn!(component = %id, error = %err, "component JSON unreadable, trying markdown");
                warnings.push(format!("[{}] {}", id, err));
            }
        }
    }

    let md_path = folder.join(id.markdown_filename());
    if md_path.exists() {
        match fs::read_to_string(&md_path) {
            Ok(text) => return Some(ComponentSource::Markdown(text)),
            Err(err) => {
                warnings.push(format!("[{}] failed to read {}: {}", id, md_path.display(), err));
            }
        }
    }

    None
}

fn read_json(path: &Path) -> Result<serde_json::Value> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConvertError::Io { path: path.to_path_buf(), source })?;
    serde_json::from_str(&raw)
        .map_err(|source| ConvertError::Json { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_missing_summary_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, ConvertError::MissingSummary { .. }));
    }

    #[test]
    fn test_json_preferred_over_markdown() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), SUMMARY_FILE, r#"{"brand_name": "Acme"}"#);
        write(dir.path(), "a1-output.json", r#"{"finding": {}}"#);
        write(dir.path(), "a1-brand-positioning.md", "# A1: Brand Positioning");

        let bundle = load(dir.path()).unwrap();
        assert!(matches!(
            bundle.documents.get(&ComponentId::A1),
            Some(ComponentSource::Json(_))
        ));
    }

    #[test]
    fn test_markdown_fallback_and_missing_tracking() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), SUMMARY_FILE, r#"{"brand_name": "Acme"}"#);
        write(dir.path(), "b2-cultural-relevance.md", "# B2: Cultural Relevance");

        let bundle = load(dir.path()).unwrap();
        assert!(matches!(
            bundle.documents.get(&ComponentId::B2),
            Some(ComponentSource::Markdown(_))
        ));
        assert_eq!(bundle.missing.len(), 8);
        assert!(!bundle.missing.contains(&ComponentId::B2));
        assert!(bundle.warnings.iter().any(|w| w.starts_with("[a1]")));
    }

    #[test]
    fn test_malformed_component_json_degrades() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), SUMMARY_FILE, r#"{"brand_name": "Acme"}"#);
        write(dir.path(), "a1-output.json", "{not json");

        let bundle = load(dir.path()).unwrap();
        assert!(bundle.missing.contains(&ComponentId::A1));
        assert!(bundle.warnings.iter().any(|w| w.contains("malformed JSON")));
    }
}
