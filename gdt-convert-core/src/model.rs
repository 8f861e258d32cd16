//! Output data model consumed by the website front end
//!
//! Field names serialize in camelCase to match the consuming application's
//! type definitions. Empty optional collections are skipped so the emitted
//! record stays minimal.

use serde::{Deserialize, Serialize};

/// Dimension-name → numeric score mapping, in document order
pub type ScoreBreakdown = serde_json::Map<String, serde_json::Value>;

/// Brand identity and theming metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandConfig {
    pub id: String,
    pub name: String,
    pub market: String,
    pub category: String,
    pub date: String,
    pub accent_color: String,
}

/// One component's score rollup inside a section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentScore {
    pub id: String,
    pub name: String,
    pub score: f64,
    pub tier: String,
    pub section: String,
}

/// Section aggregate with its ordered component rollups
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionScore {
    pub id: String,
    pub name: String,
    pub score: f64,
    pub tier: String,
    pub components: Vec<ComponentScore>,
}

/// The six-field finding narrative (What / So What / Now What).
///
/// An empty string is the explicit "absent" value; there is no null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WsnContent {
    pub headline: String,
    pub subline: String,
    pub what: String,
    pub evidence: String,
    pub so_what: String,
    pub now_what: String,
}

/// Enriched per-component data for the deep-dive view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentData {
    pub id: String,
    pub name: String,
    pub section: String,
    pub score: f64,
    pub tier: String,
    pub wsn: WsnContent,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weaknesses: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub competitive_context: String,
    #[serde(default, skip_serializing_if = "ScoreBreakdown::is_empty")]
    pub score_breakdown: ScoreBreakdown,
}

/// Growth profile classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthProfile {
    pub id: String,
    pub name: String,
    pub sequence: String,
    pub definition: String,
    pub implications: String,
}

/// One constraint feeding the growth barrier narrative
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthBarrierItem {
    pub constraint: String,
    pub component: String,
    pub score: f64,
    pub evidence: String,
}

/// Growth barrier strategic block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthBarrier {
    pub headline: String,
    pub description: String,
    pub items: Vec<GrowthBarrierItem>,
}

/// Growth solution strategic block; at most three flattened actions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthSolution {
    pub headline: String,
    pub description: String,
    pub actions: Vec<String>,
}

/// One deliverable inside a growth-system phase
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthSystemOutput {
    pub name: String,
    pub score: f64,
    pub purpose: String,
    pub components_addressed: Vec<String>,
    pub deliverables: Vec<String>,
}

/// One phase of the recommended growth system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthPhase {
    pub phase: String,
    pub description: String,
    pub outputs: Vec<GrowthSystemOutput>,
}

/// Growth system strategic block
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthSystem {
    pub headline: String,
    pub description: String,
    pub phases: Vec<GrowthPhase>,
    pub critical_path: String,
    pub implementation_notes: String,
}

/// The final assembled record handed to the front end
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GdtAnalysis {
    pub brand: BrandConfig,
    pub total_score: f64,
    pub growth_profile: GrowthProfile,
    pub sections: Vec<SectionScore>,
    pub components: Vec<ComponentData>,
    pub growth_barrier: GrowthBarrier,
    pub growth_solution: GrowthSolution,
    pub growth_system: GrowthSystem,
}
