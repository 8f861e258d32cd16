//! Serde model of the top-level summary document (`gdt-summary-output.json`)
//!
//! Every field is defaulted; only the file's absence is fatal. Shapes follow
//! the upstream diagnosis pipeline's output schema.

use serde::Deserialize;

fn default_brand_name() -> String {
    "Unknown Brand".to_string()
}

fn default_market() -> String {
    "USA".to_string()
}

fn default_category() -> String {
    "Unknown".to_string()
}

/// Top-level summary record for one brand's analysis run
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryDoc {
    #[serde(default = "default_brand_name")]
    pub brand_name: String,
    #[serde(default = "default_market")]
    pub market: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub analysis_date: Option<String>,
    #[serde(default)]
    pub total_score: f64,
    #[serde(default)]
    pub growth_profile: ProfileBlock,
    #[serde(default)]
    pub section_a: SectionBlock,
    #[serde(default)]
    pub section_b: SectionBlock,
    #[serde(default)]
    pub section_c: SectionBlock,
    #[serde(default)]
    pub growth_barrier: BarrierBlock,
    #[serde(default)]
    pub growth_solution: SolutionBlock,
    #[serde(default)]
    pub growth_system: SystemBlock,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileBlock {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub implications: String,
}

/// Section rollup: name, aggregate rating, and ordered component summaries
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionBlock {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub total_rating: f64,
    #[serde(default)]
    pub descriptor: String,
    #[serde(default)]
    pub components: Vec<RollupComponent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RollupComponent {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub descriptor: String,
}

/// Growth barrier block with up to three numbered constraints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BarrierBlock {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub problem_statement: String,
    #[serde(default)]
    pub constraint_1: Option<ConstraintBlock>,
    #[serde(default)]
    pub constraint_2: Option<ConstraintBlock>,
    #[serde(default)]
    pub constraint_3: Option<ConstraintBlock>,
}

impl BarrierBlock {
    pub fn constraints(&self) -> impl Iterator<Item = &ConstraintBlock> {
        [&self.constraint_1, &self.constraint_2, &self.constraint_3]
            .into_iter()
            .filter_map(|c| c.as_ref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConstraintBlock {
    #[serde(default)]
    pub constraint: String,
    #[serde(default)]
    pub component_code: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub evidence: String,
}

/// Growth solution block with up to four numbered unlocks
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SolutionBlock {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub solution_statement: String,
    #[serde(default)]
    pub unlock_1: Option<UnlockBlock>,
    #[serde(default)]
    pub unlock_2: Option<UnlockBlock>,
    #[serde(default)]
    pub unlock_3: Option<UnlockBlock>,
    #[serde(default)]
    pub unlock_4: Option<UnlockBlock>,
}

impl SolutionBlock {
    pub fn unlocks(&self) -> impl Iterator<Item = &UnlockBlock> {
        [&self.unlock_1, &self.unlock_2, &self.unlock_3, &self.unlock_4]
            .into_iter()
            .filter_map(|u| u.as_ref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnlockBlock {
    #[serde(default)]
    pub unlock_name: String,
    #[serde(default)]
    pub description: String,
}

/// Growth system block: phased product plan plus the critical path
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemBlock {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub system_description: String,
    #[serde(default)]
    pub products: Vec<ProductBlock>,
    #[serde(default)]
    pub critical_path: CriticalPath,
    #[serde(default)]
    pub implementation_considerations: String,
}

/// Upstream emits the critical path either as a step list or pre-joined text
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CriticalPath {
    Steps(Vec<String>),
    Joined(String),
}

impl Default for CriticalPath {
    fn default() -> Self {
        Self::Steps(Vec::new())
    }
}

impl CriticalPath {
    pub fn steps(&self) -> Vec<String> {
        match self {
            Self::Steps(steps) => steps.clone(),
            Self::Joined(text) if text.is_empty() => Vec::new(),
            Self::Joined(text) => vec![text.clone()],
        }
    }

    /// Arrow-joined rendering used in the growth system block
    pub fn joined(&self) -> String {
        match self {
            Self::Steps(steps) => steps.join(" → "),
            Self::Joined(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductBlock {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub strategic_focus: String,
    #[serde(default)]
    pub outputs: Vec<OutputBlock>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputBlock {
    #[serde(default)]
    pub output_name: String,
    #[serde(default)]
    pub relevance_score: f64,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub critical_components: Vec<String>,
    #[serde(default)]
    pub key_deliverables: Vec<String>,
}
