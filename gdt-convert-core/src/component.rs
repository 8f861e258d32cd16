//! The closed set of nine scored components

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the nine fixed GDT components, grouped into sections A/B/C.
///
/// The loader never produces an id outside this set; everything downstream
/// keys on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentId {
    A1,
    A2,
    A3,
    B1,
    B2,
    B3,
    C1,
    C2,
    C3,
}

impl ComponentId {
    /// All nine ids in canonical section order
    pub const ALL: [ComponentId; 9] = [
        Self::A1,
        Self::A2,
        Self::A3,
        Self::B1,
        Self::B2,
        Self::B3,
        Self::C1,
        Self::C2,
        Self::C3,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A1 => "a1",
            Self::A2 => "a2",
            Self::A3 => "a3",
            Self::B1 => "b1",
            Self::B2 => "b2",
            Self::B3 => "b3",
            Self::C1 => "c1",
            Self::C2 => "c2",
            Self::C3 => "c3",
        }
    }

    /// Section letter this component rolls up into
    pub fn section(&self) -> &'static str {
        match self {
            Self::A1 | Self::A2 | Self::A3 => "A",
            Self::B1 | Self::B2 | Self::B3 => "B",
            Self::C1 | Self::C2 | Self::C3 => "C",
        }
    }

    /// Display name used when a document supplies none
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::A1 => "Brand Positioning",
            Self::A2 => "Pricing Power",
            Self::A3 => "Business Growth",
            Self::B1 => "Emotional Connection",
            Self::B2 => "Cultural Relevance",
            Self::B3 => "Brand Experience",
            Self::C1 => "Brand Distinctiveness",
            Self::C2 => "Brand Innovation",
            Self::C3 => "Disruption Urgency",
        }
    }

    /// Per-component JSON document filename (primary source)
    pub fn json_filename(&self) -> String {
        format!("{}-output.json", self.as_str())
    }

    /// Legacy markdown document filename (fallback source)
    pub fn markdown_filename(&self) -> &'static str {
        match self {
            Self::A1 => "a1-brand-positioning.md",
            Self::A2 => "a2-pricing-power.md",
            Self::A3 => "a3-business-growth.md",
            Self::B1 => "b1-emotional-connection.md",
            Self::B2 => "b2-cultural-relevance.md",
            Self::B3 => "b3-brand-experience.md",
            Self::C1 => "c1-brand-distinctiveness.md",
            Self::C2 => "c2-brand-innovation.md",
            Self::C3 => "c3-disruption-urgency.md",
        }
    }

    /// Parse a component code such as "a1" or "B2"
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "a1" => Some(Self::A1),
            "a2" => Some(Self::A2),
            "a3" => Some(Self::A3),
            "b1" => Some(Self::B1),
            "b2" => Some(Self::B2),
            "b3" => Some(Self::B3),
            "c1" => Some(Self::C1),
            "c2" => Some(Self::C2),
            "c3" => Some(Self::C3),
            _ => None,
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
