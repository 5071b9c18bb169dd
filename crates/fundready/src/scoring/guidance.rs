use serde::{Deserialize, Serialize};

/// Coarser three-tier lookup behind the "focus areas" and "funding strategy"
/// recommendation copy.
///
/// The cut points (50 and 70) are intentionally independent of the
/// `ScoreBand` boundaries (31/51/71/86): the published copy has always used
/// its own tiers, so both threshold sets are kept as-is rather than unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuidanceTier {
    Foundation,
    Momentum,
    Expansion,
}

impl GuidanceTier {
    pub fn for_total(total: f64) -> Self {
        if total < 50.0 {
            GuidanceTier::Foundation
        } else if total < 70.0 {
            GuidanceTier::Momentum
        } else {
            GuidanceTier::Expansion
        }
    }

    pub const fn focus_areas(self) -> &'static str {
        match self {
            GuidanceTier::Foundation => "Build fundamental strengths and market validation.",
            GuidanceTier::Momentum => "Scale operations and strengthen team.",
            GuidanceTier::Expansion => "Expand market presence and optimize growth metrics.",
        }
    }

    pub const fn funding_strategy(self) -> &'static str {
        match self {
            GuidanceTier::Foundation => "Focus on angel investors and early-stage grants.",
            GuidanceTier::Momentum => "Target seed funding and strategic investors.",
            GuidanceTier::Expansion => "Prepare for Series A and institutional investors.",
        }
    }
}
