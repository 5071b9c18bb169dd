use serde::{Deserialize, Serialize};

/// Discrete readiness tier assigned to a total score. Variants are ordered
/// from weakest to strongest so band comparisons read naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    NotReady,
    Early,
    Seed,
    Growth,
    Expansion,
}

impl ScoreBand {
    /// Descending threshold scan: the first lower bound the total meets or
    /// exceeds wins. Totals above 100 still land in `Expansion`.
    pub fn classify(total: f64) -> Self {
        if total >= 86.0 {
            ScoreBand::Expansion
        } else if total >= 71.0 {
            ScoreBand::Growth
        } else if total >= 51.0 {
            ScoreBand::Seed
        } else if total >= 31.0 {
            ScoreBand::Early
        } else {
            ScoreBand::NotReady
        }
    }

    pub const fn ordered() -> [ScoreBand; 5] {
        [
            ScoreBand::NotReady,
            ScoreBand::Early,
            ScoreBand::Seed,
            ScoreBand::Growth,
            ScoreBand::Expansion,
        ]
    }

    /// Inclusive lower bound of the band.
    pub const fn lower_bound(self) -> f64 {
        match self {
            ScoreBand::NotReady => 0.0,
            ScoreBand::Early => 31.0,
            ScoreBand::Seed => 51.0,
            ScoreBand::Growth => 71.0,
            ScoreBand::Expansion => 86.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScoreBand::NotReady => "Not Ready",
            ScoreBand::Early => "Early",
            ScoreBand::Seed => "Seed",
            ScoreBand::Growth => "Growth",
            ScoreBand::Expansion => "Expansion",
        }
    }

    /// Color token used by badge and gauge rendering.
    pub const fn color(self) -> &'static str {
        match self {
            ScoreBand::NotReady => "red",
            ScoreBand::Early => "orange",
            ScoreBand::Seed => "yellow",
            ScoreBand::Growth => "green",
            ScoreBand::Expansion => "blue",
        }
    }

    pub const fn overview(self) -> &'static str {
        match self {
            ScoreBand::NotReady => "Need to strengthen fundamentals before seeking funding.",
            ScoreBand::Early => {
                "Early stage. Focus on product development and initial market testing."
            }
            ScoreBand::Seed => "Ready for seed funding. Focus on market validation and MVP refinement.",
            ScoreBand::Growth => {
                "Strong growth potential. Consider Series A funding and team expansion."
            }
            ScoreBand::Expansion => {
                "Ready for expansion funding. Focus on scaling operations and market expansion."
            }
        }
    }

    pub const fn next_steps(self) -> &'static str {
        match self {
            ScoreBand::NotReady => {
                "Build core fundamentals and strengthen your value proposition."
            }
            ScoreBand::Early => "Focus on product development and initial traction.",
            ScoreBand::Seed => "Validate market fit and refine your MVP.",
            ScoreBand::Growth => "Prepare for Series A funding and strengthen growth metrics.",
            ScoreBand::Expansion => "Focus on scaling operations and expanding market presence.",
        }
    }
}
