use serde::Serialize;

use super::bands::ScoreBand;
use super::domain::{Category, FundingAssessment};
use super::guidance::GuidanceTier;

/// One row of the category breakdown, in canonical category order.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryBreakdownEntry {
    pub category: Category,
    pub category_label: &'static str,
    pub score: f64,
    pub cap: f64,
    /// Share of the cap earned, in [0, 1].
    pub fill_pct: f64,
}

/// Narrative block combining both recommendation lookups.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentInsights {
    pub band: ScoreBand,
    pub band_label: &'static str,
    pub color: &'static str,
    pub overview: &'static str,
    pub next_steps: &'static str,
    pub focus_areas: &'static str,
    pub funding_strategy: &'static str,
    /// Category with the lowest share of its cap; ties keep canonical order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_category_label: Option<&'static str>,
}

/// Render-ready view of an assessment: total, breakdown bars, recommendations.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummary {
    pub total_score: f64,
    pub breakdown: Vec<CategoryBreakdownEntry>,
    pub insights: AssessmentInsights,
}

impl FundingAssessment {
    pub fn summary(&self) -> AssessmentSummary {
        let breakdown: Vec<CategoryBreakdownEntry> = Category::ordered()
            .into_iter()
            .map(|category| {
                let score = self.category_score(category);
                let cap = category.cap();
                CategoryBreakdownEntry {
                    category,
                    category_label: category.label(),
                    score,
                    cap,
                    fill_pct: score / cap,
                }
            })
            .collect();

        // reduce keeps the earliest entry on ties, preserving canonical order.
        let focus = breakdown.iter().reduce(|best, entry| {
            if entry.fill_pct.total_cmp(&best.fill_pct).is_lt() {
                entry
            } else {
                best
            }
        });

        let band = ScoreBand::classify(self.total_score);
        let tier = GuidanceTier::for_total(self.total_score);

        AssessmentSummary {
            total_score: self.total_score,
            insights: AssessmentInsights {
                band,
                band_label: band.label(),
                color: band.color(),
                overview: band.overview(),
                next_steps: band.next_steps(),
                focus_areas: tier.focus_areas(),
                funding_strategy: tier.funding_strategy(),
                focus_category: focus.map(|entry| entry.category),
                focus_category_label: focus.map(|entry| entry.category_label),
            },
            breakdown,
        }
    }
}
