use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// One diligence sheet: fifteen subscores, each nominally on the 0-10 scale.
///
/// Deserialization is deliberately forgiving: a missing field, `null`, an empty
/// string, or a non-numeric value all read as 0. Numeric strings are accepted
/// so sheets exported from form tooling round-trip without cleanup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreSheet {
    #[serde(deserialize_with = "lenient_subscore")]
    pub market_size: f64,
    #[serde(deserialize_with = "lenient_subscore")]
    pub product_uniqueness: f64,
    #[serde(deserialize_with = "lenient_subscore")]
    pub customer_validation: f64,
    #[serde(deserialize_with = "lenient_subscore")]
    pub revenue_stage: f64,
    #[serde(deserialize_with = "lenient_subscore")]
    pub gross_margins: f64,
    #[serde(deserialize_with = "lenient_subscore")]
    pub financial_projections: f64,
    #[serde(deserialize_with = "lenient_subscore")]
    pub founders_experience: f64,
    #[serde(deserialize_with = "lenient_subscore")]
    pub team_composition: f64,
    #[serde(deserialize_with = "lenient_subscore")]
    pub execution_capability: f64,
    #[serde(deserialize_with = "lenient_subscore")]
    pub scalability: f64,
    #[serde(deserialize_with = "lenient_subscore")]
    pub risks: f64,
    #[serde(deserialize_with = "lenient_subscore")]
    pub industry_trends: f64,
    #[serde(deserialize_with = "lenient_subscore")]
    pub funding_clarity: f64,
    #[serde(deserialize_with = "lenient_subscore")]
    pub previous_investment: f64,
    #[serde(deserialize_with = "lenient_subscore")]
    pub investor_fit: f64,
}

fn lenient_subscore<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    let raw = Option::<Raw>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Raw::Number(value)) => value,
        Some(Raw::Text(value)) => value.trim().parse().unwrap_or(0.0),
        Some(Raw::Other(_)) | None => 0.0,
    })
}

/// The five fixed scoring categories. Each groups exactly three subscores and
/// caps their combined contribution; the caps sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    MarketProductFit,
    FinancialHealth,
    TeamExecution,
    ScalabilityRisk,
    FundingReadiness,
}

impl Category {
    pub const fn ordered() -> [Category; 5] {
        [
            Category::MarketProductFit,
            Category::FinancialHealth,
            Category::TeamExecution,
            Category::ScalabilityRisk,
            Category::FundingReadiness,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::MarketProductFit => "Market & Product Fit",
            Category::FinancialHealth => "Financial Health",
            Category::TeamExecution => "Team & Execution",
            Category::ScalabilityRisk => "Scalability & Risk",
            Category::FundingReadiness => "Funding Readiness",
        }
    }

    /// Maximum points the category can contribute to the total.
    pub const fn cap(self) -> f64 {
        match self {
            Category::MarketProductFit => 30.0,
            Category::FinancialHealth => 20.0,
            Category::TeamExecution => 20.0,
            Category::ScalabilityRisk => 15.0,
            Category::FundingReadiness => 15.0,
        }
    }

    /// Display labels of the three subscores, in sheet order.
    pub const fn subscore_labels(self) -> [&'static str; 3] {
        match self {
            Category::MarketProductFit => {
                ["Market Size", "Product Uniqueness", "Customer Validation"]
            }
            Category::FinancialHealth => {
                ["Revenue Stage", "Gross Margins", "Financial Projections"]
            }
            Category::TeamExecution => [
                "Founders Experience",
                "Team Composition",
                "Execution Capability",
            ],
            Category::ScalabilityRisk => ["Scalability", "Risks", "Industry Trends"],
            Category::FundingReadiness => {
                ["Funding Clarity", "Previous Investment", "Investor Fit"]
            }
        }
    }

    /// Project the category's three raw subscores out of a sheet.
    pub fn subscores(self, sheet: &ScoreSheet) -> [f64; 3] {
        match self {
            Category::MarketProductFit => [
                sheet.market_size,
                sheet.product_uniqueness,
                sheet.customer_validation,
            ],
            Category::FinancialHealth => [
                sheet.revenue_stage,
                sheet.gross_margins,
                sheet.financial_projections,
            ],
            Category::TeamExecution => [
                sheet.founders_experience,
                sheet.team_composition,
                sheet.execution_capability,
            ],
            Category::ScalabilityRisk => [sheet.scalability, sheet.risks, sheet.industry_trends],
            Category::FundingReadiness => [
                sheet.funding_clarity,
                sheet.previous_investment,
                sheet.investor_fit,
            ],
        }
    }
}

/// Result of evaluating one sheet: the bounded total plus the clamped score of
/// each category. Recomputed per evaluation, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundingAssessment {
    pub total_score: f64,
    pub category_scores: BTreeMap<Category, f64>,
}

impl FundingAssessment {
    pub fn category_score(&self, category: Category) -> f64 {
        self.category_scores.get(&category).copied().unwrap_or(0.0)
    }
}
