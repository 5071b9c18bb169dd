use super::super::domain::ScoreSheet;
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_sheets<R: Read>(reader: R) -> Result<Vec<ScoreSheet>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut sheets = Vec::new();

    for record in csv_reader.deserialize::<SheetRow>() {
        sheets.push(record?.into_sheet());
    }

    Ok(sheets)
}

/// CSV row keyed by the form's display labels. Blank or non-numeric cells
/// read as 0, same as the JSON intake path.
#[derive(Debug, Deserialize)]
struct SheetRow {
    #[serde(rename = "Market Size", default, deserialize_with = "blank_as_zero")]
    market_size: f64,
    #[serde(rename = "Product Uniqueness", default, deserialize_with = "blank_as_zero")]
    product_uniqueness: f64,
    #[serde(rename = "Customer Validation", default, deserialize_with = "blank_as_zero")]
    customer_validation: f64,
    #[serde(rename = "Revenue Stage", default, deserialize_with = "blank_as_zero")]
    revenue_stage: f64,
    #[serde(rename = "Gross Margins", default, deserialize_with = "blank_as_zero")]
    gross_margins: f64,
    #[serde(rename = "Financial Projections", default, deserialize_with = "blank_as_zero")]
    financial_projections: f64,
    #[serde(rename = "Founders Experience", default, deserialize_with = "blank_as_zero")]
    founders_experience: f64,
    #[serde(rename = "Team Composition", default, deserialize_with = "blank_as_zero")]
    team_composition: f64,
    #[serde(rename = "Execution Capability", default, deserialize_with = "blank_as_zero")]
    execution_capability: f64,
    #[serde(rename = "Scalability", default, deserialize_with = "blank_as_zero")]
    scalability: f64,
    #[serde(rename = "Risks", default, deserialize_with = "blank_as_zero")]
    risks: f64,
    #[serde(rename = "Industry Trends", default, deserialize_with = "blank_as_zero")]
    industry_trends: f64,
    #[serde(rename = "Funding Clarity", default, deserialize_with = "blank_as_zero")]
    funding_clarity: f64,
    #[serde(rename = "Previous Investment", default, deserialize_with = "blank_as_zero")]
    previous_investment: f64,
    #[serde(rename = "Investor Fit", default, deserialize_with = "blank_as_zero")]
    investor_fit: f64,
}

impl SheetRow {
    fn into_sheet(self) -> ScoreSheet {
        ScoreSheet {
            market_size: self.market_size,
            product_uniqueness: self.product_uniqueness,
            customer_validation: self.customer_validation,
            revenue_stage: self.revenue_stage,
            gross_margins: self.gross_margins,
            financial_projections: self.financial_projections,
            founders_experience: self.founders_experience,
            team_composition: self.team_composition,
            execution_capability: self.execution_capability,
            scalability: self.scalability,
            risks: self.risks,
            industry_trends: self.industry_trends,
            funding_clarity: self.funding_clarity,
            previous_investment: self.previous_investment,
            investor_fit: self.investor_fit,
        }
    }
}

fn blank_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse().ok())
        .unwrap_or(0.0))
}
