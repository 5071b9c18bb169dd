use crate::scoring::domain::ScoreSheet;

pub(super) fn uniform_sheet(value: f64) -> ScoreSheet {
    ScoreSheet {
        market_size: value,
        product_uniqueness: value,
        customer_validation: value,
        revenue_stage: value,
        gross_margins: value,
        financial_projections: value,
        founders_experience: value,
        team_composition: value,
        execution_capability: value,
        scalability: value,
        risks: value,
        industry_trends: value,
        funding_clarity: value,
        previous_investment: value,
        investor_fit: value,
    }
}

pub(super) fn market_only_sheet(
    market_size: f64,
    product_uniqueness: f64,
    customer_validation: f64,
) -> ScoreSheet {
    ScoreSheet {
        market_size,
        product_uniqueness,
        customer_validation,
        ..ScoreSheet::default()
    }
}

pub(super) fn financial_only_sheet(
    revenue_stage: f64,
    gross_margins: f64,
    financial_projections: f64,
) -> ScoreSheet {
    ScoreSheet {
        revenue_stage,
        gross_margins,
        financial_projections,
        ..ScoreSheet::default()
    }
}

/// Sheet engineered to total exactly 72: market 24, financial 16, team 12,
/// scalability 10, funding 10. Team & Execution has the lowest fill (0.6).
pub(super) fn growth_stage_sheet() -> ScoreSheet {
    ScoreSheet {
        market_size: 8.0,
        product_uniqueness: 8.0,
        customer_validation: 8.0,
        revenue_stage: 6.0,
        gross_margins: 6.0,
        financial_projections: 4.0,
        founders_experience: 4.0,
        team_composition: 4.0,
        execution_capability: 4.0,
        scalability: 4.0,
        risks: 3.0,
        industry_trends: 3.0,
        funding_clarity: 4.0,
        previous_investment: 3.0,
        investor_fit: 3.0,
    }
}
