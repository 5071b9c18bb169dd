use fundready::scoring::ScoreSheet;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Mid-pack startup used by the demo command: strong market story, thin
/// financials, no prior investment.
pub(crate) fn sample_sheet() -> ScoreSheet {
    ScoreSheet {
        market_size: 8.0,
        product_uniqueness: 7.0,
        customer_validation: 6.0,
        revenue_stage: 4.0,
        gross_margins: 5.0,
        financial_projections: 4.0,
        founders_experience: 7.0,
        team_composition: 6.0,
        execution_capability: 6.0,
        scalability: 7.0,
        risks: 5.0,
        industry_trends: 6.0,
        funding_clarity: 5.0,
        previous_investment: 0.0,
        investor_fit: 6.0,
    }
}
