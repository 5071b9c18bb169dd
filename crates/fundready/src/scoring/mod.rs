//! Funding readiness scoring: subscore aggregation, band classification, and
//! report assembly for startup diligence sheets.

pub mod aggregator;
pub mod bands;
pub mod domain;
pub mod guidance;
pub mod import;
pub mod report;

#[cfg(test)]
mod tests;

pub use aggregator::{category_score, evaluate, sanitize_subscore};
pub use bands::ScoreBand;
pub use domain::{Category, FundingAssessment, ScoreSheet};
pub use guidance::GuidanceTier;
pub use import::{ScoreSheetImportError, ScoreSheetImporter};
pub use report::{AssessmentInsights, AssessmentSummary, CategoryBreakdownEntry};
