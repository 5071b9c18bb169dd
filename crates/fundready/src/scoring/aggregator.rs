use std::collections::BTreeMap;

use super::domain::{Category, FundingAssessment, ScoreSheet};

/// Normalize one raw subscore before aggregation. Non-finite input counts as
/// zero; everything else is clamped to the 0-10 scale so the total invariant
/// holds without an upstream form gate.
pub fn sanitize_subscore(raw: f64) -> f64 {
    if !raw.is_finite() {
        return 0.0;
    }
    raw.clamp(0.0, 10.0)
}

/// Sum of the category's three sanitized subscores, clamped to its cap.
/// Excess never carries into another category.
pub fn category_score(sheet: &ScoreSheet, category: Category) -> f64 {
    let sum: f64 = category
        .subscores(sheet)
        .into_iter()
        .map(sanitize_subscore)
        .sum();
    sum.min(category.cap())
}

/// Evaluate a sheet into a bounded assessment. Pure and deterministic: the
/// same sheet always yields the same assessment, and the total lies in
/// [0, 100] because the category caps sum to 100.
pub fn evaluate(sheet: &ScoreSheet) -> FundingAssessment {
    let mut category_scores = BTreeMap::new();
    let mut total_score = 0.0;

    for category in Category::ordered() {
        let score = category_score(sheet, category);
        total_score += score;
        category_scores.insert(category, score);
    }

    FundingAssessment {
        total_score,
        category_scores,
    }
}
