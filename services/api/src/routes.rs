use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Local};
use fundready::error::AppError;
use fundready::scoring::{evaluate, AssessmentSummary, ScoreBand, ScoreSheet, ScoreSheetImporter};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;

#[derive(Debug, Serialize)]
pub(crate) struct EvaluateResponse {
    pub(crate) evaluated_at: DateTime<Local>,
    #[serde(flatten)]
    pub(crate) report: AssessmentSummary,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BatchRequest {
    pub(crate) sheets_csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchRowResult {
    pub(crate) row: usize,
    pub(crate) total_score: f64,
    pub(crate) band: ScoreBand,
    pub(crate) band_label: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchResponse {
    pub(crate) evaluated_at: DateTime<Local>,
    pub(crate) rows: Vec<BatchRowResult>,
}

pub(crate) fn scoring_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/score/evaluate", post(evaluate_endpoint))
        .route("/api/v1/score/batch", post(batch_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn evaluate_endpoint(
    Json(sheet): Json<ScoreSheet>,
) -> Result<Json<EvaluateResponse>, AppError> {
    let report = evaluate(&sheet).summary();

    Ok(Json(EvaluateResponse {
        evaluated_at: Local::now(),
        report,
    }))
}

pub(crate) async fn batch_endpoint(
    Json(payload): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, AppError> {
    let reader = Cursor::new(payload.sheets_csv.into_bytes());
    let sheets = ScoreSheetImporter::from_reader(reader)?;

    let rows = sheets
        .iter()
        .enumerate()
        .map(|(index, sheet)| {
            let total_score = evaluate(sheet).total_score;
            let band = ScoreBand::classify(total_score);
            BatchRowResult {
                row: index + 1,
                total_score,
                band,
                band_label: band.label(),
            }
        })
        .collect();

    Ok(Json(BatchResponse {
        evaluated_at: Local::now(),
        rows,
    }))
}
