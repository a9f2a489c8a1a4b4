//! Single-Customer Prediction Route

use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::error::ApiError;
use crate::AppState;
use cluster_engine::Assignment;
use record_validator::RawRecord;

/// Score one customer record against the fitted model.
///
/// Validation failures (unknown category, bad date, contradictory
/// purchase counts, income outlier) come back as 422 with the
/// specific reason; the record is never silently dropped.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(record): Json<RawRecord>,
) -> Result<Json<Assignment>, ApiError> {
    let assignment = state.pipeline.assign_one(&record)?;
    Ok(Json(assignment))
}
