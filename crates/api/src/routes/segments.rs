//! Characteristic Search Route

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiError;
use crate::AppState;
use cluster_engine::Characteristic;

/// Query parameters for the characteristic search
#[derive(Debug, Deserialize)]
pub struct SegmentQuery {
    /// One of: has-kids, responds-to-campaigns, prefers-discounts,
    /// inactive, drinks
    pub characteristic: Characteristic,
}

/// Response for the characteristic search
#[derive(Debug, Serialize)]
pub struct SegmentResponse {
    pub characteristic: Characteristic,
    /// Matching 1-based group numbers
    pub clusters: &'static [u8],
    /// IDs of historical customers in those groups, ascending
    pub customer_ids: Vec<i64>,
    pub count: usize,
}

/// List the customers whose group matches a characteristic
pub async fn search_segments(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SegmentQuery>,
) -> Result<Json<SegmentResponse>, ApiError> {
    let clusters = params.characteristic.clusters();
    let customer_ids = state
        .repository
        .customers_in_clusters(clusters)
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    Ok(Json(SegmentResponse {
        characteristic: params.characteristic,
        clusters,
        count: customer_ids.len(),
        customer_ids,
    }))
}
