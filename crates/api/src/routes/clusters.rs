//! Cluster Description Route

use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use crate::error::ApiError;
use cluster_engine::describe;

/// Response for a group description lookup
#[derive(Debug, Serialize)]
pub struct ClusterResponse {
    pub cluster: u8,
    pub description: &'static str,
}

/// Describe one of the eight groups (1-based)
pub async fn get_cluster(Path(group): Path<u8>) -> Result<Json<ClusterResponse>, ApiError> {
    let description = describe(group)
        .ok_or_else(|| ApiError::NotFound(format!("group {group} is outside 1..=8")))?;
    Ok(Json(ClusterResponse {
        cluster: group,
        description,
    }))
}
