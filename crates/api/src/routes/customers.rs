//! Customer Lookup Route

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::AppState;
use cluster_engine::describe;
use storage::StorageError;

/// Response for a customer lookup
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub customer_id: i64,
    pub cluster: u8,
    pub description: Option<&'static str>,
}

/// Find which group a historical customer landed in
pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    Path(customer_id): Path<i64>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let record = state
        .repository
        .get_by_customer(customer_id)
        .map_err(|err| match err {
            StorageError::NotFound => {
                ApiError::NotFound(format!("customer {customer_id} is not in the clustered batch"))
            }
            other => ApiError::Internal(other.to_string()),
        })?;

    Ok(Json(CustomerResponse {
        customer_id: record.customer_id,
        cluster: record.cluster,
        description: describe(record.cluster),
    }))
}
