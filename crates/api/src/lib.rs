//! Customer Segmentation API Server
//!
//! Loads the clustering model artifact and the historical dataset
//! once at startup, clusters the batch, and serves predictions and
//! lookups against those read-only artifacts.

use axum::routing::{get, post};
use axum::{extract::State, Json, Router};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod config;
mod error;
pub mod rate_limit;
mod routes;

pub use config::{RateLimitSettings, Settings};
pub use error::ApiError;

use cluster_engine::{ModelArtifact, SegmentPipeline, CLUSTER_COUNT};
use storage::{AssignmentRecord, Repository};
use tower_governor::GovernorLayer;

/// Application state shared across handlers.
///
/// The pipeline (model, reference date, weights) is immutable after
/// startup; the repository holds the startup batch's assignments.
pub struct AppState {
    pub pipeline: SegmentPipeline,
    pub repository: Repository,
    pub version: String,
    pub start_time: std::time::Instant,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    /// Training-time reference date the pipeline scores against
    pub reference_date: String,
    pub clusters: usize,
    pub customers_assigned: usize,
}

/// Create the application router
pub fn create_router(
    state: Arc<AppState>,
    governor: Arc<rate_limit::DefaultGovernorConfig>,
) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route(
            "/api/v1/predict",
            post(routes::predict::predict).layer(GovernorLayer { config: governor }),
        )
        .route("/api/v1/clusters/:group", get(routes::clusters::get_cluster))
        .route(
            "/api/v1/customers/:customer_id",
            get(routes::customers::get_customer),
        )
        .route("/api/v1/segments", get(routes::segments::search_segments))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        reference_date: state.pipeline.reference_date().to_string(),
        clusters: CLUSTER_COUNT,
        customers_assigned: state.repository.assignment_count(),
    })
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("failed to set tracing subscriber");
}

/// Load the artifacts, cluster the historical batch, and serve.
pub async fn run_server(settings: Settings) -> anyhow::Result<()> {
    let artifact = ModelArtifact::from_file(&settings.model_path)?;
    let pipeline = SegmentPipeline::from_artifact(&artifact)?;

    let records = record_validator::load_tsv(&settings.dataset_path)?;
    let assignments = pipeline.assign_batch(&records)?;
    let stored: Vec<AssignmentRecord> = assignments
        .iter()
        .map(|a| AssignmentRecord {
            customer_id: a.customer_id,
            cluster: a.cluster,
        })
        .collect();
    let repository = Repository::new();
    repository.store_batch(&stored)?;
    info!(customers = stored.len(), "historical batch clustered");

    let state = Arc::new(AppState {
        pipeline,
        repository,
        version: env!("CARGO_PKG_VERSION").to_string(),
        start_time: std::time::Instant::now(),
    });

    let governor = rate_limit::create_governor_config(&settings.rate_limit);
    let app = create_router(state, governor);

    info!("starting API server on {}", settings.bind_addr);
    let listener = tokio::net::TcpListener::bind(&settings.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
