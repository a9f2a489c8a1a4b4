//! Service Configuration
//!
//! Defaults, an optional `segmentation.toml`, and `SEGMENT_*`
//! environment overrides, layered in that order.

use serde::Deserialize;

/// Rate limit settings for the prediction endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitSettings {
    /// Seconds per replenished request
    pub per_second: u64,
    /// Requests allowed in a burst
    pub burst_size: u32,
}

/// Service settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Address the server binds to
    pub bind_addr: String,
    /// Path to the clustering model artifact (JSON)
    pub model_path: String,
    /// Path to the historical marketing dataset (TSV)
    pub dataset_path: String,
    pub rate_limit: RateLimitSettings,
}

/// The default layer every load starts from
fn defaults(
    builder: config::builder::ConfigBuilder<config::builder::DefaultState>,
) -> Result<config::builder::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
    builder
        .set_default("bind_addr", "0.0.0.0:8080")?
        .set_default("model_path", "artifacts/kmeans_model.json")?
        .set_default("dataset_path", "data/marketing_campaign.tsv")?
        .set_default("rate_limit.per_second", 2)?
        .set_default("rate_limit.burst_size", 5)
}

impl Settings {
    /// Load settings from defaults, file, and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        defaults(config::Config::builder())?
            .add_source(config::File::with_name("segmentation").required(false))
            .add_source(
                config::Environment::with_prefix("SEGMENT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}
