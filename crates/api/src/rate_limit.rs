//! Rate Limiting Middleware
//!
//! Per-IP GCRA rate limiting via tower_governor on the prediction
//! endpoint. Requires the service to be built with
//! `into_make_service_with_connect_info::<SocketAddr>()` so the peer
//! IP is available to the key extractor.

use crate::config::RateLimitSettings;
use governor::middleware::StateInformationMiddleware;
use std::sync::Arc;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;

/// Governor config with X-RateLimit-* response headers enabled
pub type DefaultGovernorConfig =
    tower_governor::governor::GovernorConfig<PeerIpKeyExtractor, StateInformationMiddleware>;

/// Build the governor config from the service settings
pub fn create_governor_config(settings: &RateLimitSettings) -> Arc<DefaultGovernorConfig> {
    Arc::new(
        GovernorConfigBuilder::default()
            .per_second(settings.per_second)
            .burst_size(settings.burst_size)
            .use_headers()
            .finish()
            .expect("rate limit settings must be nonzero"),
    )
}
