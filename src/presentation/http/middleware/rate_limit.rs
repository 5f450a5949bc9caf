// src/presentation/http/middleware/rate_limit.rs
//! Per-client request throttling for the public pages.
//!
//! Clients are keyed by the forwarded IP headers first, then the peer address,
//! so the server must be started with connect info.
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Sustained requests per second allowed for one client.
pub const REQUESTS_PER_SECOND: u64 = 20;
/// Requests a client may send in a burst before being throttled.
pub const BURST_SIZE: u32 = 60;

pub type PageRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

pub fn page_rate_limit_layer() -> PageRateLimitLayer {
    static RATE_LIMITER: OnceLock<PageRateLimitLayer> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(REQUESTS_PER_SECOND);
            builder.burst_size(BURST_SIZE);
            let config = builder
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .expect("valid rate limit configuration");

            GovernorLayer::new(config)
        })
        .clone()
}
