//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Rate limiter layer keyed by `K`.
pub type RateLimitLayer<K> = GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Quota for a group of routes.
#[derive(Debug, Clone, Copy)]
pub struct Quota {
    pub per_second: u64,
    pub burst_size: u32,
}

/// Public read endpoints: 2 requests per second, bursts of 100.
pub const PUBLIC: Quota = Quota {
    per_second: 2,
    burst_size: 100,
};

/// Mutating endpoints: 1 request per second, bursts of 10.
pub const SECURE: Quota = Quota {
    per_second: 1,
    burst_size: 10,
};

fn build<K>(key_extractor: K, quota: Quota) -> RateLimitLayer<K>
where
    K: KeyExtractor,
{
    let governor_conf = GovernorConfigBuilder::default()
        .key_extractor(key_extractor)
        .per_second(quota.per_second)
        .burst_size(quota.burst_size)
        .finish()
        .expect("rate limit quota must be non-zero");

    GovernorLayer::new(Arc::new(governor_conf))
}

/// Creates a rate limiter keyed by the socket peer address.
///
/// Requests exceeding the quota receive `429 Too Many Requests`.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/status", get(list_status_handler))
///     .layer(rate_limit::direct_layer(rate_limit::PUBLIC));
/// ```
pub fn direct_layer(quota: Quota) -> RateLimitLayer<PeerIpKeyExtractor> {
    build(PeerIpKeyExtractor, quota)
}

/// Creates a rate limiter keyed by the client IP reported by a reverse proxy.
///
/// Reads `X-Forwarded-For`, `X-Real-IP` and `Forwarded` before falling back to
/// the peer address. Use only behind a trusted proxy, since clients can set
/// these headers themselves.
pub fn proxied_layer(quota: Quota) -> RateLimitLayer<SmartIpKeyExtractor> {
    build(SmartIpKeyExtractor, quota)
}
