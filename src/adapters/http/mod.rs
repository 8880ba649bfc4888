//! HTTP adapters - REST API implementations.
//!
//! Each feature area has its own HTTP adapter for endpoint exposure.

pub mod attendance;
pub mod performance;

pub use attendance::{attendance_router, AttendanceAppState};
pub use performance::{performance_router, PerformanceAppState};

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, AllowOrigin, CorsLayer};
use tracing::warn;

/// Builds the CORS layer from the configured origin list.
///
/// An empty list allows any origin, which suits local development.
/// Malformed origins are skipped with a warning rather than failing
/// startup.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let parsed = origins.iter().filter_map(|origin| {
        match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "skipping malformed cors origin");
                None
            }
        }
    });
    layer.allow_origin(AllowOrigin::list(parsed))
}
