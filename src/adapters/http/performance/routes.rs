//! Axum router configuration for performance log endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{cancel_performance_log, submit_performance_log, PerformanceAppState};

/// Create the performance log API router.
///
/// # Routes
///
/// - `POST /:id/submit` - Submit a draft log, propagating its quantity up
///   the activity, task, and project aggregates
/// - `POST /:id/cancel` - Cancel a submitted log, backing its quantity out
pub fn performance_routes() -> Router<PerformanceAppState> {
    Router::new()
        .route("/:id/submit", post(submit_performance_log))
        .route("/:id/cancel", post(cancel_performance_log))
}

/// Create a complete router with state applied.
pub fn performance_router(state: PerformanceAppState) -> Router {
    performance_routes().with_state(state)
}
