//! HTTP adapter for performance log endpoints.
//!
//! Exposes the progress propagation chain via REST API:
//! - `POST /api/performance-logs/:id/submit` - Submit a draft log
//! - `POST /api/performance-logs/:id/cancel` - Cancel a submitted log

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::PerformanceAppState;
pub use routes::{performance_router, performance_routes};
