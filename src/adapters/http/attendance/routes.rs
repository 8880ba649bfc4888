//! Axum router configuration for attendance endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{mark_attendance, AttendanceAppState};

/// Create the attendance API router.
///
/// # Routes
///
/// - `POST /:id/mark-attendance` - Mark every active employee present for
///   every day of the payroll period
pub fn attendance_routes() -> Router<AttendanceAppState> {
    Router::new().route("/:id/mark-attendance", post(mark_attendance))
}

/// Create a complete router with state applied.
pub fn attendance_router(state: AttendanceAppState) -> Router {
    attendance_routes().with_state(state)
}
