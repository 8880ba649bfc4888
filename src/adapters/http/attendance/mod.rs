//! HTTP adapter for attendance endpoints.
//!
//! - `POST /api/payroll-periods/:id/mark-attendance` - Bulk-mark a period

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::AttendanceAppState;
pub use routes::{attendance_router, attendance_routes};
