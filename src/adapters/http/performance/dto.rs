//! HTTP DTOs for performance log endpoints.
//!
//! These types define the JSON response structure for the performance log
//! API. They serve as the boundary between HTTP and the application layer.

use serde::Serialize;

use crate::domain::performance_log::{PerformanceLog, PerformanceLogStatus};

/// Response for a processed performance log.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceLogResponse {
    /// Performance log ID.
    pub id: String,
    /// Linked activity ID.
    pub activity_id: Option<String>,
    /// Calendar day the work was performed (ISO 8601 date).
    pub log_date: String,
    /// Quantity recorded by this log.
    pub qty_completed: f64,
    /// Activity progress mirrored onto the log.
    pub performance_to_date: Option<f64>,
    /// Lifecycle status.
    pub status: PerformanceLogStatus,
    /// When the log was last updated (ISO 8601).
    pub updated_at: String,
}

impl From<PerformanceLog> for PerformanceLogResponse {
    fn from(log: PerformanceLog) -> Self {
        Self {
            id: log.id.to_string(),
            activity_id: log.activity_id.map(|id| id.to_string()),
            log_date: log.log_date.to_string(),
            qty_completed: log.qty_completed,
            performance_to_date: log.performance_to_date.map(|p| p.value()),
            status: log.status,
            updated_at: log.updated_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}
