//! HTTP DTOs for attendance endpoints.

use serde::Serialize;

/// Response for a completed attendance-marking run.
#[derive(Debug, Clone, Serialize)]
pub struct MarkAttendanceResponse {
    /// Records inserted by this run.
    pub records_created: u32,
    /// Pairs skipped because a record already existed.
    pub records_skipped: u32,
    /// Human-readable run summary.
    pub summary: String,
}

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Records already created before a partial failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records_created: Option<u32>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            records_created: None,
        }
    }

    /// Create an error response reporting partial progress.
    pub fn with_partial_progress(
        error_code: impl Into<String>,
        message: impl Into<String>,
        records_created: u32,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            records_created: Some(records_created),
        }
    }
}
