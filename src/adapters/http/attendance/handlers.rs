//! HTTP handlers for attendance endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::attendance::{
    MarkPayrollPeriodCommand, MarkPayrollPeriodHandler,
};
use crate::domain::attendance::AttendanceError;
use crate::domain::foundation::PayrollPeriodId;
use crate::ports::{AttendanceRepository, EmployeeDirectory, PayrollCalendar};

use super::dto::{ErrorResponse, MarkAttendanceResponse};

/// Shared application state for attendance endpoints.
#[derive(Clone)]
pub struct AttendanceAppState {
    pub payroll_calendar: Arc<dyn PayrollCalendar>,
    pub employee_directory: Arc<dyn EmployeeDirectory>,
    pub attendance_repository: Arc<dyn AttendanceRepository>,
}

impl AttendanceAppState {
    pub fn mark_handler(&self) -> MarkPayrollPeriodHandler {
        MarkPayrollPeriodHandler::new(
            self.payroll_calendar.clone(),
            self.employee_directory.clone(),
            self.attendance_repository.clone(),
        )
    }
}

/// POST /api/payroll-periods/:id/mark-attendance - Bulk-mark a period
pub async fn mark_attendance(
    State(state): State<AttendanceAppState>,
    Path(id): Path<PayrollPeriodId>,
) -> Result<impl IntoResponse, AttendanceApiError> {
    let handler = state.mark_handler();
    let result = handler
        .handle(MarkPayrollPeriodCommand { period_id: id })
        .await?;

    Ok(Json(MarkAttendanceResponse {
        records_created: result.records_created,
        records_skipped: result.records_skipped,
        summary: result.summary,
    }))
}

/// Wrapper mapping attendance errors to HTTP responses.
pub struct AttendanceApiError(AttendanceError);

impl From<AttendanceError> for AttendanceApiError {
    fn from(err: AttendanceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AttendanceApiError {
    fn into_response(self) -> axum::response::Response {
        let message = self.0.to_string();
        let (status, body) = match &self.0 {
            AttendanceError::PeriodNotFound(_) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("PAYROLL_PERIOD_NOT_FOUND", message),
            ),
            AttendanceError::Infrastructure {
                records_created, ..
            } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::with_partial_progress("INTERNAL_ERROR", message, *records_created),
            ),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode};

    #[test]
    fn period_not_found_maps_to_404() {
        let err = AttendanceApiError(AttendanceError::period_not_found(PayrollPeriodId::new()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let err = AttendanceApiError(AttendanceError::infrastructure(
            DomainError::new(ErrorCode::DatabaseError, "connection reset"),
            7,
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
