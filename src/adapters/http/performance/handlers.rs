//! HTTP handlers for performance log endpoints.
//!
//! These handlers connect Axum routes to application layer command handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::performance_log::{
    CancelPerformanceLogCommand, CancelPerformanceLogHandler, SubmitPerformanceLogCommand,
    SubmitPerformanceLogHandler,
};
use crate::domain::foundation::PerformanceLogId;
use crate::domain::performance_log::PerformanceLogError;
use crate::ports::{
    ActivityRepository, PerformanceLogRepository, ProjectRepository, TaskRepository,
};

use super::dto::{ErrorResponse, PerformanceLogResponse};

/// Shared application state for performance log endpoints.
///
/// Cloned per request; all dependencies are Arc-wrapped.
#[derive(Clone)]
pub struct PerformanceAppState {
    pub performance_log_repository: Arc<dyn PerformanceLogRepository>,
    pub activity_repository: Arc<dyn ActivityRepository>,
    pub task_repository: Arc<dyn TaskRepository>,
    pub project_repository: Arc<dyn ProjectRepository>,
}

impl PerformanceAppState {
    pub fn submit_handler(&self) -> SubmitPerformanceLogHandler {
        SubmitPerformanceLogHandler::new(
            self.performance_log_repository.clone(),
            self.activity_repository.clone(),
            self.task_repository.clone(),
            self.project_repository.clone(),
        )
    }

    pub fn cancel_handler(&self) -> CancelPerformanceLogHandler {
        CancelPerformanceLogHandler::new(
            self.performance_log_repository.clone(),
            self.activity_repository.clone(),
            self.task_repository.clone(),
            self.project_repository.clone(),
        )
    }
}

/// POST /api/performance-logs/:id/submit - Submit a draft log
pub async fn submit_performance_log(
    State(state): State<PerformanceAppState>,
    Path(id): Path<PerformanceLogId>,
) -> Result<impl IntoResponse, PerformanceApiError> {
    let handler = state.submit_handler();
    let result = handler
        .handle(SubmitPerformanceLogCommand { log_id: id })
        .await?;

    Ok(Json(PerformanceLogResponse::from(result.log)))
}

/// POST /api/performance-logs/:id/cancel - Cancel a submitted log
pub async fn cancel_performance_log(
    State(state): State<PerformanceAppState>,
    Path(id): Path<PerformanceLogId>,
) -> Result<impl IntoResponse, PerformanceApiError> {
    let handler = state.cancel_handler();
    let result = handler
        .handle(CancelPerformanceLogCommand { log_id: id })
        .await?;

    Ok(Json(PerformanceLogResponse::from(result.log)))
}

/// Wrapper mapping domain errors to HTTP responses.
pub struct PerformanceApiError(PerformanceLogError);

impl From<PerformanceLogError> for PerformanceApiError {
    fn from(err: PerformanceLogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PerformanceApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = match &self.0 {
            PerformanceLogError::NotFound(_) => {
                (StatusCode::NOT_FOUND, "PERFORMANCE_LOG_NOT_FOUND")
            }
            PerformanceLogError::ActivityNotFound(_) => {
                (StatusCode::NOT_FOUND, "ACTIVITY_NOT_FOUND")
            }
            PerformanceLogError::TaskNotFound(_) => (StatusCode::NOT_FOUND, "TASK_NOT_FOUND"),
            PerformanceLogError::ProjectNotFound(_) => {
                (StatusCode::NOT_FOUND, "PROJECT_NOT_FOUND")
            }
            PerformanceLogError::MissingActivityLink(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "MISSING_ACTIVITY_LINK")
            }
            PerformanceLogError::InvalidState { .. } => {
                (StatusCode::CONFLICT, "INVALID_STATE_TRANSITION")
            }
            PerformanceLogError::Infrastructure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ErrorResponse::new(error_code, self.0.to_string());
        (status, Json(body)).into_response()
    }
}
