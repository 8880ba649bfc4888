//! Performance log repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PerformanceLogId, Progress};
use crate::domain::performance_log::PerformanceLog;

/// Repository port for PerformanceLog aggregate persistence.
#[async_trait]
pub trait PerformanceLogRepository: Send + Sync {
    /// Save a new log.
    async fn save(&self, log: &PerformanceLog) -> Result<(), DomainError>;

    /// Update an existing log.
    ///
    /// # Errors
    ///
    /// - `PerformanceLogNotFound` if the log doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, log: &PerformanceLog) -> Result<(), DomainError>;

    /// Find a log by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &PerformanceLogId)
        -> Result<Option<PerformanceLog>, DomainError>;

    /// Write the mirrored activity progress onto a log without a full
    /// aggregate save cycle.
    async fn set_performance_to_date(
        &self,
        id: &PerformanceLogId,
        progress: Progress,
    ) -> Result<(), DomainError>;
}
