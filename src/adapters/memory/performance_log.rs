//! In-memory implementation of PerformanceLogRepository.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, PerformanceLogId, Progress};
use crate::domain::performance_log::PerformanceLog;
use crate::ports::PerformanceLogRepository;

/// In-memory performance log store.
#[derive(Default)]
pub struct InMemoryPerformanceLogRepository {
    logs: Mutex<HashMap<PerformanceLogId, PerformanceLog>>,
}

impl InMemoryPerformanceLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a log, replacing any existing one with the same id.
    pub fn insert(&self, log: PerformanceLog) {
        self.logs.lock().unwrap().insert(log.id, log);
    }

    /// Snapshot of a stored log, for assertions.
    pub fn get(&self, id: &PerformanceLogId) -> Option<PerformanceLog> {
        self.logs.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl PerformanceLogRepository for InMemoryPerformanceLogRepository {
    async fn save(&self, log: &PerformanceLog) -> Result<(), DomainError> {
        self.logs.lock().unwrap().insert(log.id, log.clone());
        Ok(())
    }

    async fn update(&self, log: &PerformanceLog) -> Result<(), DomainError> {
        let mut logs = self.logs.lock().unwrap();
        match logs.get_mut(&log.id) {
            Some(existing) => {
                *existing = log.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::PerformanceLogNotFound,
                format!("Performance log {} not found", log.id),
            )),
        }
    }

    async fn find_by_id(
        &self,
        id: &PerformanceLogId,
    ) -> Result<Option<PerformanceLog>, DomainError> {
        Ok(self.logs.lock().unwrap().get(id).cloned())
    }

    async fn set_performance_to_date(
        &self,
        id: &PerformanceLogId,
        progress: Progress,
    ) -> Result<(), DomainError> {
        let mut logs = self.logs.lock().unwrap();
        match logs.get_mut(id) {
            Some(log) => {
                log.record_performance_to_date(progress);
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::PerformanceLogNotFound,
                format!("Performance log {} not found", id),
            )),
        }
    }
}
