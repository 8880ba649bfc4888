//! In-memory implementation of ActivityRepository.
//!
//! Backed by a single mutex, which also provides the per-aggregate write
//! serialization the port assumes. Used by tests and local development.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::activity::Activity;
use crate::domain::foundation::{ActivityId, DomainError, ErrorCode, Quantity, TaskId};
use crate::domain::task::QuantityTotals;
use crate::ports::ActivityRepository;

/// In-memory activity store.
#[derive(Default)]
pub struct InMemoryActivityRepository {
    activities: Mutex<HashMap<ActivityId, Activity>>,
}

impl InMemoryActivityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an activity, replacing any existing one with the same id.
    pub fn insert(&self, activity: Activity) {
        self.activities
            .lock()
            .unwrap()
            .insert(activity.id, activity);
    }

    /// Snapshot of a stored activity, for assertions.
    pub fn get(&self, id: &ActivityId) -> Option<Activity> {
        self.activities.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn save(&self, activity: &Activity) -> Result<(), DomainError> {
        self.activities
            .lock()
            .unwrap()
            .insert(activity.id, activity.clone());
        Ok(())
    }

    async fn update(&self, activity: &Activity) -> Result<(), DomainError> {
        let mut activities = self.activities.lock().unwrap();
        match activities.get_mut(&activity.id) {
            Some(existing) => {
                *existing = activity.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::ActivityNotFound,
                format!("Activity {} not found", activity.id),
            )),
        }
    }

    async fn find_by_id(&self, id: &ActivityId) -> Result<Option<Activity>, DomainError> {
        Ok(self.activities.lock().unwrap().get(id).cloned())
    }

    async fn sum_for_task(&self, task_id: &TaskId) -> Result<QuantityTotals, DomainError> {
        let activities = self.activities.lock().unwrap();
        let (target, completed) = activities
            .values()
            .filter(|a| a.task_id.as_ref() == Some(task_id))
            .fold((0.0, 0.0), |(t, c), a| {
                (t + a.target_qty.value(), c + a.completed_qty.value())
            });
        Ok(QuantityTotals::new(
            Quantity::clamped(target),
            Quantity::clamped(completed),
        ))
    }
}
