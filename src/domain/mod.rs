//! Domain layer: aggregates, value objects, and domain errors.

pub mod activity;
pub mod attendance;
pub mod foundation;
pub mod performance_log;
pub mod project;
pub mod task;
