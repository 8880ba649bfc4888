//! Command handlers, one module per feature area.

pub mod attendance;
pub mod performance_log;
