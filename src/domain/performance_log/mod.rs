//! PerformanceLog aggregate and its lifecycle state machine.

mod aggregate;
mod errors;
mod status;

pub use aggregate::PerformanceLog;
pub use errors::PerformanceLogError;
pub use status::PerformanceLogStatus;
