//! Performance log command handlers.

mod cancel_log;
mod propagation;
mod submit_log;

pub use cancel_log::{
    CancelPerformanceLogCommand, CancelPerformanceLogHandler, CancelPerformanceLogResult,
};
pub use submit_log::{
    SubmitPerformanceLogCommand, SubmitPerformanceLogHandler, SubmitPerformanceLogResult,
};
