//! Attendance command handlers.

mod mark_payroll_period;

pub use mark_payroll_period::{
    MarkPayrollPeriodCommand, MarkPayrollPeriodHandler, MarkPayrollPeriodResult,
};
