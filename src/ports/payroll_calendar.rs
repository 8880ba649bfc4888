//! Payroll calendar port.

use async_trait::async_trait;

use crate::domain::attendance::PayrollPeriod;
use crate::domain::foundation::{DomainError, PayrollPeriodId};

/// Read port resolving payroll periods to their date ranges.
#[async_trait]
pub trait PayrollCalendar: Send + Sync {
    /// Find a payroll period by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_period(
        &self,
        id: &PayrollPeriodId,
    ) -> Result<Option<PayrollPeriod>, DomainError>;
}
