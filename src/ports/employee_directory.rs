//! Employee directory port.

use async_trait::async_trait;

use crate::domain::attendance::Employee;
use crate::domain::foundation::DomainError;

/// Read port resolving the current list of active employees.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// All employees with Active status.
    async fn active_employees(&self) -> Result<Vec<Employee>, DomainError>;
}
