//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

uuid_id! {
    /// Unique identifier for a project activity.
    ActivityId
}

uuid_id! {
    /// Unique identifier for a task.
    TaskId
}

uuid_id! {
    /// Unique identifier for a project.
    ProjectId
}

uuid_id! {
    /// Unique identifier for a daily performance log.
    PerformanceLogId
}

uuid_id! {
    /// Unique identifier for an attendance record.
    AttendanceId
}

uuid_id! {
    /// Unique identifier for a payroll period.
    PayrollPeriodId
}

/// Employee identifier (typically from the HR system).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Creates a new EmployeeId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("employee_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_id_generates_unique_values() {
        let id1 = ActivityId::new();
        let id2 = ActivityId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn activity_id_parses_from_valid_string() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: ActivityId = uuid_str.parse().unwrap();
        assert_eq!(id.to_string(), uuid_str);
    }

    #[test]
    fn activity_id_serializes_to_json() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: ActivityId = uuid_str.parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid_str));
    }

    #[test]
    fn performance_log_id_from_uuid_preserves_value() {
        let uuid = Uuid::new_v4();
        let id = PerformanceLogId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn employee_id_accepts_non_empty_string() {
        let id = EmployeeId::new("EMP-0042").unwrap();
        assert_eq!(id.as_str(), "EMP-0042");
    }

    #[test]
    fn employee_id_rejects_empty_string() {
        let result = EmployeeId::new("");
        assert!(result.is_err());
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "employee_id"),
            _ => panic!("Expected EmptyField error"),
        }
    }

    #[test]
    fn employee_id_displays_correctly() {
        let id = EmployeeId::new("EMP-7").unwrap();
        assert_eq!(format!("{}", id), "EMP-7");
    }
}
