//! Quantity value object (non-negative amounts of work).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A non-negative quantity of work (units depend on the activity).
///
/// Quantities are floored at zero; the reverse side of a performance log can
/// never drive an aggregate below it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(f64);

impl Quantity {
    /// Zero quantity.
    pub const ZERO: Self = Self(0.0);

    /// Creates a Quantity, returning error if negative or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(
                "quantity",
                "must be a finite number",
            ));
        }
        if value < 0.0 {
            return Err(ValidationError::negative_quantity("quantity", value));
        }
        Ok(Self(value))
    }

    /// Creates a Quantity, flooring negative or non-finite input at zero.
    pub fn clamped(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Self(value)
        } else {
            Self::ZERO
        }
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns true if the quantity is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
