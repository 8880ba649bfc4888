//! Progress value object (percent, floored at zero).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A progress percentage.
///
/// Unlike a conventional percentage there is no upper clamp: an activity whose
/// completed quantity overshoots its target reports more than 100%, and a
/// decreasing-measure activity below its floor does the same. Only the lower
/// bound (zero) is enforced.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress(f64);

impl Progress {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// Creates a Progress, flooring negative or non-finite input at zero.
    pub fn new(value: f64) -> Self {
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

    /// Returns true if `other` is within `epsilon` of this value.
    pub fn approx_eq(&self, other: Progress, epsilon: f64) -> bool {
        (self.0 - other.0).abs() <= epsilon
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_values_over_100() {
        assert_eq!(Progress::new(250.0).value(), 250.0);
    }

    #[test]
    fn new_floors_negative_values_at_zero() {
        assert_eq!(Progress::new(-10.0), Progress::ZERO);
    }

    #[test]
    fn new_floors_nan_at_zero() {
        assert_eq!(Progress::new(f64::NAN), Progress::ZERO);
    }

    #[test]
    fn approx_eq_tolerates_epsilon() {
        let a = Progress::new(66.666);
        let b = Progress::new(66.667);
        assert!(a.approx_eq(b, 0.01));
        assert!(!a.approx_eq(Progress::new(67.0), 0.01));
    }

    #[test]
    fn displays_with_two_decimals() {
        assert_eq!(format!("{}", Progress::new(66.6666)), "66.67%");
        assert_eq!(format!("{}", Progress::ZERO), "0.00%");
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Progress::default(), Progress::ZERO);
    }

    #[test]
    fn serializes_transparently() {
        let p = Progress::new(75.0);
        assert_eq!(serde_json::to_string(&p).unwrap(), "75.0");
    }
}
