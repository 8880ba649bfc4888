//! Measurement type dispatch for activity aggregation.
//!
//! Each measurement type carries its own combination rule (how a logged
//! quantity folds into the running total) and progress rule (how the total
//! reads against the target). Submit and cancel share the same pair of
//! functions, parametrized by [`Direction`], so the reverse path cannot
//! drift from the forward path.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Progress, Quantity};

/// Whether a performance log is being applied or reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Submission: the logged quantity counts toward the activity.
    Forward,
    /// Cancellation: the logged quantity is backed out again.
    Reverse,
}

impl Direction {
    /// Sign applied to additive deltas.
    pub fn signum(&self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }
}

/// How an activity's completed quantity is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementType {
    /// Cumulative measure counting up toward the target (e.g. meters poured).
    Increasing,

    /// Cumulative measure trending down toward a floor (e.g. open defects).
    /// Progress is the inverted ratio: target over completed.
    Decreasing,

    /// Point-in-time reading; each log replaces the previous value rather
    /// than adding to it.
    Constant,

    /// No measurement type recorded. Treated as the additive rule.
    #[default]
    Unspecified,
}

impl MeasurementType {
    /// Folds a logged quantity into the running completed total.
    ///
    /// Additive types move by the signed delta and floor at zero. `Constant`
    /// is last-write-wins on submission and resets to zero on cancellation;
    /// it deliberately does not restore the reading that preceded the
    /// cancelled log (the prior value is not retained anywhere).
    pub fn combine(&self, existing: Quantity, delta: f64, direction: Direction) -> Quantity {
        match self {
            MeasurementType::Constant => match direction {
                Direction::Forward => Quantity::clamped(delta),
                Direction::Reverse => Quantity::ZERO,
            },
            MeasurementType::Increasing
            | MeasurementType::Decreasing
            | MeasurementType::Unspecified => {
                Quantity::clamped(existing.value() + direction.signum() * delta)
            }
        }
    }

    /// Reads the completed total against the target as a percentage.
    ///
    /// Zero target or zero completed always reads as zero progress. There is
    /// no upper clamp; overshoot past 100% is reported as-is.
    pub fn progress_of(&self, completed: Quantity, target: Quantity) -> Progress {
        if target.is_zero() || completed.is_zero() {
            return Progress::ZERO;
        }
        match self {
            MeasurementType::Decreasing => {
                Progress::new(target.value() / completed.value() * 100.0)
            }
            MeasurementType::Increasing
            | MeasurementType::Constant
            | MeasurementType::Unspecified => {
                Progress::new(completed.value() / target.value() * 100.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn qty(v: f64) -> Quantity {
        Quantity::try_new(v).unwrap()
    }

    #[test]
    fn increasing_combine_adds_forward_and_subtracts_reverse() {
        let mt = MeasurementType::Increasing;
        let after = mt.combine(qty(10.0), 4.0, Direction::Forward);
        assert_eq!(after.value(), 14.0);
        let back = mt.combine(after, 4.0, Direction::Reverse);
        assert_eq!(back.value(), 10.0);
    }

    #[test]
    fn reverse_clamps_at_zero() {
        let mt = MeasurementType::Increasing;
        let after = mt.combine(qty(3.0), 10.0, Direction::Reverse);
        assert_eq!(after, Quantity::ZERO);
    }

    #[test]
    fn unspecified_falls_back_to_additive_rule() {
        let mt = MeasurementType::Unspecified;
        assert_eq!(mt.combine(qty(5.0), 2.0, Direction::Forward).value(), 7.0);
        assert_eq!(mt.combine(qty(5.0), 2.0, Direction::Reverse).value(), 3.0);
    }

    #[test]
    fn constant_forward_is_last_write_wins() {
        let mt = MeasurementType::Constant;
        let after = mt.combine(qty(80.0), 30.0, Direction::Forward);
        assert_eq!(after.value(), 30.0);
    }

    #[test]
    fn constant_reverse_resets_to_zero() {
        let mt = MeasurementType::Constant;
        let after = mt.combine(qty(30.0), 30.0, Direction::Reverse);
        assert_eq!(after, Quantity::ZERO);
    }

    #[test]
    fn increasing_progress_is_completed_over_target() {
        let mt = MeasurementType::Increasing;
        let p = mt.progress_of(qty(50.0), qty(200.0));
        assert_eq!(p.value(), 25.0);
    }

    #[test]
    fn decreasing_progress_is_inverted_ratio() {
        let mt = MeasurementType::Decreasing;
        assert_eq!(mt.progress_of(qty(50.0), qty(100.0)).value(), 200.0);
        assert_eq!(mt.progress_of(qty(200.0), qty(100.0)).value(), 50.0);
    }

    #[test]
    fn progress_can_exceed_100() {
        let mt = MeasurementType::Increasing;
        let p = mt.progress_of(qty(150.0), qty(100.0));
        assert_eq!(p.value(), 150.0);
    }

    #[test]
    fn zero_target_reads_zero_progress() {
        for mt in [
            MeasurementType::Increasing,
            MeasurementType::Decreasing,
            MeasurementType::Constant,
            MeasurementType::Unspecified,
        ] {
            assert_eq!(mt.progress_of(qty(10.0), Quantity::ZERO), Progress::ZERO);
        }
    }

    #[test]
    fn zero_completed_reads_zero_progress() {
        for mt in [
            MeasurementType::Increasing,
            MeasurementType::Decreasing,
            MeasurementType::Constant,
            MeasurementType::Unspecified,
        ] {
            assert_eq!(mt.progress_of(Quantity::ZERO, qty(10.0)), Progress::ZERO);
        }
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&MeasurementType::Increasing).unwrap(),
            "\"increasing\""
        );
        assert_eq!(
            serde_json::to_string(&MeasurementType::Unspecified).unwrap(),
            "\"unspecified\""
        );
    }

    proptest! {
        // Submit then cancel restores the completed total whenever the
        // reverse clamp cannot engage (delta never exceeds the running total
        // on the way back down because forward added it first).
        #[test]
        fn additive_round_trip_restores_completed(
            existing in 0.0f64..1_000_000.0,
            delta in 0.0f64..1_000_000.0,
        ) {
            for mt in [MeasurementType::Increasing, MeasurementType::Decreasing] {
                let before = Quantity::try_new(existing).unwrap();
                let applied = mt.combine(before, delta, Direction::Forward);
                let reversed = mt.combine(applied, delta, Direction::Reverse);
                prop_assert!((reversed.value() - before.value()).abs() < 1e-6);
            }
        }

        // The completed total never goes negative, whatever the inputs.
        #[test]
        fn combine_never_goes_negative(
            existing in 0.0f64..1_000_000.0,
            delta in -1_000_000.0f64..1_000_000.0,
        ) {
            for mt in [
                MeasurementType::Increasing,
                MeasurementType::Decreasing,
                MeasurementType::Constant,
                MeasurementType::Unspecified,
            ] {
                let before = Quantity::try_new(existing).unwrap();
                for direction in [Direction::Forward, Direction::Reverse] {
                    let after = mt.combine(before, delta, direction);
                    prop_assert!(after.value() >= 0.0);
                }
            }
        }
    }
}
