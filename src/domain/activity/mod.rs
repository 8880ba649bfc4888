//! Activity aggregate - the leaf level of the progress hierarchy.

mod aggregate;
mod measurement;

pub use aggregate::Activity;
pub use measurement::{Direction, MeasurementType};
