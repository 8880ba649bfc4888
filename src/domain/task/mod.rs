//! Task aggregate - the middle level of the progress hierarchy.

mod aggregate;

pub use aggregate::{progress_from_totals, QuantityTotals, Task};
