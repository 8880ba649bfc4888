//! Project aggregate - the top level of the progress hierarchy.

mod aggregate;

pub use aggregate::{completion_from_tasks, Project};
