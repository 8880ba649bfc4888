//! Application layer: command handlers orchestrating domain aggregates
//! through the repository ports.

pub mod handlers;
