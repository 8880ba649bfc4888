//! Fieldtrack - Project Performance Tracking Backend
//!
//! This crate propagates quantities logged against project activities up the
//! Activity -> Task -> Project hierarchy on submission, reverses the update on
//! cancellation, and bulk-marks attendance for payroll periods.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
