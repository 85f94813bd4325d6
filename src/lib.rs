//! Transport roster and daily attendance cost reporting engine.
//!
//! This crate manages a transport roster (employees, the routes that
//! serve them, and the daily operating cost of each route) and builds an
//! attendance/cost report for a selected set of employees on a given day.
//! Each vehicle's cost is charged exactly once regardless of how many
//! riders share it.

#![warn(missing_docs)]

pub mod api;
pub mod error;
pub mod models;
pub mod report;
pub mod store;
