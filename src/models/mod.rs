//! Core data models for the transport roster engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod report;
mod route;

pub use employee::Employee;
pub use report::{ReportModel, RouteSummary, Unresolved, UnresolvedReason};
pub use route::{Route, RouteCost, STATION_SEPARATOR};
