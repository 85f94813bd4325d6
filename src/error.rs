//! Error types for the transport roster engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all fatal conditions in the engine. Data-quality misses (an unknown
//! employee name, a dangling route code) are *not* errors; they surface as
//! [`Unresolved`](crate::models::Unresolved) diagnostics inside a
//! successful report.

use thiserror::Error;

/// The main error type for the transport roster engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use transport_roster::error::RosterError;
///
/// let error = RosterError::RosterFileNotFound {
///     path: "/missing/employees.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Roster file not found: /missing/employees.yaml");
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// A roster data file was not found at the specified path.
    #[error("Roster file not found: {path}")]
    RosterFileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A roster data file could not be parsed.
    #[error("Failed to parse roster file '{path}': {message}")]
    RosterParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A route cost referenced a route code with no matching route.
    #[error("Route cost references unknown route code: {code}")]
    UnknownRouteCode {
        /// The route code that did not resolve.
        code: String,
    },

    /// The roster store could not be reached or returned a malformed record.
    #[error("Roster store fault: {message}")]
    StoreFault {
        /// A description of the store fault.
        message: String,
    },

    /// A report export could not be written.
    #[error("Failed to write export '{path}': {message}")]
    ExportError {
        /// The destination path of the failed export.
        path: String,
        /// A description of the write failure.
        message: String,
    },
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;
