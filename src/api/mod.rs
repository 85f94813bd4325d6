//! HTTP API module for the transport roster engine.
//!
//! This module provides the REST endpoints for building attendance/cost
//! reports and browsing the loaded roster.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ReportRequest;
pub use response::{ApiError, ReportResponse};
pub use state::AppState;
