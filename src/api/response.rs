//! Response types for the transport roster API.
//!
//! This module defines the report response envelope and the error response
//! structures for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RosterError;
use crate::models::ReportModel;

/// Response body for a successful `/report` call.
///
/// The envelope carries the request-scoped metadata (report id, generation
/// timestamp, engine version); the report itself is flattened into the
/// body. The metadata lives here and not in [`ReportModel`] so the model
/// stays deterministic for identical inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    /// Unique identifier for this report run.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that built the report.
    pub engine_version: String,
    /// The report itself.
    #[serde(flatten)]
    pub report: ReportModel,
}

impl ReportResponse {
    /// Wraps a report model in a fresh response envelope.
    pub fn new(report: ReportModel) -> Self {
        Self {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            report,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<RosterError> for ApiErrorResponse {
    fn from(error: RosterError) -> Self {
        match error {
            RosterError::RosterFileNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "ROSTER_ERROR",
                    "Roster data error",
                    format!("Roster file not found: {}", path),
                ),
            },
            RosterError::RosterParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "ROSTER_ERROR",
                    "Roster data parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            RosterError::UnknownRouteCode { code } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_ROUTE_CODE",
                    format!("Route cost references unknown route code: {}", code),
                    "Route costs must reference an existing route",
                ),
            },
            RosterError::StoreFault { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORE_FAULT", "Roster store fault", message),
            },
            RosterError::ExportError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "EXPORT_ERROR",
                    format!("Failed to write export '{}'", path),
                    message,
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::collections::BTreeMap;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_store_fault_maps_to_500() {
        let roster_error = RosterError::StoreFault {
            message: "unreachable".to_string(),
        };
        let api_error: ApiErrorResponse = roster_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "STORE_FAULT");
    }

    #[test]
    fn test_unknown_route_code_maps_to_400() {
        let roster_error = RosterError::UnknownRouteCode {
            code: "R9".to_string(),
        };
        let api_error: ApiErrorResponse = roster_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "UNKNOWN_ROUTE_CODE");
    }

    #[test]
    fn test_report_response_flattens_model() {
        let response = ReportResponse::new(ReportModel {
            date: "2025-04-07".to_string(),
            routes: vec![],
            department_counts: BTreeMap::new(),
            total_cost: Decimal::ZERO,
            unresolved: vec![],
        });

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"report_id\""));
        assert!(json.contains("\"generated_at\""));
        assert!(json.contains("\"engine_version\""));
        // Flattened model fields sit at the top level.
        assert!(json.contains("\"date\":\"2025-04-07\""));
        assert!(json.contains("\"total_cost\":\"0\""));
        assert!(!json.contains("\"report\":{"));
    }
}
