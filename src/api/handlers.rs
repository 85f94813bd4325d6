//! HTTP request handlers for the transport roster API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::report::build_report;
use crate::store::RosterStore;

use super::request::ReportRequest;
use super::response::{ApiError, ApiErrorResponse, ReportResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/report", post(report_handler))
        .route("/employees", get(list_employees))
        .route("/routes", get(list_routes))
        .route("/route-costs", get(list_route_costs))
        .with_state(state)
}

/// Handler for POST /report endpoint.
///
/// Accepts an attendance selection and returns the built report.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    match build_report(state.roster(), &request.date, &request.employees) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                date = %report.date,
                requested = request.employees.len(),
                resolved = report.resolved_count(),
                routes = report.routes.len(),
                unresolved = report.unresolved.len(),
                total_cost = %report.total_cost,
                "Report built successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ReportResponse::new(report)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Report build failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for GET /employees endpoint.
async fn list_employees(State(state): State<AppState>) -> impl IntoResponse {
    // Serialized straight from the borrowed records; no per-request copy.
    match state.roster().employees() {
        Ok(employees) => Json(employees).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for GET /routes endpoint.
async fn list_routes(State(state): State<AppState>) -> impl IntoResponse {
    match state.roster().routes() {
        Ok(routes) => Json(routes).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for GET /route-costs endpoint.
async fn list_route_costs(State(state): State<AppState>) -> impl IntoResponse {
    match state.roster().route_costs() {
        Ok(costs) => Json(costs).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}
