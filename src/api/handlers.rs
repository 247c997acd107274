//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{PayrollInput, compute_payroll_entry};
use crate::models::{ShiftInterval, WageConfig};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, api_error.error)
}

fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
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
    }
}

/// Picks the inline wage if given, else the configured wage group.
fn resolve_wage(
    state: &AppState,
    wage: Option<WageConfig>,
    wage_group: Option<&str>,
) -> Result<WageConfig, ApiErrorResponse> {
    match (wage, wage_group) {
        (Some(wage), _) => Ok(wage),
        (None, Some(code)) => state.config().wage_config(code).map_err(Into::into),
        (None, None) => Err(ApiErrorResponse::bad_request(ApiError::validation_error(
            "Either 'wage' or 'wage_group' must be provided",
        ))),
    }
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the computed payroll entry.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let wage = match resolve_wage(&state, request.wage, request.wage_group.as_deref()) {
        Ok(wage) => wage,
        Err(api_error) => {
            warn!(
                correlation_id = %correlation_id,
                wage_group = ?request.wage_group,
                code = %api_error.error.code,
                "Wage configuration could not be resolved"
            );
            return error_response(api_error);
        }
    };

    let input = PayrollInput {
        employee_id: request.employee_id,
        period: request.period.into(),
        wage,
        shifts: request
            .shifts
            .into_iter()
            .map(ShiftInterval::from)
            .collect(),
        adjustments: request.adjustments,
    };

    let start_time = Instant::now();
    match compute_payroll_entry(&input, &state.config().settings()) {
        Ok(entry) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %entry.employee_id,
                shifts_count = input.shifts.len(),
                total_hours = %entry.hours.total_hours,
                net_pay = %entry.net_pay,
                warnings = entry.audit_trace.warnings.len(),
                duration_us = u64::try_from(start_time.elapsed().as_micros()).unwrap_or(u64::MAX),
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, entry)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            error_response(ApiErrorResponse::from(err))
        }
    }
}
