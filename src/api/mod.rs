//! HTTP API for the payroll engine.
//!
//! Exposes `POST /calculate`, which turns a batch of shifts and a wage
//! configuration into a [`PayrollEntry`](crate::models::PayrollEntry).

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, PayPeriodRequest, ShiftRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
