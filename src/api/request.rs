//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{PayAdjustment, PayPeriod, ShiftInterval, WageConfig};

fn default_approved() -> bool {
    true
}

/// Request body for the `/calculate` endpoint.
///
/// The wage is taken from `wage` when present, otherwise from the configured
/// wage group named by `wage_group`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee the entry is for.
    pub employee_id: String,
    /// The payroll period.
    pub period: PayPeriodRequest,
    /// Code of a configured wage group.
    #[serde(default)]
    pub wage_group: Option<String>,
    /// An inline wage configuration; overrides `wage_group`.
    #[serde(default)]
    pub wage: Option<WageConfig>,
    /// The shifts recorded in the period.
    pub shifts: Vec<ShiftRequest>,
    /// Bonuses and deductions.
    #[serde(default)]
    pub adjustments: Vec<PayAdjustment>,
}

/// Pay period information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

/// Shift information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Unique identifier for the shift.
    pub id: String,
    /// The date of the shift.
    pub date: NaiveDate,
    /// The start time (`HH:MM`).
    pub start_time: String,
    /// The end time (`HH:MM`), absent for an open shift.
    #[serde(default)]
    pub end_time: Option<String>,
    /// The start of the break.
    #[serde(default)]
    pub break_start: Option<NaiveDateTime>,
    /// The end of the break.
    #[serde(default)]
    pub break_end: Option<NaiveDateTime>,
    /// Whether the shift is approved for payroll.
    #[serde(default = "default_approved")]
    pub approved: bool,
}

impl From<PayPeriodRequest> for PayPeriod {
    fn from(req: PayPeriodRequest) -> Self {
        PayPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

impl From<ShiftRequest> for ShiftInterval {
    fn from(req: ShiftRequest) -> Self {
        ShiftInterval {
            id: req.id,
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
            break_start: req.break_start,
            break_end: req.break_end,
            approved: req.approved,
        }
    }
}
