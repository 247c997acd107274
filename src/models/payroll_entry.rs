//! Payroll result models.
//!
//! This module contains [`PayrollComputationResult`], the rates and gross pay
//! resolved for an hours breakdown, and [`PayrollEntry`], the complete record a
//! caller persists for one employee and one payroll period.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditTrace, HoursBreakdown, PayPeriod, ShiftHoursLine, WageMode};

/// Rates and gross pay derived from a wage configuration and an hours breakdown.
///
/// Always recomputed from its inputs; never edited independently.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollComputationResult;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = PayrollComputationResult {
///     regular_rate: Decimal::from_str("20.00").unwrap(),
///     overtime_rate: Decimal::from_str("30.00").unwrap(),
///     gross_pay: Decimal::from_str("220.00").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollComputationResult {
    /// Hourly rate for regular hours.
    pub regular_rate: Decimal,
    /// Hourly rate for overtime hours.
    pub overtime_rate: Decimal,
    /// Regular plus overtime pay, before adjustments.
    pub gross_pay: Decimal,
}

/// Whether an adjustment adds to or subtracts from pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    /// Added to gross pay.
    Bonus,
    /// Subtracted from gross pay.
    Deduction,
}

/// A bonus or deduction supplied by the hosting application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayAdjustment {
    /// Whether this is a bonus or a deduction.
    pub kind: AdjustmentKind,
    /// Free-text description (e.g. "Holiday bonus", "Uniform").
    #[serde(default)]
    pub description: String,
    /// The non-negative amount.
    pub amount: Decimal,
}

/// A computed payroll entry for one employee over one payroll period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollEntry {
    /// Unique identifier for this computation.
    pub entry_id: Uuid,
    /// When the computation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the computation.
    pub engine_version: String,
    /// The ID of the employee the entry is for.
    pub employee_id: String,
    /// The payroll period covered.
    pub period: PayPeriod,
    /// The wage mode the rates were resolved under.
    pub wage_mode: WageMode,
    /// Total, regular and overtime hours.
    pub hours: HoursBreakdown,
    /// Resolved rates and gross pay.
    pub rates: PayrollComputationResult,
    /// Per-shift hours, in processing order.
    pub shift_lines: Vec<ShiftHoursLine>,
    /// Bonuses and deductions applied after gross pay.
    pub adjustments: Vec<PayAdjustment>,
    /// Sum of all bonuses.
    pub bonuses_total: Decimal,
    /// Sum of all deductions.
    pub deductions_total: Decimal,
    /// Gross pay plus bonuses minus deductions.
    pub net_pay: Decimal,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
