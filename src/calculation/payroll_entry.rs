//! Payroll entry computation.
//!
//! This module runs the full pipeline for one employee and one payroll
//! period: select the payable shifts, aggregate their hours, resolve rates,
//! then apply bonuses and deductions.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AdjustmentKind, AuditStep, AuditTrace, AuditWarning, PayAdjustment, PayPeriod, PayrollEntry,
    ShiftInterval, WageConfig,
};

use super::hours_aggregation::{
    DEFAULT_REGULAR_HOURS_PER_DAY, OvertimePolicy, aggregate_hours_with_policy,
};
use super::rounding::round_half_up;
use super::wage_rate::resolve_wage_rates;

/// The version string stamped on every payroll entry.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine-wide settings for a payroll computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSettings {
    /// Regular hours per day before overtime applies.
    pub regular_hours_per_day: Decimal,
    /// How the daily threshold is applied.
    pub overtime_policy: OvertimePolicy,
}

impl Default for PayrollSettings {
    fn default() -> Self {
        Self {
            regular_hours_per_day: DEFAULT_REGULAR_HOURS_PER_DAY,
            overtime_policy: OvertimePolicy::PerShift,
        }
    }
}

/// Everything needed to compute one employee's payroll entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollInput {
    /// The employee the entry is for.
    pub employee_id: String,
    /// The payroll period.
    pub period: PayPeriod,
    /// The employee's wage configuration.
    pub wage: WageConfig,
    /// Shift records; unapproved or out-of-period shifts are filtered here.
    pub shifts: Vec<ShiftInterval>,
    /// Bonuses and deductions to apply after gross pay.
    pub adjustments: Vec<PayAdjustment>,
}

/// Keeps approved shifts dated inside `period`, warning about the rest.
fn select_payable_shifts(
    shifts: &[ShiftInterval],
    period: &PayPeriod,
    warnings: &mut Vec<AuditWarning>,
) -> Vec<ShiftInterval> {
    shifts
        .iter()
        .filter(|shift| {
            if !shift.approved {
                debug!(shift_id = %shift.id, "Excluding unapproved shift");
                warnings.push(AuditWarning::new(
                    "UNAPPROVED_SHIFT_EXCLUDED",
                    format!("Shift '{}' is not approved and was not counted", shift.id),
                    "low",
                ));
                return false;
            }
            if !period.contains_date(shift.date) {
                debug!(shift_id = %shift.id, date = %shift.date, "Excluding shift outside period");
                warnings.push(AuditWarning::new(
                    "SHIFT_OUTSIDE_PERIOD",
                    format!(
                        "Shift '{}' on {} is outside {} to {} and was not counted",
                        shift.id, shift.date, period.start_date, period.end_date
                    ),
                    "medium",
                ));
                return false;
            }
            true
        })
        .cloned()
        .collect()
}

/// Computes a complete [`PayrollEntry`].
///
/// Net pay is gross pay plus bonuses minus deductions. A negative net pay is
/// reported with a `NEGATIVE_NET_PAY` warning rather than clamped.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if the period is inverted, an
/// adjustment amount is negative, or any step of the pipeline rejects its
/// input.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{compute_payroll_entry, PayrollInput, PayrollSettings};
/// use payroll_engine::models::{PayPeriod, ShiftInterval, WageConfig};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = PayrollInput {
///     employee_id: "emp_001".to_string(),
///     period: PayPeriod {
///         start_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
///     },
///     wage: WageConfig::hourly(Decimal::new(20, 0)),
///     shifts: vec![ShiftInterval {
///         id: "shift_001".to_string(),
///         date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///         start_time: "08:00".to_string(),
///         end_time: Some("18:00".to_string()),
///         break_start: None,
///         break_end: None,
///         approved: true,
///     }],
///     adjustments: vec![],
/// };
///
/// let entry = compute_payroll_entry(&input, &PayrollSettings::default()).unwrap();
/// assert_eq!(entry.net_pay, Decimal::new(220, 0));
/// ```
pub fn compute_payroll_entry(
    input: &PayrollInput,
    settings: &PayrollSettings,
) -> EngineResult<PayrollEntry> {
    let started = Instant::now();

    if !input.period.is_valid() {
        return Err(EngineError::invalid_input(
            "period",
            format!(
                "end date {} is before start date {}",
                input.period.end_date, input.period.start_date
            ),
        ));
    }

    let mut warnings = Vec::new();
    let payable = select_payable_shifts(&input.shifts, &input.period, &mut warnings);

    let first_step = 1;
    let aggregation = aggregate_hours_with_policy(
        &payable,
        settings.regular_hours_per_day,
        settings.overtime_policy,
        first_step,
    )?;
    let mut step_number = aggregation.next_step(first_step);
    warnings.extend(aggregation.warnings);

    let resolution = resolve_wage_rates(
        &input.wage,
        &aggregation.breakdown,
        settings.regular_hours_per_day,
        step_number,
    )?;
    step_number = step_number.saturating_add(1);

    let mut bonuses_total = Decimal::ZERO;
    let mut deductions_total = Decimal::ZERO;
    for (index, adjustment) in input.adjustments.iter().enumerate() {
        if adjustment.amount < Decimal::ZERO {
            return Err(EngineError::invalid_input(
                format!("adjustments[{}].amount", index),
                format!("must not be negative, got {}", adjustment.amount),
            ));
        }
        let total = match adjustment.kind {
            AdjustmentKind::Bonus => &mut bonuses_total,
            AdjustmentKind::Deduction => &mut deductions_total,
        };
        *total = total.checked_add(adjustment.amount).ok_or_else(|| {
            EngineError::invalid_input(
                format!("adjustments[{}].amount", index),
                "adjustment total overflows",
            )
        })?;
    }
    let bonuses_total = round_half_up(bonuses_total);
    let deductions_total = round_half_up(deductions_total);
    let gross_pay = resolution.result.gross_pay;
    let net_pay = gross_pay
        .checked_add(bonuses_total)
        .and_then(|pay| pay.checked_sub(deductions_total))
        .ok_or_else(|| EngineError::invalid_input("adjustments", "net pay overflows"))?;

    if net_pay < Decimal::ZERO {
        warnings.push(AuditWarning::new(
            "NEGATIVE_NET_PAY",
            format!("Deductions exceed pay; net pay is {}", net_pay.normalize()),
            "high",
        ));
    }

    let adjustment_step = AuditStep {
        step_number,
        rule_id: "pay_adjustments".to_string(),
        rule_name: "Pay Adjustments".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.normalize().to_string(),
            "adjustment_count": input.adjustments.len()
        }),
        output: serde_json::json!({
            "bonuses_total": bonuses_total.normalize().to_string(),
            "deductions_total": deductions_total.normalize().to_string(),
            "net_pay": net_pay.normalize().to_string()
        }),
        reasoning: format!(
            "${} gross + ${} bonuses - ${} deductions = ${} net",
            gross_pay.normalize(),
            bonuses_total.normalize(),
            deductions_total.normalize(),
            net_pay.normalize()
        ),
    };

    let mut steps = aggregation.audit_steps;
    steps.push(resolution.audit_step);
    steps.push(adjustment_step);

    Ok(PayrollEntry {
        entry_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        employee_id: input.employee_id.clone(),
        period: input.period,
        wage_mode: input.wage.mode,
        hours: aggregation.breakdown,
        rates: resolution.result,
        shift_lines: aggregation.lines,
        adjustments: input.adjustments.clone(),
        bonuses_total,
        deductions_total,
        net_pay,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
        },
    })
}
