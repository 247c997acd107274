//! Payroll hours aggregation.
//!
//! This module sums the worked hours of an employee's shifts over a period
//! and splits them into regular and overtime hours against a daily threshold.
//!
//! The threshold is applied per shift by default: two 5 hour shifts on the
//! same date are 10 regular hours. [`OvertimePolicy::PerDay`] pools shifts
//! sharing a date before applying the threshold and must be opted into.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditWarning, HoursBreakdown, ShiftHoursLine, ShiftInterval};

use super::shift_hours::{calculate_shift_hours, tag_shift_error};
use super::time_of_day::parse_time_of_day;

/// Default number of regular hours per day before overtime applies.
pub const DEFAULT_REGULAR_HOURS_PER_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// How the daily regular-hours threshold is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimePolicy {
    /// Each shift is measured against the threshold on its own.
    #[default]
    PerShift,
    /// Shifts on the same date share one threshold, allocated in start-time order.
    PerDay,
}

impl OvertimePolicy {
    fn as_str(&self) -> &'static str {
        match self {
            OvertimePolicy::PerShift => "per_shift",
            OvertimePolicy::PerDay => "per_day",
        }
    }
}

/// Splits hours into a regular portion capped at `allowance` and the overtime excess.
///
/// A zero or negative allowance makes every hour overtime.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::split_regular_overtime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let (regular, overtime) = split_regular_overtime(
///     Decimal::from_str("10").unwrap(),
///     Decimal::from_str("8").unwrap(),
/// );
/// assert_eq!(regular, Decimal::from_str("8").unwrap());
/// assert_eq!(overtime, Decimal::from_str("2").unwrap());
/// ```
pub fn split_regular_overtime(hours: Decimal, allowance: Decimal) -> (Decimal, Decimal) {
    let allowance = allowance.max(Decimal::ZERO);
    if hours <= allowance {
        (hours, Decimal::ZERO)
    } else {
        (allowance, hours - allowance)
    }
}

/// The result of aggregating a set of shifts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoursAggregation {
    /// Total, regular and overtime hours across all counted shifts.
    pub breakdown: HoursBreakdown,
    /// Per-shift hours in processing order (date, then start time).
    pub lines: Vec<ShiftHoursLine>,
    /// IDs of open shifts that were left out.
    pub excluded_open_shifts: Vec<String>,
    /// Audit steps, numbered from the `first_step` passed in.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings raised while aggregating.
    pub warnings: Vec<AuditWarning>,
}

impl HoursAggregation {
    /// The step number following the last audit step recorded.
    pub fn next_step(&self, first_step: u32) -> u32 {
        let recorded = u32::try_from(self.audit_steps.len()).unwrap_or(u32::MAX);
        first_step.saturating_add(recorded)
    }
}

/// Aggregates shifts with the default per-shift overtime policy.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{aggregate_hours, DEFAULT_REGULAR_HOURS_PER_DAY};
/// use payroll_engine::models::ShiftInterval;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let shift = ShiftInterval {
///     id: "shift_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     start_time: "08:00".to_string(),
///     end_time: Some("18:00".to_string()),
///     break_start: None,
///     break_end: None,
///     approved: true,
/// };
///
/// let aggregation = aggregate_hours(&[shift], DEFAULT_REGULAR_HOURS_PER_DAY).unwrap();
/// assert_eq!(aggregation.breakdown.regular_hours, Decimal::new(8, 0));
/// assert_eq!(aggregation.breakdown.overtime_hours, Decimal::new(2, 0));
/// ```
pub fn aggregate_hours(
    shifts: &[ShiftInterval],
    regular_hours_per_day: Decimal,
) -> EngineResult<HoursAggregation> {
    aggregate_hours_with_policy(shifts, regular_hours_per_day, OvertimePolicy::PerShift, 1)
}

/// Aggregates shifts into an [`HoursBreakdown`] under the given policy.
///
/// Open shifts are skipped with an `OPEN_SHIFT_EXCLUDED` warning. Completed
/// shifts are measured in ascending date then start-time order; shifts that
/// tie keep their input order.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if `regular_hours_per_day` is negative
/// or any completed shift has malformed times or a negative break.
pub fn aggregate_hours_with_policy(
    shifts: &[ShiftInterval],
    regular_hours_per_day: Decimal,
    policy: OvertimePolicy,
    first_step: u32,
) -> EngineResult<HoursAggregation> {
    if regular_hours_per_day < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "regular_hours_per_day",
            format!("must not be negative, got {}", regular_hours_per_day),
        ));
    }

    let mut warnings = Vec::new();
    let mut excluded_open_shifts = Vec::new();
    let mut completed: Vec<(NaiveDate, u32, &ShiftInterval)> = Vec::with_capacity(shifts.len());

    for shift in shifts {
        if shift.is_open() {
            debug!(shift_id = %shift.id, "Excluding open shift from aggregation");
            warnings.push(AuditWarning::new(
                "OPEN_SHIFT_EXCLUDED",
                format!("Shift '{}' has no end time and was not counted", shift.id),
                "low",
            ));
            excluded_open_shifts.push(shift.id.clone());
            continue;
        }
        let start_minutes = parse_time_of_day("start_time", &shift.start_time)
            .map_err(|e| tag_shift_error(&shift.id, e))?;
        completed.push((shift.date, start_minutes, shift));
    }

    completed.sort_by_key(|(date, start_minutes, _)| (*date, *start_minutes));

    let mut audit_steps = Vec::new();
    let mut step_number = first_step;
    let mut measured: Vec<(&ShiftInterval, Decimal)> = Vec::with_capacity(completed.len());

    for (_, _, shift) in completed {
        let result = calculate_shift_hours(shift, step_number)?;
        step_number = step_number.saturating_add(1);
        if result.break_exceeds_shift {
            warnings.push(AuditWarning::new(
                "BREAK_EXCEEDS_SHIFT",
                format!(
                    "Break on shift '{}' is longer than the shift; counted as 0 hours",
                    shift.id
                ),
                "medium",
            ));
        }
        audit_steps.push(result.audit_step);
        measured.push((shift, result.hours));
    }

    let mut lines = Vec::with_capacity(measured.len());
    let mut breakdown = HoursBreakdown::zero();
    let mut current_day: Option<NaiveDate> = None;
    let mut day_allowance = regular_hours_per_day;

    for (shift, hours) in measured {
        let allowance = match policy {
            OvertimePolicy::PerShift => regular_hours_per_day,
            OvertimePolicy::PerDay => {
                if current_day != Some(shift.date) {
                    current_day = Some(shift.date);
                    day_allowance = regular_hours_per_day;
                }
                day_allowance
            }
        };

        let (regular_hours, overtime_hours) = split_regular_overtime(hours, allowance);
        if policy == OvertimePolicy::PerDay {
            day_allowance -= regular_hours;
        }

        audit_steps.push(overtime_split_step(
            step_number,
            shift,
            hours,
            allowance,
            policy,
            regular_hours,
            overtime_hours,
        ));
        step_number = step_number.saturating_add(1);

        let line = ShiftHoursLine {
            shift_id: shift.id.clone(),
            date: shift.date,
            hours,
            regular_hours,
            overtime_hours,
        };
        breakdown.add_line(&line);
        lines.push(line);
    }

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "hours_aggregation".to_string(),
        rule_name: "Hours Aggregation".to_string(),
        input: serde_json::json!({
            "shift_count": shifts.len(),
            "counted_shifts": lines.len(),
            "excluded_open_shifts": excluded_open_shifts,
            "regular_hours_per_day": regular_hours_per_day.normalize().to_string(),
            "policy": policy.as_str()
        }),
        output: serde_json::json!({
            "total_hours": breakdown.total_hours.normalize().to_string(),
            "regular_hours": breakdown.regular_hours.normalize().to_string(),
            "overtime_hours": breakdown.overtime_hours.normalize().to_string()
        }),
        reasoning: format!(
            "{} completed shifts total {} hours: {} regular, {} overtime",
            lines.len(),
            breakdown.total_hours.normalize(),
            breakdown.regular_hours.normalize(),
            breakdown.overtime_hours.normalize()
        ),
    });

    Ok(HoursAggregation {
        breakdown,
        lines,
        excluded_open_shifts,
        audit_steps,
        warnings,
    })
}

fn overtime_split_step(
    step_number: u32,
    shift: &ShiftInterval,
    hours: Decimal,
    allowance: Decimal,
    policy: OvertimePolicy,
    regular_hours: Decimal,
    overtime_hours: Decimal,
) -> AuditStep {
    let limit = match policy {
        OvertimePolicy::PerShift => format!("{} hour threshold", allowance.normalize()),
        OvertimePolicy::PerDay => format!(
            "{} regular hours remaining on {}",
            allowance.max(Decimal::ZERO).normalize(),
            shift.date
        ),
    };

    let reasoning = if overtime_hours > Decimal::ZERO {
        format!(
            "{} hours worked exceeds {} by {} hours, triggering overtime",
            hours.normalize(),
            limit,
            overtime_hours.normalize()
        )
    } else if hours == allowance {
        format!(
            "{} hours worked equals {}, no overtime triggered",
            hours.normalize(),
            limit
        )
    } else {
        format!(
            "{} hours worked is under {}, no overtime triggered",
            hours.normalize(),
            limit
        )
    };

    AuditStep {
        step_number,
        rule_id: "overtime_split".to_string(),
        rule_name: "Overtime Split".to_string(),
        input: serde_json::json!({
            "shift_id": shift.id,
            "hours": hours.normalize().to_string(),
            "allowance": allowance.normalize().to_string(),
            "policy": policy.as_str()
        }),
        output: serde_json::json!({
            "regular_hours": regular_hours.normalize().to_string(),
            "overtime_hours": overtime_hours.normalize().to_string()
        }),
        reasoning,
    }
}
