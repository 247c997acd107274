//! Shift hours calculation.
//!
//! This module computes the worked hours of a single shift from its `HH:MM`
//! start and end times and optional break window. A shift whose end time is
//! earlier than its start time is taken to finish on the next calendar day.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, ShiftInterval};

use super::rounding::round_half_up;
use super::time_of_day::{MINUTES_PER_DAY, parse_time_of_day};

/// Raw minute counts behind a shift's worked hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ShiftMeasurement {
    raw_minutes: i64,
    break_minutes: i64,
    crosses_midnight: bool,
}

impl ShiftMeasurement {
    fn measure(
        start_time: &str,
        end_time: &str,
        break_start: Option<NaiveDateTime>,
        break_end: Option<NaiveDateTime>,
    ) -> EngineResult<Self> {
        let start_minutes = parse_time_of_day("start_time", start_time)?;
        let mut end_minutes = parse_time_of_day("end_time", end_time)?;

        let crosses_midnight = end_minutes < start_minutes;
        if crosses_midnight {
            end_minutes += MINUTES_PER_DAY;
        }
        let raw_minutes = i64::from(end_minutes - start_minutes);

        let break_minutes = match (break_start, break_end) {
            (Some(start), Some(end)) => {
                let minutes = (end - start).num_minutes();
                if minutes < 0 {
                    return Err(EngineError::invalid_input(
                        "break_end",
                        format!("break ends at {} before it starts at {}", end, start),
                    ));
                }
                minutes
            }
            _ => 0,
        };

        Ok(Self {
            raw_minutes,
            break_minutes,
            crosses_midnight,
        })
    }

    fn net_minutes(&self) -> i64 {
        (self.raw_minutes - self.break_minutes).max(0)
    }

    fn break_exceeds_shift(&self) -> bool {
        self.break_minutes > self.raw_minutes
    }

    fn hours(&self) -> Decimal {
        round_half_up(Decimal::from(self.net_minutes()) / Decimal::from(60))
    }
}

/// Computes the worked hours between two `HH:MM` times, net of break.
///
/// - An end time earlier than the start time wraps to the next day.
/// - The break is deducted only when both `break_start` and `break_end` are present.
/// - A break longer than the shift yields zero hours, never a negative value.
/// - The result is rounded half-up to two decimal places.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if either time is not a valid `HH:MM`
/// string, or if `break_end` is before `break_start`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // Crosses midnight
/// let hours = compute_hours("22:00", "01:00", None, None).unwrap();
/// assert_eq!(hours, Decimal::from_str("3").unwrap());
/// ```
pub fn compute_hours(
    start_time: &str,
    end_time: &str,
    break_start: Option<NaiveDateTime>,
    break_end: Option<NaiveDateTime>,
) -> EngineResult<Decimal> {
    Ok(ShiftMeasurement::measure(start_time, end_time, break_start, break_end)?.hours())
}

/// Prefixes an `InvalidInput` message with the shift it came from.
pub(super) fn tag_shift_error(shift_id: &str, err: EngineError) -> EngineError {
    match err {
        EngineError::InvalidInput { field, message } => EngineError::InvalidInput {
            field,
            message: format!("shift '{}': {}", shift_id, message),
        },
        other => other,
    }
}

/// The hours worked on one shift, with the audit step documenting them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftHoursResult {
    /// The ID of the measured shift.
    pub shift_id: String,
    /// Worked hours net of break.
    pub hours: Decimal,
    /// Whether the end time wrapped past midnight.
    pub crosses_midnight: bool,
    /// Break minutes deducted.
    pub break_minutes: i64,
    /// Whether the break outlasted the shift and hours were clamped to zero.
    pub break_exceeds_shift: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the worked hours for a completed [`ShiftInterval`].
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if the shift is still open, or for
/// any error [`compute_hours`] reports. The message names the shift.
pub fn calculate_shift_hours(
    shift: &ShiftInterval,
    step_number: u32,
) -> EngineResult<ShiftHoursResult> {
    let with_shift_id = |err: EngineError| tag_shift_error(&shift.id, err);

    let end_time = shift.end_time.as_deref().ok_or_else(|| {
        with_shift_id(EngineError::invalid_input(
            "end_time",
            "shift is still open and has no end time",
        ))
    })?;

    let (break_start, break_end) = match shift.break_window() {
        Some((start, end)) => (Some(start), Some(end)),
        None => (None, None),
    };

    let measurement = ShiftMeasurement::measure(&shift.start_time, end_time, break_start, break_end)
        .map_err(with_shift_id)?;
    let hours = measurement.hours();

    if measurement.break_exceeds_shift() {
        debug!(
            shift_id = %shift.id,
            raw_minutes = measurement.raw_minutes,
            break_minutes = measurement.break_minutes,
            "Break exceeds shift span, clamping hours to zero"
        );
    }

    let mut reasoning = format!(
        "{} to {} is {} minutes",
        shift.start_time, end_time, measurement.raw_minutes
    );
    if measurement.crosses_midnight {
        reasoning.push_str(" (ends the next day)");
    }
    if measurement.break_minutes > 0 {
        reasoning.push_str(&format!(
            ", less {} minutes break",
            measurement.break_minutes
        ));
    }
    if measurement.break_exceeds_shift() {
        reasoning.push_str(", break exceeds shift so hours are clamped to 0");
    }
    reasoning.push_str(&format!(" = {} hours", hours.normalize()));

    let audit_step = AuditStep {
        step_number,
        rule_id: "shift_hours".to_string(),
        rule_name: "Shift Hours".to_string(),
        input: serde_json::json!({
            "shift_id": shift.id,
            "date": shift.date.to_string(),
            "start_time": shift.start_time,
            "end_time": end_time,
            "break_start": break_start.map(|t| t.to_string()),
            "break_end": break_end.map(|t| t.to_string())
        }),
        output: serde_json::json!({
            "raw_minutes": measurement.raw_minutes,
            "break_minutes": measurement.break_minutes,
            "crosses_midnight": measurement.crosses_midnight,
            "hours": hours.normalize().to_string()
        }),
        reasoning,
    };

    Ok(ShiftHoursResult {
        shift_id: shift.id.clone(),
        hours,
        crosses_midnight: measurement.crosses_midnight,
        break_minutes: measurement.break_minutes,
        break_exceeds_shift: measurement.break_exceeds_shift(),
        audit_step,
    })
}
