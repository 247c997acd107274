//! Shift model.
//!
//! This module defines the [`ShiftInterval`] struct: one employee's worked (or
//! in-progress) interval on a calendar date, as recorded by the punch clock.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

fn default_approved() -> bool {
    true
}

/// Represents a shift with wall-clock start/end times and an optional break.
///
/// Start and end are `HH:MM` strings as stored by the scheduling system. They
/// are validated when hours are computed, not on deserialization, so a bad
/// record surfaces as an `InvalidInput` error naming the offending field.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::ShiftInterval;
/// use chrono::NaiveDate;
///
/// let shift = ShiftInterval {
///     id: "shift_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     start_time: "09:00".to_string(),
///     end_time: None,
///     break_start: None,
///     break_end: None,
///     approved: true,
/// };
/// assert!(shift.is_open());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInterval {
    /// Unique identifier for the shift.
    pub id: String,
    /// The calendar date the shift starts on.
    pub date: NaiveDate,
    /// The start time of the shift (`HH:MM`, 24-hour).
    pub start_time: String,
    /// The end time of the shift (`HH:MM`, 24-hour), absent while still punched in.
    #[serde(default)]
    pub end_time: Option<String>,
    /// The start of the break, if one was taken.
    #[serde(default)]
    pub break_start: Option<NaiveDateTime>,
    /// The end of the break, if one was taken.
    #[serde(default)]
    pub break_end: Option<NaiveDateTime>,
    /// Whether a manager approved the shift for payroll.
    #[serde(default = "default_approved")]
    pub approved: bool,
}

impl ShiftInterval {
    /// Returns true if the shift has no end time yet.
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    /// Returns the break window when both ends of it are recorded.
    ///
    /// A half-recorded break yields `None` and is not deducted.
    pub fn break_window(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match (self.break_start, self.break_end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}
