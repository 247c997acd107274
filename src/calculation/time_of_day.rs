//! Time-of-day parsing.
//!
//! Shift start and end times arrive as `HH:MM` wall-clock strings. This module
//! converts them to minutes since midnight.

use chrono::{NaiveTime, Timelike};

use crate::error::{EngineError, EngineResult};

/// Minutes in one calendar day, added to an end time that falls before its start.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Parses an `HH:MM` (24-hour) time into minutes since midnight.
///
/// `field` names the value in the error returned for malformed input.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::parse_time_of_day;
///
/// assert_eq!(parse_time_of_day("start_time", "09:30").unwrap(), 570);
/// assert_eq!(parse_time_of_day("end_time", "23:59").unwrap(), 1439);
/// assert!(parse_time_of_day("end_time", "24:00").is_err());
/// ```
pub fn parse_time_of_day(field: &str, value: &str) -> EngineResult<u32> {
    let time = NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|e| {
        EngineError::invalid_input(
            field,
            format!("'{}' is not a valid HH:MM time: {}", value, e),
        )
    })?;

    Ok(time.hour() * 60 + time.minute())
}
