//! Hours breakdown models.
//!
//! This module contains [`HoursBreakdown`], the regular/overtime split of an
//! aggregation, and [`ShiftHoursLine`], its per-shift detail.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest tolerated gap between `regular + overtime` and `total`.
pub const HOURS_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Total hours split into regular and overtime portions.
///
/// # Example
///
/// ```
/// use payroll_engine::models::HoursBreakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = HoursBreakdown {
///     total_hours: Decimal::from_str("10.0").unwrap(),
///     regular_hours: Decimal::from_str("8.0").unwrap(),
///     overtime_hours: Decimal::from_str("2.0").unwrap(),
/// };
/// assert!(breakdown.is_consistent());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursBreakdown {
    /// Sum of all counted hours.
    pub total_hours: Decimal,
    /// Hours paid at the regular rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
}

impl HoursBreakdown {
    /// An empty breakdown.
    pub fn zero() -> Self {
        Self {
            total_hours: Decimal::ZERO,
            regular_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
        }
    }

    /// Adds one line's hours into the running totals.
    pub fn add_line(&mut self, line: &ShiftHoursLine) {
        self.total_hours += line.hours;
        self.regular_hours += line.regular_hours;
        self.overtime_hours += line.overtime_hours;
    }

    /// Returns true if `regular + overtime` matches `total` within [`HOURS_TOLERANCE`].
    pub fn is_consistent(&self) -> bool {
        (self.regular_hours + self.overtime_hours - self.total_hours).abs() <= HOURS_TOLERANCE
    }
}

/// Hours counted for a single shift within an aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftHoursLine {
    /// The ID of the shift this line came from.
    pub shift_id: String,
    /// The date of the shift.
    pub date: NaiveDate,
    /// Worked hours net of break.
    pub hours: Decimal,
    /// Portion of `hours` counted as regular.
    pub regular_hours: Decimal,
    /// Portion of `hours` counted as overtime.
    pub overtime_hours: Decimal,
}
