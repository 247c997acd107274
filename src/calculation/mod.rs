//! Calculation logic for the payroll engine.
//!
//! This module contains the pure functions that turn shift records into pay:
//! time-of-day parsing with the midnight wrap, per-shift worked hours net of
//! break, aggregation into regular and overtime hours, wage rate resolution,
//! and the payroll entry pipeline that composes them.

mod hours_aggregation;
mod payroll_entry;
mod rounding;
mod shift_hours;
mod time_of_day;
mod wage_rate;

pub use hours_aggregation::{
    DEFAULT_REGULAR_HOURS_PER_DAY, HoursAggregation, OvertimePolicy, aggregate_hours,
    aggregate_hours_with_policy, split_regular_overtime,
};
pub use payroll_entry::{ENGINE_VERSION, PayrollInput, PayrollSettings, compute_payroll_entry};
pub use rounding::{DECIMAL_PLACES, round_half_up};
pub use shift_hours::{ShiftHoursResult, calculate_shift_hours, compute_hours};
pub use time_of_day::{MINUTES_PER_DAY, parse_time_of_day};
pub use wage_rate::{WageRateResolution, resolve_wage_rates};
