//! Core data models for the payroll engine.
//!
//! This module contains the domain models used throughout the engine.

mod audit;
mod hours;
mod pay_period;
mod payroll_entry;
mod shift;
mod wage;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use hours::{HOURS_TOLERANCE, HoursBreakdown, ShiftHoursLine};
pub use pay_period::PayPeriod;
pub use payroll_entry::{AdjustmentKind, PayAdjustment, PayrollComputationResult, PayrollEntry};
pub use shift::ShiftInterval;
pub use wage::{DEFAULT_OVERTIME_MULTIPLIER, WageConfig, WageMode};
