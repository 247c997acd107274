//! Shift hours and wage computation engine.
//!
//! This crate turns recorded work shifts into payroll entries: it measures
//! the hours of each shift (including shifts that cross midnight and break
//! deductions), splits them into regular and overtime hours against a daily
//! threshold, resolves hourly or per-shift wage rates, and applies bonuses and
//! deductions. Every step is recorded in an audit trace.
//!
//! # Example
//!
//! ```
//! use payroll_engine::calculation::{PayrollInput, PayrollSettings, compute_payroll_entry};
//! use payroll_engine::models::{PayPeriod, ShiftInterval, WageConfig};
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//!
//! let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
//! let input = PayrollInput {
//!     employee_id: "emp_001".to_string(),
//!     period: PayPeriod { start_date: date, end_date: date },
//!     wage: WageConfig::hourly(Decimal::from(20)),
//!     shifts: vec![ShiftInterval {
//!         id: "shift_001".to_string(),
//!         date,
//!         start_time: "22:00".to_string(),
//!         end_time: Some("08:00".to_string()),
//!         break_start: None,
//!         break_end: None,
//!         approved: true,
//!     }],
//!     adjustments: vec![],
//! };
//!
//! let entry = compute_payroll_entry(&input, &PayrollSettings::default()).unwrap();
//! assert_eq!(entry.hours.total_hours, Decimal::from(10));
//! assert_eq!(entry.hours.overtime_hours, Decimal::from(2));
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
