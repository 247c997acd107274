//! Wage configuration model.
//!
//! This module defines [`WageMode`] and [`WageConfig`], the pay basis an
//! employee's wage group assigns to them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default multiplier applied to the regular rate for overtime hours.
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

fn default_overtime_multiplier() -> Decimal {
    DEFAULT_OVERTIME_MULTIPLIER
}

/// How an employee's base pay is expressed.
///
/// # Example
///
/// ```
/// use payroll_engine::models::WageMode;
///
/// let mode: WageMode = serde_json::from_str("\"PER_SHIFT\"").unwrap();
/// assert_eq!(mode, WageMode::PerShift);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WageMode {
    /// Paid per hour worked.
    #[serde(alias = "HOURLY")]
    Hourly,
    /// Paid a flat amount per shift, converted to an hourly equivalent.
    #[serde(alias = "PER_SHIFT")]
    PerShift,
}

/// An employee's wage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageConfig {
    /// The pay basis.
    pub mode: WageMode,
    /// Rate per hour, used in [`WageMode::Hourly`].
    #[serde(default)]
    pub hourly_rate: Decimal,
    /// Flat rate per shift, used in [`WageMode::PerShift`].
    #[serde(default)]
    pub per_shift_rate: Decimal,
    /// Multiplier applied to the regular rate for overtime.
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: Decimal,
}

impl WageConfig {
    /// Creates an hourly wage configuration with the default overtime multiplier.
    pub fn hourly(rate: Decimal) -> Self {
        Self {
            mode: WageMode::Hourly,
            hourly_rate: rate,
            per_shift_rate: Decimal::ZERO,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }

    /// Creates a per-shift wage configuration with the default overtime multiplier.
    pub fn per_shift(rate: Decimal) -> Self {
        Self {
            mode: WageMode::PerShift,
            hourly_rate: Decimal::ZERO,
            per_shift_rate: rate,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_multiplier_constant() {
        assert_eq!(DEFAULT_OVERTIME_MULTIPLIER, dec("1.5"));
    }

    #[test]
    fn test_wage_mode_accepts_both_spellings() {
        let lower: WageMode = serde_json::from_str("\"hourly\"").unwrap();
        let upper: WageMode = serde_json::from_str("\"HOURLY\"").unwrap();
        assert_eq!(lower, WageMode::Hourly);
        assert_eq!(upper, WageMode::Hourly);

        let per_shift: WageMode = serde_json::from_str("\"per_shift\"").unwrap();
        assert_eq!(per_shift, WageMode::PerShift);
    }

    #[test]
    fn test_wage_mode_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&WageMode::PerShift).unwrap(),
            "\"per_shift\""
        );
    }

    #[test]
    fn test_deserialize_defaults_multiplier() {
        let json = r#"{"mode": "hourly", "hourly_rate": "20.00"}"#;
        let config: WageConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.hourly_rate, dec("20.00"));
        assert_eq!(config.per_shift_rate, Decimal::ZERO);
        assert_eq!(config.overtime_multiplier, dec("1.5"));
    }

    #[test]
    fn test_constructors() {
        let hourly = WageConfig::hourly(dec("20"));
        assert_eq!(hourly.mode, WageMode::Hourly);
        assert_eq!(hourly.overtime_multiplier, DEFAULT_OVERTIME_MULTIPLIER);

        let per_shift = WageConfig::per_shift(dec("160"));
        assert_eq!(per_shift.mode, WageMode::PerShift);
        assert_eq!(per_shift.per_shift_rate, dec("160"));
        assert_eq!(per_shift.hourly_rate, Decimal::ZERO);
    }
}
