//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::calculation::{DEFAULT_REGULAR_HOURS_PER_DAY, OvertimePolicy, PayrollSettings};
use crate::models::{DEFAULT_OVERTIME_MULTIPLIER, WageConfig, WageMode};

fn default_regular_hours_per_day() -> Decimal {
    DEFAULT_REGULAR_HOURS_PER_DAY
}

fn default_overtime_multiplier() -> Decimal {
    DEFAULT_OVERTIME_MULTIPLIER
}

/// Engine settings from `payroll.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// Regular hours per day before overtime applies.
    #[serde(default = "default_regular_hours_per_day")]
    pub regular_hours_per_day: Decimal,
    /// How the daily threshold is applied.
    #[serde(default)]
    pub overtime_policy: OvertimePolicy,
    /// Overtime multiplier for wage groups that do not set their own.
    #[serde(default = "default_overtime_multiplier")]
    pub default_overtime_multiplier: Decimal,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            regular_hours_per_day: DEFAULT_REGULAR_HOURS_PER_DAY,
            overtime_policy: OvertimePolicy::default(),
            default_overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }
}

/// A named wage group employees are assigned to.
#[derive(Debug, Clone, Deserialize)]
pub struct WageGroup {
    /// The human-readable name of the wage group.
    pub name: String,
    /// A description of the wage group.
    #[serde(default)]
    pub description: String,
    /// The pay basis.
    pub mode: WageMode,
    /// Rate per hour, for hourly groups.
    #[serde(default)]
    pub hourly_rate: Decimal,
    /// Flat rate per shift, for per-shift groups.
    #[serde(default)]
    pub per_shift_rate: Decimal,
    /// Overtime multiplier; falls back to the engine default when absent.
    #[serde(default)]
    pub overtime_multiplier: Option<Decimal>,
}

impl WageGroup {
    /// Builds the [`WageConfig`] for this group.
    pub fn to_wage_config(&self, default_overtime_multiplier: Decimal) -> WageConfig {
        WageConfig {
            mode: self.mode,
            hourly_rate: self.hourly_rate,
            per_shift_rate: self.per_shift_rate,
            overtime_multiplier: self
                .overtime_multiplier
                .unwrap_or(default_overtime_multiplier),
        }
    }
}

/// Wage groups configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct WageGroupsConfig {
    /// Map of wage group code to wage group details.
    pub wage_groups: HashMap<String, WageGroup>,
}

/// The complete payroll configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    settings: EngineSettings,
    wage_groups: HashMap<String, WageGroup>,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(settings: EngineSettings, wage_groups: HashMap<String, WageGroup>) -> Self {
        Self {
            settings,
            wage_groups,
        }
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the settings a payroll computation runs with.
    pub fn payroll_settings(&self) -> PayrollSettings {
        PayrollSettings {
            regular_hours_per_day: self.settings.regular_hours_per_day,
            overtime_policy: self.settings.overtime_policy,
        }
    }

    /// Returns all wage groups.
    pub fn wage_groups(&self) -> &HashMap<String, WageGroup> {
        &self.wage_groups
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
    fn test_engine_settings_defaults() {
        let settings: EngineSettings = serde_yaml::from_str("{}").unwrap();
        assert_eq!(settings.regular_hours_per_day, dec("8"));
        assert_eq!(settings.overtime_policy, OvertimePolicy::PerShift);
        assert_eq!(settings.default_overtime_multiplier, dec("1.5"));
    }

    #[test]
    fn test_engine_settings_parse() {
        let yaml = r#"
regular_hours_per_day: 7.6
overtime_policy: per_day
default_overtime_multiplier: 2.0
"#;
        let settings: EngineSettings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.regular_hours_per_day, dec("7.6"));
        assert_eq!(settings.overtime_policy, OvertimePolicy::PerDay);
        assert_eq!(settings.default_overtime_multiplier, dec("2.0"));
    }

    #[test]
    fn test_wage_group_falls_back_to_default_multiplier() {
        let yaml = r#"
name: Kitchen Staff
mode: hourly
hourly_rate: 18.50
"#;
        let group: WageGroup = serde_yaml::from_str(yaml).unwrap();
        let wage = group.to_wage_config(dec("1.5"));
        assert_eq!(wage.mode, WageMode::Hourly);
        assert_eq!(wage.hourly_rate, dec("18.50"));
        assert_eq!(wage.overtime_multiplier, dec("1.5"));
    }

    #[test]
    fn test_wage_group_own_multiplier_wins() {
        let yaml = r#"
name: Event Crew
mode: PER_SHIFT
per_shift_rate: 200
overtime_multiplier: 2
"#;
        let group: WageGroup = serde_yaml::from_str(yaml).unwrap();
        let wage = group.to_wage_config(dec("1.5"));
        assert_eq!(wage.mode, WageMode::PerShift);
        assert_eq!(wage.overtime_multiplier, dec("2"));
    }

    #[test]
    fn test_payroll_settings_from_config() {
        let config = PayrollConfig::new(EngineSettings::default(), HashMap::new());
        assert_eq!(config.payroll_settings(), PayrollSettings::default());
    }
}
