//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configurations from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::calculation::PayrollSettings;
use crate::error::{EngineError, EngineResult};
use crate::models::WageConfig;

use super::types::{EngineSettings, PayrollConfig, WageGroup, WageGroupsConfig};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── payroll.yaml      # Threshold, overtime policy, default multiplier
/// └── wage_groups.yaml  # Named wage groups
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let wage = loader.wage_config("front_desk")?;
/// println!("Front desk rate: ${}", wage.hourly_rate);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if either file is missing
    /// - `ConfigParseError` if a file is not valid YAML or holds an invalid value
    ///   (negative rate, non-positive threshold or multiplier)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings_path = path.join("payroll.yaml");
        let settings = Self::load_yaml::<EngineSettings>(&settings_path)?;
        Self::validate_settings(&settings, &settings_path.display().to_string())?;

        let wage_groups_path = path.join("wage_groups.yaml");
        let wage_groups = Self::load_yaml::<WageGroupsConfig>(&wage_groups_path)?;
        Self::validate_wage_groups(&wage_groups, &wage_groups_path.display().to_string())?;

        info!(
            path = %path.display(),
            wage_groups = wage_groups.wage_groups.len(),
            regular_hours_per_day = %settings.regular_hours_per_day,
            "Loaded payroll configuration"
        );

        Ok(Self {
            config: PayrollConfig::new(settings, wage_groups.wage_groups),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_settings(settings: &EngineSettings, path: &str) -> EngineResult<()> {
        if settings.regular_hours_per_day <= Decimal::ZERO {
            return Err(EngineError::ConfigParseError {
                path: path.to_string(),
                message: format!(
                    "regular_hours_per_day must be positive, got {}",
                    settings.regular_hours_per_day
                ),
            });
        }
        if settings.default_overtime_multiplier <= Decimal::ZERO {
            return Err(EngineError::ConfigParseError {
                path: path.to_string(),
                message: format!(
                    "default_overtime_multiplier must be positive, got {}",
                    settings.default_overtime_multiplier
                ),
            });
        }
        Ok(())
    }

    fn validate_wage_groups(groups: &WageGroupsConfig, path: &str) -> EngineResult<()> {
        for (code, group) in &groups.wage_groups {
            let invalid = if group.hourly_rate < Decimal::ZERO {
                Some("hourly_rate must not be negative")
            } else if group.per_shift_rate < Decimal::ZERO {
                Some("per_shift_rate must not be negative")
            } else if group
                .overtime_multiplier
                .is_some_and(|m| m <= Decimal::ZERO)
            {
                Some("overtime_multiplier must be positive")
            } else {
                None
            };

            if let Some(message) = invalid {
                return Err(EngineError::ConfigParseError {
                    path: path.to_string(),
                    message: format!("wage group '{}': {}", code, message),
                });
            }
        }
        Ok(())
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the settings a payroll computation runs with.
    pub fn settings(&self) -> PayrollSettings {
        self.config.payroll_settings()
    }

    /// Gets a wage group by its code.
    ///
    /// Returns `WageGroupNotFound` if no group has that code.
    pub fn get_wage_group(&self, code: &str) -> EngineResult<&WageGroup> {
        self.config
            .wage_groups()
            .get(code)
            .ok_or_else(|| EngineError::WageGroupNotFound {
                code: code.to_string(),
            })
    }

    /// Resolves a wage group code to a [`WageConfig`], applying the default
    /// overtime multiplier where the group sets none.
    pub fn wage_config(&self, code: &str) -> EngineResult<WageConfig> {
        let group = self.get_wage_group(code)?;
        Ok(group.to_wage_config(self.config.settings().default_overtime_multiplier))
    }

    /// Returns all wage group codes in sorted order.
    pub fn wage_group_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self
            .config
            .wage_groups()
            .keys()
            .map(String::as_str)
            .collect();
        codes.sort_unstable();
        codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::OvertimePolicy;
    use crate::models::WageMode;
    use std::path::PathBuf;
    use std::str::FromStr;
    use uuid::Uuid;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn write_config_dir(payroll_yaml: &str, wage_groups_yaml: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("payroll-engine-test-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("payroll.yaml"), payroll_yaml).unwrap();
        fs::write(dir.join("wage_groups.yaml"), wage_groups_yaml).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        let settings = loader.settings();
        assert_eq!(settings.regular_hours_per_day, dec("8"));
        assert_eq!(settings.overtime_policy, OvertimePolicy::PerShift);
    }

    #[test]
    fn test_get_wage_group() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let group = loader.get_wage_group("front_desk").unwrap();
        assert_eq!(group.name, "Front Desk");
        assert_eq!(group.mode, WageMode::Hourly);
        assert_eq!(group.hourly_rate, dec("20.00"));
    }

    #[test]
    fn test_get_wage_group_unknown_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.get_wage_group("unknown") {
            Err(EngineError::WageGroupNotFound { code }) => assert_eq!(code, "unknown"),
            other => panic!("Expected WageGroupNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_wage_config_applies_default_multiplier() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let wage = loader.wage_config("front_desk").unwrap();
        assert_eq!(wage.overtime_multiplier, dec("1.5"));
    }

    #[test]
    fn test_wage_config_per_shift_group() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let wage = loader.wage_config("event_crew").unwrap();
        assert_eq!(wage.mode, WageMode::PerShift);
        assert_eq!(wage.per_shift_rate, dec("160.00"));
        assert_eq!(wage.overtime_multiplier, dec("2.0"));
    }

    #[test]
    fn test_wage_group_codes_sorted() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let codes = loader.wage_group_codes();

        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
        assert!(codes.contains(&"front_desk"));
        assert!(codes.contains(&"event_crew"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(EngineError::ConfigNotFound { path }) => assert!(path.contains("payroll.yaml")),
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = write_config_dir("regular_hours_per_day: [oops", "wage_groups: {}");
        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).unwrap();

        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_non_positive_threshold_rejected() {
        let dir = write_config_dir("regular_hours_per_day: 0", "wage_groups: {}");
        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).unwrap();

        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("regular_hours_per_day"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_wage_group_rate_rejected() {
        let wage_groups = r#"
wage_groups:
  broken:
    name: Broken
    mode: hourly
    hourly_rate: -3
"#;
        let dir = write_config_dir("{}", wage_groups);
        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).unwrap();

        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("broken"));
                assert!(message.contains("hourly_rate"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_per_day_policy_loaded() {
        let dir = write_config_dir(
            "regular_hours_per_day: 7.5\novertime_policy: per_day",
            "wage_groups: {}",
        );
        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).unwrap();

        let settings = result.unwrap().settings();
        assert_eq!(settings.regular_hours_per_day, dec("7.5"));
        assert_eq!(settings.overtime_policy, OvertimePolicy::PerDay);
    }
}
