//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load payroll configurations from YAML
//! files: the regular-hours threshold, the overtime policy, and the named wage
//! groups employees are assigned to.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Wage groups: {:?}", config.wage_group_codes());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineSettings, PayrollConfig, WageGroup, WageGroupsConfig};
