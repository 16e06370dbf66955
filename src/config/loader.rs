//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the labour
//! policy and authoritative holiday tables from YAML files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, HolidayTableConfig, TimePolicy};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── policy.yaml          # Labour-time policy
/// └── holidays/            # Optional hand-authored tables
///     └── 2027.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Standard day: {} minutes", loader.policy().standard_day_minutes);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `policy.yaml` is missing or invalid, or if any
    /// file under `holidays/` fails to parse or validate. A missing
    /// `holidays/` directory is not an error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use attendance_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), attendance_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy = Self::load_yaml::<TimePolicy>(&path.join("policy.yaml"))?;
        policy.validate()?;

        let holiday_tables = Self::load_holiday_tables(&path.join("holidays"))?;

        debug!(
            path = %path.display(),
            tables = holiday_tables.len(),
            "Loaded engine configuration"
        );

        Ok(Self {
            config: EngineConfig::new(policy, holiday_tables),
        })
    }

    /// Wraps an already-built policy with no extra holiday tables.
    pub fn from_policy(policy: TimePolicy) -> EngineResult<Self> {
        policy.validate()?;
        Ok(Self {
            config: EngineConfig::new(policy, BTreeMap::new()),
        })
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

    /// Loads every `*.yaml` table from the holidays directory.
    fn load_holiday_tables(
        dir: &Path,
    ) -> EngineResult<BTreeMap<i32, BTreeMap<chrono::NaiveDate, String>>> {
        let mut tables = BTreeMap::new();
        if !dir.exists() {
            return Ok(tables);
        }

        let dir_str = dir.display().to_string();
        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let table = Self::load_yaml::<HolidayTableConfig>(&path)?;
                table.validate()?;
                if tables.insert(table.year, table.holidays).is_some() {
                    return Err(EngineError::InvalidHolidayTable {
                        year: table.year,
                        message: format!("declared more than once (again in {})", path.display()),
                    });
                }
            }
        }

        Ok(tables)
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the labour-time policy.
    pub fn policy(&self) -> &TimePolicy {
        self.config.policy()
    }
}
