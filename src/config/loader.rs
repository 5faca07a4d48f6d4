//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::ValidationConfig;

/// Loads the engine configuration from YAML.
///
/// # File structure
///
/// ```text
/// config/validation.yaml
/// ├── thresholds        # annual threshold schedule
/// └── windows           # assessment windows and record counts
/// ```
///
/// Either section may be omitted, in which case the compiled-in defaults
/// apply.
///
/// # Example
///
/// ```no_run
/// use income_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/validation.yaml").unwrap();
/// assert_eq!(config.windows.cat_b_days, 366);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file cannot be read
    /// and [`EngineError::ConfigParseError`] when it is not valid YAML for
    /// the configuration structure.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<ValidationConfig> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
