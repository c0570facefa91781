//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the user
//! profile and engine settings from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineSettings, Profile, WagebookConfig};

/// Loads and provides access to the application configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides access to the user profile and the engine settings.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/
/// ├── profile.yaml   # User profile and default rate (required)
/// └── settings.yaml  # Engine settings (optional, defaults apply)
/// ```
///
/// # Example
///
/// ```no_run
/// use wagebook::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
///
/// println!("Employee: {}", loader.profile().employee_name);
/// println!("Page size: {}", loader.settings().page_size);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: WagebookConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `profile.yaml` is missing
    /// - Any present file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// A missing `settings.yaml` is not an error; the default settings
    /// apply.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use wagebook::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config")?;
    /// # Ok::<(), wagebook::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let profile_path = path.join("profile.yaml");
        let profile = Self::load_yaml::<Profile>(&profile_path)?;

        // settings.yaml is optional
        let settings_path = path.join("settings.yaml");
        let settings = if settings_path.exists() {
            Self::load_yaml::<EngineSettings>(&settings_path)?
        } else {
            EngineSettings::default()
        };

        Ok(Self {
            config: WagebookConfig { profile, settings },
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

    /// Returns the assembled configuration.
    pub fn config(&self) -> &WagebookConfig {
        &self.config
    }

    /// Returns the user profile.
    pub fn profile(&self) -> &Profile {
        &self.config.profile
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.config.settings
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> WagebookConfig {
        self.config
    }
}
