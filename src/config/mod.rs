//! Configuration loading and management for the Time-and-Wage Accounting
//! Engine.
//!
//! This module provides functionality to load the application configuration
//! from YAML files: the user profile (including the default hourly rate
//! snapshot applied to new records) and the engine display settings.
//!
//! # Example
//!
//! ```no_run
//! use wagebook::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Default rate: {}", config.profile().default_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineSettings, Profile, WagebookConfig};
