//! Configuration types for the wage accounting application.
//!
//! This module contains the strongly-typed configuration structures that are
//! deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::CHART_WINDOW;
use crate::models::DEFAULT_PAGE_SIZE;

/// The user profile printed on statements and applied to new records.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    /// The employee's display name.
    pub employee_name: String,
    /// The employee's role or title.
    pub employee_role: String,
    /// The employee identifier printed on statements.
    pub employee_id: String,
    /// The company name printed on statements.
    pub company_name: String,
    /// The company address printed on statements.
    pub company_address: String,
    /// The default hourly rate snapshotted onto records created without an
    /// explicit rate.
    pub default_rate: Decimal,
    /// Optional monthly earnings target for dashboard views.
    #[serde(default)]
    pub monthly_target: Option<Decimal>,
}

/// Tunable engine settings with reference-behavior defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// Records per page in listings.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Records in the recent-wage chart window.
    #[serde(default = "default_chart_window")]
    pub chart_window: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_chart_window() -> usize {
    CHART_WINDOW
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            chart_window: default_chart_window(),
        }
    }
}

/// The assembled application configuration.
#[derive(Debug, Clone)]
pub struct WagebookConfig {
    /// The user profile.
    pub profile: Profile,
    /// The engine settings.
    pub settings: EngineSettings,
}
