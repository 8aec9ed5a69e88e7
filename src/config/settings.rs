//! User settings for Haven
//!
//! Manages display preferences and the calculation policy.

use serde::{Deserialize, Serialize};

use super::paths::HavenPaths;
use super::policy::Policy;
use crate::error::HavenError;

/// User settings for Haven
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for stash entries (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Note attached to every stash deposit
    #[serde(default = "default_deposit_note")]
    pub deposit_note: String,

    /// Ratios and cost figures used by the calculators
    #[serde(default)]
    pub policy: Policy,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_date_format() -> String {
    "%-d.%-m.%Y".to_string()
}

fn default_deposit_note() -> String {
    "Manual deposit".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            deposit_note: default_deposit_note(),
            policy: Policy::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &HavenPaths) -> Result<Self, HavenError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| HavenError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| HavenError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.policy.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &HavenPaths) -> Result<(), HavenError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| HavenError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| HavenError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Format an amount with the configured currency symbol
    pub fn format_amount(&self, amount: f64) -> String {
        crate::display::format_money(&self.currency_symbol, amount)
    }
}
