//! User settings for fintrack
//!
//! Display preferences, report defaults and chart palettes.

use serde::{Deserialize, Serialize};

use super::paths::FintrackPaths;
use crate::error::FintrackError;
use crate::models::dates::is_valid_date_format;
use crate::reports::dashboard::{DEFAULT_RECENT_BUDGETS, DEFAULT_RECENT_TRANSACTIONS};
use crate::reports::financial::DEFAULT_RANGE_MONTHS;
use crate::reports::{DashboardBuilder, Palettes, ReportBuilder};

/// User settings for fintrack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Trailing months covered by `report` when `--months` is not given
    #[serde(default = "default_range_months")]
    pub default_range_months: u32,

    /// Transactions listed on the dashboard
    #[serde(default = "default_recent_transactions")]
    pub recent_transactions_limit: usize,

    /// Budgets listed on the dashboard
    #[serde(default = "default_recent_budgets")]
    pub recent_budgets_limit: usize,

    /// Chart colors per transaction kind
    #[serde(default)]
    pub palettes: Palettes,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_range_months() -> u32 {
    DEFAULT_RANGE_MONTHS
}

fn default_recent_transactions() -> usize {
    DEFAULT_RECENT_TRANSACTIONS
}

fn default_recent_budgets() -> usize {
    DEFAULT_RECENT_BUDGETS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_range_months: default_range_months(),
            recent_transactions_limit: default_recent_transactions(),
            recent_budgets_limit: default_recent_budgets(),
            palettes: Palettes::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, FintrackError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            tracing::debug!(path = %settings_path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FintrackError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| FintrackError::Config(format!("Failed to parse settings file: {}", e)))?;
        settings.validate()?;

        tracing::debug!(path = %settings_path.display(), "loaded settings");
        Ok(settings)
    }

    /// Check the values serde cannot check on its own
    pub fn validate(&self) -> Result<(), FintrackError> {
        if !is_valid_date_format(&self.date_format) {
            return Err(FintrackError::Config(format!(
                "Invalid date_format '{}' in settings file",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), FintrackError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FintrackError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FintrackError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Report builder using these palettes and the default range
    pub fn report_builder(&self) -> ReportBuilder<'_> {
        ReportBuilder::new(&self.palettes).range_months(self.default_range_months)
    }

    /// Dashboard builder using these palettes and list limits
    pub fn dashboard_builder(&self) -> DashboardBuilder<'_> {
        DashboardBuilder::new(&self.palettes)
            .recent_transactions(self.recent_transactions_limit)
            .recent_budgets(self.recent_budgets_limit)
    }
}
