//! Configuration management for breaktime.
//!
//! Settings are stored as pretty-printed JSON in `config.json` inside the
//! per-user data directory (see [`DataStorage`]). Each module is optional.
//! A missing module falls back to its defaults and a missing file means
//! "all defaults".
//!
//! ## Modules
//!
//! - **Report**: page size, page bar width, live refresh cadence and the
//!   overdue threshold for running breaks
//! - **Source**: the default input document used when `--input` is omitted
//!
//! ```rust,no_run
//! use breaktime::libs::config::Config;
//!
//! let config = Config::read()?;
//! let report = config.report_settings();
//! println!("{} employees per page", report.page_size);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::pagination::{is_valid_max_visible, DEFAULT_MAX_VISIBLE};
use crate::libs::status::LIVE_REFRESH_INTERVAL;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Report and live-status settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReportConfig {
    /// Employees per page in list views.
    pub page_size: usize,

    /// Page numbers shown in the page bar, ellipses not counted.
    pub max_visible_pages: usize,

    /// Seconds between refreshes of the live status view.
    pub refresh_interval: u64,

    /// Minutes after which a running break without a reported status is shown
    /// as overdue.
    pub overdue_after: u64,
}

impl Default for ReportConfig {
    /// - 20 employees per page
    /// - 7 page numbers in the page bar
    /// - 30 second live refresh
    /// - breaks overdue after 60 minutes
    fn default() -> Self {
        ReportConfig {
            page_size: 20,
            max_visible_pages: DEFAULT_MAX_VISIBLE,
            refresh_interval: LIVE_REFRESH_INTERVAL.as_secs(),
            overdue_after: 60,
        }
    }
}

impl ReportConfig {
    pub fn overdue_after(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.overdue_after as i64)
    }

    pub fn refresh_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.refresh_interval.max(1))
    }

    /// Rejects a zero page size and page bar widths that would break the window.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            msg_bail_anyhow!(Message::InvalidPageSize(self.page_size));
        }
        if !is_valid_max_visible(self.max_visible_pages) {
            msg_bail_anyhow!(Message::InvalidMaxVisiblePages(self.max_visible_pages));
        }
        Ok(())
    }
}

/// Where break data is read from when no input is given on the command line.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct SourceConfig {
    /// Path to a JSON document produced by the backend export.
    pub path: String,
}

/// Root configuration.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceConfig>,
}

impl Config {
    /// Reads `config.json`, or returns defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or if
    /// its report settings fail [`ReportConfig::validate`].
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).with_context(|| Message::ConfigParseError.to_string())?;
        if let Some(report) = &config.report {
            report.validate()?;
        }
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Report settings, defaulted when the module is not configured.
    pub fn report_settings(&self) -> ReportConfig {
        self.report.clone().unwrap_or_default()
    }

    /// The configured default input document, if any.
    pub fn source_path(&self) -> Option<PathBuf> {
        self.source
            .as_ref()
            .map(|s| s.path.trim())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    }

    /// Interactive setup wizard, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "report".to_string(),
                name: "Report".to_string(),
            },
            ConfigModule {
                key: "source".to_string(),
                name: "Data source".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "report" => {
                    let default = config.report_settings();
                    msg_print!(Message::ConfigModuleReport);
                    config.report = Some(ReportConfig {
                        page_size: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptPageSize.to_string())
                            .default(default.page_size)
                            .validate_with(|size: &usize| match *size {
                                0 => Err(Message::InvalidPageSize(*size).to_string()),
                                _ => Ok(()),
                            })
                            .interact_text()?,
                        max_visible_pages: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptMaxVisiblePages.to_string())
                            .default(default.max_visible_pages)
                            .validate_with(|max: &usize| {
                                if is_valid_max_visible(*max) {
                                    Ok(())
                                } else {
                                    Err(Message::InvalidMaxVisiblePages(*max).to_string())
                                }
                            })
                            .interact_text()?,
                        refresh_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptRefreshInterval.to_string())
                            .default(default.refresh_interval)
                            .interact_text()?,
                        overdue_after: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptOverdueAfter.to_string())
                            .default(default.overdue_after)
                            .interact_text()?,
                    });
                }
                "source" => {
                    let default = config.source.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleSource);
                    config.source = Some(SourceConfig {
                        path: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptSourcePath.to_string())
                            .default(default.path)
                            .allow_empty(true)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
