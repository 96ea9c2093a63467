//! Configuration management for harvestlog.
//!
//! Settings live in `config.json` inside the data directory resolved by
//! [`DataStorage`]. Every module is optional; a missing module means "use
//! the defaults". The backend URL can also be overridden per process with
//! `HARVESTLOG_API_URL` (a `.env` file in the working directory is loaded
//! first).
//!
//! ```rust,no_run
//! use harvestlog::libs::config::Config;
//!
//! let config = Config::read()?;
//! let backend = config.backend_config();
//! println!("talking to {}", backend.api_url);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::ledger::{RoundingPolicy, WageLedger};
use crate::api::harvester::BackendConfig;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the configured backend URL.
pub const API_URL_ENV: &str = "HARVESTLOG_API_URL";

/// A module offered by the interactive setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Identifier used to route the wizard.
    pub key: String,
    /// Name shown in the selection list.
    pub name: String,
}

/// Wage arithmetic settings.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LedgerConfig {
    /// When durations and prices get rounded to two decimals.
    #[serde(default)]
    pub rounding: RoundingPolicy,
}

/// Report export settings.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ExportConfig {
    /// Directory for reports written without an explicit `--output`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<BackendConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger: Option<LedgerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportConfig>,
}

impl Config {
    /// Reads the configuration, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Effective backend settings: the configured module (or defaults) with
    /// `HARVESTLOG_API_URL` applied on top.
    pub fn backend_config(&self) -> BackendConfig {
        let mut backend = self.backend.clone().unwrap_or_default();
        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                backend.api_url = url.trim().to_string();
            }
        }
        backend
    }

    pub fn ledger(&self) -> WageLedger {
        WageLedger::new(self.ledger.clone().unwrap_or_default().rounding)
    }

    /// Directory for exported reports, if one is configured.
    pub fn export_dir(&self) -> Option<PathBuf> {
        self.export
            .as_ref()
            .and_then(|e| e.output_dir.as_deref())
            .map(str::trim)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
    }

    /// Runs the interactive setup wizard, starting from the saved values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            BackendConfig::module(),
            ConfigModule {
                key: "ledger".to_string(),
                name: "Ledger".to_string(),
            },
            ConfigModule {
                key: "export".to_string(),
                name: "Export".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "backend" => config.backend = Some(BackendConfig::init(&config.backend)?),
                "ledger" => {
                    let current = config.ledger.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleLedger);
                    let labels: Vec<&str> = RoundingPolicy::ALL.iter().map(|p| p.label()).collect();
                    let default_index = RoundingPolicy::ALL.iter().position(|p| *p == current.rounding).unwrap_or(0);
                    let choice = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptRounding.to_string())
                        .items(&labels)
                        .default(default_index)
                        .interact()?;
                    config.ledger = Some(LedgerConfig {
                        rounding: RoundingPolicy::ALL[choice],
                    });
                }
                "export" => {
                    let current = config.export.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleExport);
                    let dir: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptOutputDir.to_string())
                        .default(current.output_dir.unwrap_or_default())
                        .allow_empty(true)
                        .interact_text()?;
                    config.export = Some(ExportConfig {
                        output_dir: Some(dir).filter(|d| !d.trim().is_empty()),
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
