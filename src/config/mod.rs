pub mod toml_config;

use crate::core::repository::SearchScope;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::PathBuf;
use toml_config::TomlConfig;

pub const DEFAULT_DATA_FILE: &str = "contacts.json";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "contact-book")]
#[command(about = "Keep a personal contact list in a JSON file")]
pub struct CliConfig {
    /// Contacts file; overrides `storage.data_file` from the config file
    #[arg(long)]
    pub data_file: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Effective settings after merging command line and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_file: PathBuf,
    pub log_level: Option<String>,
    pub search_scope: SearchScope,
}

impl Settings {
    /// An explicit `data_file` wins over the config file, which wins over the default.
    pub fn resolve(data_file: Option<&str>, toml: Option<&TomlConfig>) -> Result<Self> {
        if let Some(toml) = toml {
            toml.validate()?;
        }

        let data_file = data_file
            .or_else(|| toml.and_then(TomlConfig::data_file))
            .unwrap_or(DEFAULT_DATA_FILE);
        validation::validate_path("data_file", data_file)?;

        Ok(Self {
            data_file: PathBuf::from(data_file),
            log_level: toml.and_then(TomlConfig::log_level).map(str::to_string),
            search_scope: toml.map(TomlConfig::search_scope).unwrap_or_default(),
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: None,
            search_scope: SearchScope::Names,
        }
    }
}
