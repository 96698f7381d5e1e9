//! Configuration file loading for hebfix.
//!
//! Discovers and loads `hebfix.toml` from the working directory.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use hebfix_core::RulesConfig;
use hebfix_core::settings::{DEFAULT_BACKUP_SUFFIX, DEFAULT_DATA_PATH};
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "hebfix.toml";

/// Top-level configuration from hebfix.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HebfixConfig {
    /// Data file to repair.
    pub data_path: Option<Utf8PathBuf>,

    /// Marker overrides for the classifier.
    pub markers: RulesConfig,

    /// Backup settings.
    pub backups: BackupsConfig,
}

/// Backups section of the config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackupsConfig {
    /// Copy the data file aside before overwriting it.
    pub enabled: bool,

    /// Suffix for backup files.
    pub suffix: String,
}

impl Default for BackupsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            suffix: DEFAULT_BACKUP_SUFFIX.to_string(),
        }
    }
}

/// Discover the hebfix.toml config file.
///
/// Returns `None` if no config file is found in `dir`.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a hebfix.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<HebfixConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<HebfixConfig> {
    let config: HebfixConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from `dir`, or return default if not found.
pub fn load_or_default(dir: &Utf8Path) -> anyhow::Result<HebfixConfig> {
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(HebfixConfig::default()),
    }
}

/// Merged configuration combining config file and CLI arguments.
#[derive(Debug, Clone)]
pub struct MergedConfig {
    pub data_path: Utf8PathBuf,
    pub backup_enabled: bool,
    pub backup_suffix: String,
    pub markers: RulesConfig,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: HebfixConfig,
}

impl ConfigMerger {
    pub fn new(config: HebfixConfig) -> Self {
        Self { config }
    }

    /// CLI `data` replaces the configured path; CLI `backup` can only turn
    /// backups on.
    pub fn merge_args(self, cli_data: Option<Utf8PathBuf>, cli_backup: bool) -> MergedConfig {
        let data_path = cli_data
            .or(self.config.data_path)
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATA_PATH));

        MergedConfig {
            data_path,
            backup_enabled: cli_backup || self.config.backups.enabled,
            backup_suffix: self.config.backups.suffix,
            markers: self.config.markers,
        }
    }
}
