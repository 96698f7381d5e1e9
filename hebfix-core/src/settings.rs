//! Clap-free settings for the fix pipeline.

use camino::Utf8PathBuf;
use hebfix_domain::RuleSet;

/// Data file used when nothing else is configured.
pub const DEFAULT_DATA_PATH: &str = "src/data/sailing_questions.json";

pub const DEFAULT_BACKUP_SUFFIX: &str = ".hebfix.bak";

#[derive(Debug, Clone)]
pub struct RunSettings {
    pub data_path: Utf8PathBuf,

    /// Classify and fix in memory, but leave storage untouched.
    pub dry_run: bool,

    // Backups
    pub backup_enabled: bool,
    pub backup_suffix: String,

    pub rules: RuleSet,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            data_path: Utf8PathBuf::from(DEFAULT_DATA_PATH),
            dry_run: false,
            backup_enabled: false,
            backup_suffix: DEFAULT_BACKUP_SUFFIX.to_string(),
            rules: RuleSet::default(),
        }
    }
}
