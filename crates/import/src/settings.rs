use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// The whole settings file, threaded explicitly into the loader and the
/// cleaning engine rather than held in any global.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub accounts: Accounts,
    #[serde(default)]
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accounts {
    pub checking: AccountSettings,
    /// Optional second export. Without it the dashboard renders the
    /// checking-only time series.
    pub savings: Option<AccountSettings>,
}

/// Per-account section: where the export lives and how to read and
/// relabel it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSettings {
    pub path: PathBuf,
    /// Positional column names for the headerless export. Names prefixed
    /// `DROP` are discarded.
    pub columns: Vec<String>,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Regexes stripped from descriptions, in order, each applied to the
    /// previous pattern's output.
    #[serde(default)]
    pub noise_patterns: Vec<String>,
    /// Ordered relabeling rules. Evaluated in sequence; when several
    /// triggers match the same description the last one wins.
    #[serde(default)]
    pub categories: Vec<CategoryMapping>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMapping {
    pub trigger: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default)]
    pub breakdown_mode: BreakdownMode,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        DashboardSettings {
            bind: default_bind(),
            breakdown_mode: BreakdownMode::default(),
        }
    }
}

/// How the pie slices are sized: summed amounts or visit counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakdownMode {
    #[default]
    Amount,
    Count,
}

fn default_bind() -> String {
    "127.0.0.1:8050".to_string()
}

fn default_date_format() -> String {
    "%m/%d/%Y".to_string()
}

impl Settings {
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}
