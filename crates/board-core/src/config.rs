use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Endpoint the board fetches `{ tickets, users }` from when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

/// Environment override for the data-source endpoint.
pub const ENDPOINT_ENV: &str = "BOARDVIEW_ENDPOINT";

/// Environment override for the preferences file location.
pub const PREFS_ENV: &str = "BOARDVIEW_PREFS";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub preferences: PreferencesConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Environment override for the config file location.
pub const CONFIG_ENV: &str = "BOARDVIEW_CONFIG";

/// Location of the user config file: `BOARDVIEW_CONFIG`, else the platform
/// config directory.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join("boardview/config.toml")))
}

/// Default location of the persisted view preferences.
#[must_use]
pub fn default_prefs_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("boardview/preferences.json"))
}

/// Load a config file, returning defaults when it does not exist.
///
/// # Errors
///
/// Returns [`BoardError::Config`] if the file exists but cannot be read or parsed.
pub fn load_config_from(path: &Path) -> Result<BoardConfig, BoardError> {
    if !path.exists() {
        return Ok(BoardConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|err| BoardError::Config {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;

    toml::from_str::<BoardConfig>(&content).map_err(|err| BoardError::Config {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}

/// Load the user config from the platform config directory.
///
/// # Errors
///
/// Returns [`BoardError::Config`] if the config file is present but invalid.
pub fn load_user_config() -> Result<BoardConfig, BoardError> {
    let Some(path) = user_config_path() else {
        return Ok(BoardConfig::default());
    };
    load_config_from(&path)
}

/// Resolve the data-source endpoint: flag, then `BOARDVIEW_ENDPOINT`, then config.
#[must_use]
pub fn resolve_endpoint(flag: Option<&str>, config: &BoardConfig) -> String {
    let env_endpoint = env::var(ENDPOINT_ENV).ok();
    resolve_endpoint_inner(flag, env_endpoint.as_deref(), config)
}

fn resolve_endpoint_inner(flag: Option<&str>, env_value: Option<&str>, config: &BoardConfig) -> String {
    flag.or_else(|| env_value.filter(|value| !value.trim().is_empty()))
        .map_or_else(|| config.source.endpoint.clone(), str::to_string)
}

/// Resolve the preferences file: flag, then `BOARDVIEW_PREFS`, then config,
/// then the platform default.
#[must_use]
pub fn resolve_prefs_path(flag: Option<&Path>, config: &BoardConfig) -> Option<PathBuf> {
    let env_path = env::var_os(PREFS_ENV).map(PathBuf::from);
    resolve_prefs_path_inner(flag, env_path, config, default_prefs_path())
}

fn resolve_prefs_path_inner(
    flag: Option<&Path>,
    env_path: Option<PathBuf>,
    config: &BoardConfig,
    fallback: Option<PathBuf>,
) -> Option<PathBuf> {
    flag.map(Path::to_path_buf)
        .or(env_path)
        .or_else(|| config.preferences.path.clone())
        .or(fallback)
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}
