//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "RECIPE_FINDER_CONFIG";

/// Environment variable overriding the debounce window in milliseconds.
pub const DEBOUNCE_ENV_VAR: &str = "RECIPE_FINDER_DEBOUNCE_MS";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/recipe-finder/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Quiet period before typed search text is applied, in milliseconds.
    #[serde(default)]
    pub debounce_ms: Option<u64>,

    /// JSON file with the recipe catalog. Built-in catalog when unset.
    #[serde(default)]
    pub recipes_file: Option<PathBuf>,

    /// Width of a recipe card in columns.
    #[serde(default)]
    pub card_width: Option<u16>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Debounce window in milliseconds.
    pub debounce_ms: u64,
    /// Recipe catalog file, `None` for the built-in catalog.
    pub recipes_file: Option<PathBuf>,
    /// Card width in columns.
    pub card_width: u16,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl ResolvedConfig {
    /// Debounce window as a `Duration`.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            recipes_file: None,
            card_width: 36,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/recipe-finder/recipe-finder.log` on Linux, or the
/// platform state directory elsewhere. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("recipe-finder").join("recipe-finder.log")
    } else {
        PathBuf::from("recipe-finder.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/recipe-finder/config.toml` on Linux, the platform
/// config directory elsewhere, or `None` if it cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("recipe-finder").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `RECIPE_FINDER_CONFIG` environment variable
/// 3. Default path `~/.config/recipe-finder/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        debounce_ms: config.debounce_ms.unwrap_or(defaults.debounce_ms),
        recipes_file: config.recipes_file.or(defaults.recipes_file),
        card_width: config.card_width.unwrap_or(defaults.card_width),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `RECIPE_FINDER_DEBOUNCE_MS`. Values that are not a whole number of
/// milliseconds are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(DEBOUNCE_ENV_VAR) {
        match raw.trim().parse::<u64>() {
            Ok(ms) => config.debounce_ms = ms,
            Err(e) => warn!(value = %raw, error = %e, "Ignoring invalid {}", DEBOUNCE_ENV_VAR),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest).
/// Only flags the user actually passed are `Some`.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    recipes_file: Option<PathBuf>,
    debounce_ms: Option<u64>,
) -> ResolvedConfig {
    if let Some(path) = recipes_file {
        config.recipes_file = Some(path);
    }

    if let Some(ms) = debounce_ms {
        config.debounce_ms = ms;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
