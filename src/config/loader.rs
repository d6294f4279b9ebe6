//! Configuration file loading with precedence handling.

use crate::view_state::layout_params::LayoutParams;
use crate::view_state::types::{ItemIndex, SectionInsets};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "STICKYLIST_CONFIG";

/// Environment variable overriding the top bar height.
pub const TOP_BAR_HEIGHT_ENV_VAR: &str = "STICKYLIST_TOP_BAR_HEIGHT";

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

    /// Config file contains invalid TOML syntax.
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
/// Corresponds to `~/.config/stickylist/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Space before every section.
    #[serde(default)]
    pub section_inset_top: Option<f64>,

    /// Space after every section.
    #[serde(default)]
    pub section_inset_bottom: Option<f64>,

    /// Space after every item.
    #[serde(default)]
    pub inter_item_spacing: Option<f64>,

    /// Extra space after each section past the sticky section.
    #[serde(default)]
    pub gap_after_sticky: Option<f64>,

    /// Height of the bar the sticky element pins below.
    #[serde(default)]
    pub top_bar_height: Option<f64>,

    /// Section of the sticky element.
    #[serde(default)]
    pub sticky_section: Option<usize>,

    /// Item of the sticky element within its section.
    #[serde(default)]
    pub sticky_item: Option<usize>,

    /// Viewport width used for the demo list.
    #[serde(default)]
    pub viewport_width: Option<f64>,

    /// Viewport height used for visible-range queries.
    #[serde(default)]
    pub viewport_height: Option<f64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Space before every section.
    pub section_inset_top: f64,
    /// Space after every section.
    pub section_inset_bottom: f64,
    /// Space after every item.
    pub inter_item_spacing: f64,
    /// Extra space after each section past the sticky section.
    pub gap_after_sticky: f64,
    /// Height of the bar the sticky element pins below.
    pub top_bar_height: f64,
    /// The sticky element.
    pub sticky: ItemIndex,
    /// Viewport width.
    pub viewport_width: f64,
    /// Viewport height.
    pub viewport_height: f64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let demo = LayoutParams::demo();
        Self {
            section_inset_top: demo.insets.top,
            section_inset_bottom: demo.insets.bottom,
            inter_item_spacing: demo.inter_item_spacing,
            gap_after_sticky: demo.gap_after_sticky,
            top_bar_height: 0.0,
            sticky: demo.sticky,
            viewport_width: 390.0,
            viewport_height: 844.0,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Layout parameters described by this configuration.
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams::new(
            SectionInsets::new(self.section_inset_top, self.section_inset_bottom),
            self.gap_after_sticky,
            self.sticky,
        )
        .with_inter_item_spacing(self.inter_item_spacing)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/stickylist/stickylist.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("stickylist").join("stickylist.log")
    } else {
        PathBuf::from("stickylist.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
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
/// Returns `~/.config/stickylist/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("stickylist").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `STICKYLIST_CONFIG` environment variable
/// 3. Default path `~/.config/stickylist/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
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
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        section_inset_top: config
            .section_inset_top
            .unwrap_or(defaults.section_inset_top),
        section_inset_bottom: config
            .section_inset_bottom
            .unwrap_or(defaults.section_inset_bottom),
        inter_item_spacing: config
            .inter_item_spacing
            .unwrap_or(defaults.inter_item_spacing),
        gap_after_sticky: config.gap_after_sticky.unwrap_or(defaults.gap_after_sticky),
        top_bar_height: config.top_bar_height.unwrap_or(defaults.top_bar_height),
        sticky: ItemIndex::new(
            config.sticky_section.unwrap_or(defaults.sticky.section),
            config.sticky_item.unwrap_or(defaults.sticky.item),
        ),
        viewport_width: config.viewport_width.unwrap_or(defaults.viewport_width),
        viewport_height: config.viewport_height.unwrap_or(defaults.viewport_height),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `STICKYLIST_TOP_BAR_HEIGHT`: Override top bar height (ignored unless a finite number)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(height) = std::env::var(TOP_BAR_HEIGHT_ENV_VAR)
        .ok()
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|height| height.is_finite())
    {
        config.top_bar_height = height;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
/// Non-finite values are ignored, as for environment overrides.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    top_bar_height_override: Option<f64>,
    viewport_height_override: Option<f64>,
) -> ResolvedConfig {
    if let Some(height) = top_bar_height_override.filter(|height| height.is_finite()) {
        config.top_bar_height = height;
    }

    if let Some(height) = viewport_height_override.filter(|height| height.is_finite()) {
        config.viewport_height = height;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
