//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tracebay/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::catalogue::{ALL_CATEGORY, find_category};
use crate::core::loading::DEFAULT_LOADING_DELAY;
use crate::core::view::Tab;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TracebayConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_category: Option<String>,
    pub loading_delay_ms: Option<u64>,
    pub start_tab: Option<Tab>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub animations: Option<bool>,
    pub transition_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(250);

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub default_category: &'static str,
    pub loading_delay: Duration,
    pub start_tab: Tab,
    pub animations: bool,
    pub transition: Duration,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            default_category: ALL_CATEGORY,
            loading_delay: DEFAULT_LOADING_DELAY,
            start_tab: Tab::Explore,
            animations: true,
            transition: DEFAULT_TRANSITION,
        }
    }
}

/// Values supplied on the command line. `None` = flag not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub category: Option<String>,
    pub loading_delay_ms: Option<u64>,
    pub start_tab: Option<Tab>,
    pub no_animations: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.tracebay/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tracebay").join("config.toml"))
}

/// Load config from `~/.tracebay/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TracebayConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TracebayConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TracebayConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TracebayConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<TracebayConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Tracebay Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_category = "All"          # All, Power, Robotics, Sensors, Audio, Connectivity, New
# loading_delay_ms = 800            # Or set TRACEBAY_LOADING_DELAY_MS
# start_tab = "explore"             # explore, search, create, library, profile

# [ui]
# animations = true
# transition_ms = 250
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TracebayConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

/// `resolve` with the environment supplied as a lookup function.
pub fn resolve_with(
    config: &TracebayConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Category: CLI → env → config → default
    let category_name = cli
        .category
        .clone()
        .or_else(|| env("TRACEBAY_CATEGORY"))
        .or_else(|| config.general.default_category.clone());
    let default_category = match category_name {
        Some(name) => find_category(&name).unwrap_or_else(|| {
            warn!("Unknown category '{}', falling back to {}", name, ALL_CATEGORY);
            ALL_CATEGORY
        }),
        None => ALL_CATEGORY,
    };

    // Loading delay: CLI → env → config → default
    let loading_delay = cli
        .loading_delay_ms
        .or_else(|| env_millis("TRACEBAY_LOADING_DELAY_MS", env("TRACEBAY_LOADING_DELAY_MS")))
        .or(config.general.loading_delay_ms)
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_LOADING_DELAY);

    let start_tab = cli
        .start_tab
        .or(config.general.start_tab)
        .unwrap_or_default();

    let animations = !cli.no_animations && config.ui.animations.unwrap_or(true);

    let transition = config
        .ui
        .transition_ms
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_TRANSITION);

    ResolvedConfig {
        default_category,
        loading_delay,
        start_tab,
        animations,
        transition,
    }
}

fn env_millis(key: &str, raw: Option<String>) -> Option<u64> {
    let raw = raw?;
    match raw.trim().parse() {
        Ok(ms) => Some(ms),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    /// Environment lookup backed by a fixed list of pairs.
    fn fake_env(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_default_config_parses() {
        let config = TracebayConfig::default();
        assert!(config.general.default_category.is_none());
        assert!(config.ui.animations.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with(&TracebayConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.default_category, ALL_CATEGORY);
        assert_eq!(resolved.loading_delay, DEFAULT_LOADING_DELAY);
        assert_eq!(resolved.start_tab, Tab::Explore);
        assert!(resolved.animations);
        assert_eq!(resolved.transition, DEFAULT_TRANSITION);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = TracebayConfig {
            general: GeneralConfig {
                default_category: Some("robotics".to_string()),
                loading_delay_ms: Some(50),
                start_tab: Some(Tab::Profile),
            },
            ui: UiConfig {
                animations: Some(false),
                transition_ms: Some(100),
            },
        };
        let resolved = resolve_with(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.default_category, "Robotics");
        assert_eq!(resolved.loading_delay, Duration::from_millis(50));
        assert_eq!(resolved.start_tab, Tab::Profile);
        assert!(!resolved.animations);
        assert_eq!(resolved.transition, Duration::from_millis(100));
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = TracebayConfig {
            general: GeneralConfig {
                default_category: Some("Audio".to_string()),
                loading_delay_ms: Some(900),
                start_tab: Some(Tab::Library),
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            category: Some("Power".to_string()),
            loading_delay_ms: Some(0),
            start_tab: Some(Tab::Search),
            no_animations: true,
        };
        let resolved = resolve_with(&config, &cli, no_env);
        assert_eq!(resolved.default_category, "Power");
        assert_eq!(resolved.loading_delay, Duration::ZERO);
        assert_eq!(resolved.start_tab, Tab::Search);
        assert!(!resolved.animations);
    }

    #[test]
    fn test_env_overrides_file() {
        let config = TracebayConfig {
            general: GeneralConfig {
                default_category: Some("Audio".to_string()),
                loading_delay_ms: Some(900),
                start_tab: None,
            },
            ..Default::default()
        };
        let env = fake_env(&[
            ("TRACEBAY_CATEGORY", "sensors"),
            ("TRACEBAY_LOADING_DELAY_MS", "150"),
        ]);
        let resolved = resolve_with(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.default_category, "Sensors");
        assert_eq!(resolved.loading_delay, Duration::from_millis(150));
    }

    #[test]
    fn test_cli_overrides_env() {
        let cli = CliOverrides {
            category: Some("Power".to_string()),
            loading_delay_ms: Some(5),
            ..Default::default()
        };
        let env = fake_env(&[
            ("TRACEBAY_CATEGORY", "Audio"),
            ("TRACEBAY_LOADING_DELAY_MS", "150"),
        ]);
        let resolved = resolve_with(&TracebayConfig::default(), &cli, env);
        assert_eq!(resolved.default_category, "Power");
        assert_eq!(resolved.loading_delay, Duration::from_millis(5));
    }

    #[test]
    fn test_bad_env_delay_falls_back_to_file() {
        let config = TracebayConfig {
            general: GeneralConfig {
                loading_delay_ms: Some(300),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = fake_env(&[("TRACEBAY_LOADING_DELAY_MS", "soon")]);
        let resolved = resolve_with(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.loading_delay, Duration::from_millis(300));

        let env = fake_env(&[("TRACEBAY_LOADING_DELAY_MS", "soon")]);
        let resolved = resolve_with(&TracebayConfig::default(), &CliOverrides::default(), env);
        assert_eq!(resolved.loading_delay, DEFAULT_LOADING_DELAY);
    }

    #[test]
    fn test_unknown_category_falls_back_to_all() {
        let cli = CliOverrides {
            category: Some("Quantum".to_string()),
            ..Default::default()
        };
        let resolved = resolve_with(&TracebayConfig::default(), &cli, no_env);
        assert_eq!(resolved.default_category, ALL_CATEGORY);
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[general]
default_category = "Sensors"
loading_delay_ms = 1200
start_tab = "search"

[ui]
animations = false
transition_ms = 400
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.general.default_category.as_deref(), Some("Sensors"));
        assert_eq!(config.general.loading_delay_ms, Some(1200));
        assert_eq!(config.general.start_tab, Some(Tab::Search));
        assert_eq!(config.ui.animations, Some(false));
        assert_eq!(config.ui.transition_ms, Some(400));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config = parse_config("[ui]\nanimations = true\n").unwrap();
        assert_eq!(config.ui.animations, Some(true));
        assert!(config.general.start_tab.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_config("[general\nstart_tab = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn test_bad_tab_is_parse_error() {
        assert!(parse_config("[general]\nstart_tab = \"checkout\"\n").is_err());
    }
}
