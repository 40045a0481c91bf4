//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.convarc/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ConvarcConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub enable_mouse: Option<bool>,
    pub log_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "convarc.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub enable_mouse: bool,
    pub log_file: PathBuf,
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

/// Returns the path to `~/.convarc/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".convarc").join("config.toml"))
}

/// Load config from `~/.convarc/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ConvarcConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ConvarcConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ConvarcConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ConvarcConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ConvarcConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# convarc Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# enable_mouse = true            # Or set CONVARC_NO_MOUSE / pass --no-mouse
# log_file = "convarc.log"       # Or set CONVARC_LOG_FILE / pass --log-file
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
///
/// `cli_no_mouse` and `cli_log_file` are from CLI flags (false/None = not
/// specified).
pub fn resolve(
    config: &ConvarcConfig,
    cli_no_mouse: bool,
    cli_log_file: Option<&str>,
) -> ResolvedConfig {
    // Mouse: CLI → env → config → default (enabled)
    let enable_mouse = if cli_no_mouse {
        false
    } else if std::env::var_os("CONVARC_NO_MOUSE").is_some() {
        false
    } else {
        config.general.enable_mouse.unwrap_or(true)
    };

    // Log file: CLI → env → config → default
    let log_file = cli_log_file
        .map(|s| s.to_string())
        .or_else(|| std::env::var("CONVARC_LOG_FILE").ok())
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    ResolvedConfig {
        enable_mouse,
        log_file: PathBuf::from(log_file),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = ConvarcConfig::default();
        assert!(config.general.enable_mouse.is_none());
        assert!(config.general.log_file.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = ConvarcConfig::default();
        let resolved = resolve(&config, false, None);
        assert!(resolved.enable_mouse);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ConvarcConfig {
            general: GeneralConfig {
                enable_mouse: Some(false),
                log_file: Some("form.log".to_string()),
            },
        };
        let resolved = resolve(&config, false, None);
        assert!(!resolved.enable_mouse);
        assert_eq!(resolved.log_file, PathBuf::from("form.log"));
    }

    #[test]
    fn test_resolve_cli_flags_win() {
        let config = ConvarcConfig {
            general: GeneralConfig {
                enable_mouse: Some(true),
                log_file: Some("form.log".to_string()),
            },
        };
        let resolved = resolve(&config, true, Some("cli.log"));
        assert!(!resolved.enable_mouse);
        assert_eq!(resolved.log_file, PathBuf::from("cli.log"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing - everything else stays default
        let toml_str = r#"
[general]
enable_mouse = false
"#;
        let config: ConvarcConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.enable_mouse, Some(false));
        assert!(config.general.log_file.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
enable_mouse = true
log_file = "out/convarc.log"
"#;
        let config: ConvarcConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.enable_mouse, Some(true));
        assert_eq!(config.general.log_file.as_deref(), Some("out/convarc.log"));
    }

    #[test]
    fn test_empty_toml_parses() {
        let config: ConvarcConfig = toml::from_str("").unwrap();
        assert!(config.general.enable_mouse.is_none());
    }
}
