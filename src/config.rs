//! OSC output configuration
//!
//! Loaded from `osc-output.toml` in the platform config directory, with
//! `OSC_ENABLED`, `OSC_HOST` and `OSC_PORT` environment overrides.
//!
//! ```toml
//! enabled = true
//! host = "192.168.1.50"
//! port = 9000
//! ```

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_OSC_HOST, DEFAULT_OSC_PORT};
use crate::error::{ConfigError, Result};

/// Destination and on/off switch for OSC output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OscConfig {
    /// Output is off unless explicitly enabled
    pub enabled: bool,
    /// Dotted-quad IPv4 address of the consumer
    pub host: String,
    pub port: u16,
}

impl Default for OscConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            host: DEFAULT_OSC_HOST.to_string(),
            port: DEFAULT_OSC_PORT,
        }
    }
}

impl OscConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: OscConfig = toml::from_str(contents).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self).map_err(ConfigError::from)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// `<config dir>/osc-output.toml`
    pub fn default_path() -> std::result::Result<PathBuf, ConfigError> {
        let dirs = ProjectDirs::from("", "", "osc-tracking-output")
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Read the default config file if present, fall back to defaults,
    /// then apply environment overrides
    pub fn load_or_default() -> Self {
        let mut config = match Self::default_path() {
            Ok(path) if path.exists() => match Self::from_file(&path) {
                Ok(config) => {
                    debug!("Loaded OSC config from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("Ignoring {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Ok(_) => Self::default(),
            Err(e) => {
                debug!("{}", e);
                Self::default()
            }
        };
        config.apply_env();
        config
    }

    /// Override fields from `OSC_ENABLED`, `OSC_HOST`, `OSC_PORT`
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Override fields from any key lookup. Invalid values are logged and skipped.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("OSC_ENABLED") {
            match parse_bool(&value) {
                Ok(enabled) => self.enabled = enabled,
                Err(e) => warn!("{}", e),
            }
        }

        if let Some(host) = lookup("OSC_HOST") {
            self.host = host;
        }

        if let Some(value) = lookup("OSC_PORT") {
            match value.trim().parse::<u16>() {
                Ok(port) => self.port = port,
                Err(_) => {
                    let e = ConfigError::InvalidValue {
                        key: "OSC_PORT",
                        value,
                    };
                    warn!("{}", e);
                }
            }
        }
    }
}

fn parse_bool(value: &str) -> std::result::Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: "OSC_ENABLED",
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = OscConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = OscConfig::from_toml("enabled = true\nport = 9001\n").unwrap();
        assert!(config.enabled);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9001);
    }

    #[test]
    fn test_out_of_range_port_rejected() {
        assert!(OscConfig::from_toml("port = 70000").is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir()
            .join(format!("osc-config-test-{}.toml", std::process::id()));
        let config = OscConfig {
            enabled: true,
            host: "10.0.0.7".to_string(),
            port: 9100,
        };
        config.to_file(&path).unwrap();

        let loaded = OscConfig::from_file(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let err = OscConfig::from_file("/nonexistent/osc-output.toml").unwrap_err();
        assert!(matches!(err, crate::Error::Config(ConfigError::Read { .. })));
    }

    #[test]
    fn test_overrides() {
        let mut config = OscConfig::default();
        config.apply_overrides(lookup(&[
            ("OSC_ENABLED", "yes"),
            ("OSC_HOST", "192.168.0.2"),
            ("OSC_PORT", "9002"),
        ]));
        assert!(config.enabled);
        assert_eq!(config.host, "192.168.0.2");
        assert_eq!(config.port, 9002);
    }

    #[test]
    fn test_invalid_overrides_ignored() {
        let mut config = OscConfig::default();
        config.apply_overrides(lookup(&[("OSC_ENABLED", "maybe"), ("OSC_PORT", "-1")]));
        assert_eq!(config, OscConfig::default());
    }
}
