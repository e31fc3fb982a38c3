//! Configuration file support
//!
//! Loads library configuration from TOML files. Every section is optional;
//! missing sections and keys fall back to the defaults in [`crate::config`].

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{LogFormat, LoggingConfig, MainRoleRule, ReconcileConfig, RolesConfig};
use crate::error::Result;

/// Configuration file format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Reconciliation settings
    pub reconcile: Option<ReconcileSettings>,
    /// Logging settings
    pub logging: Option<LoggingSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileSettings {
    /// "neither_present" or "unless_both_present"
    pub main_rule: Option<MainRoleRule>,
    /// Avoid duplicate "commentary" entries
    pub dedupe_commentary: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty)
    pub format: Option<LogFormat>,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: ConfigFile = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Generate default configuration file
    pub fn default_config() -> Self {
        Self {
            reconcile: Some(ReconcileSettings {
                main_rule: Some(MainRoleRule::NeitherPresent),
                dedupe_commentary: Some(false),
            }),
            logging: Some(LoggingSettings {
                level: "info".to_string(),
                format: Some(LogFormat::Pretty),
            }),
        }
    }

    /// Convert to RolesConfig, validating the log level
    pub fn into_config(self) -> Result<RolesConfig> {
        let reconcile = match self.reconcile {
            Some(r) => ReconcileConfig {
                main_rule: r.main_rule.unwrap_or_default(),
                dedupe_commentary: r.dedupe_commentary.unwrap_or(false),
            },
            None => ReconcileConfig::default(),
        };

        let logging = match self.logging {
            Some(l) => LoggingConfig {
                level: l.level,
                format: l.format.unwrap_or(LogFormat::Pretty),
            },
            None => LoggingConfig::default(),
        };
        logging.validate()?;

        Ok(RolesConfig { reconcile, logging })
    }
}

/// Generate default configuration file at the specified path
pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let config = ConfigFile::default_config();
    config.to_file(path)?;
    Ok(())
}
