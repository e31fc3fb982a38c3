//! Library configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use crate::error::{Result, RoleError};

/// When the reconciler should default a set without an accessibility
/// marker into the "main" pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MainRoleRule {
    /// Add "main" only if neither "main" nor "commentary" is present
    #[default]
    NeitherPresent,
    /// Add "main" unless both "main" and "commentary" are present
    UnlessBothPresent,
}

/// Role reconciliation policy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileConfig {
    /// Rule for defaulting sets without an accessibility marker into "main"
    pub main_rule: MainRoleRule,

    /// Skip appending "commentary" when the list already carries it.
    /// Off by default, so role lists behave as multisets.
    pub dedupe_commentary: bool,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error) or a full filter directive
    pub level: String,

    /// Output format
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Check that `level` is a usable filter directive
    pub fn validate(&self) -> Result<()> {
        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| RoleError::Config(format!("invalid log level {:?}: {}", self.level, e)))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolesConfig {
    /// Reconciliation policy
    pub reconcile: ReconcileConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl RolesConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: RolesConfig = toml::from_str(&content)?;
        config.logging.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }
}
