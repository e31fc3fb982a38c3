use thiserror::Error;

/// Main error type for the role fix-up library.
///
/// The core transformations never fail; every variant here comes from the
/// ambient layer (configuration files and logging setup).
#[derive(Error, Debug)]
pub enum RoleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RoleError>;
