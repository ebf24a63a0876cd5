use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Folder scan failed
    #[error("scan failed: {0}")]
    Scan(String),

    /// Track inspection failed
    #[error("inspection failed: {0}")]
    Inspect(String),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),

    #[error("config serialization failed: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("config parse failed: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
