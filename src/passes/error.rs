use thiserror::Error;

#[derive(Debug, Error)]
pub enum PassError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid config: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("invalid date cell: {0:?}")]
    InvalidDate(String),
    #[error("invalid altitude cell: {0:?}")]
    InvalidAltitude(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
