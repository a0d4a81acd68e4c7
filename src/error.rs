// ABOUTME: Error types with structured exit codes for CLI
// ABOUTME: Separates fatal setup failures from per-locale request failures

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("No access token: authenticate before calling the API")]
    NoToken,

    #[error("Request failed with status {status} on {endpoint}: {message}")]
    RequestFailed {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Filesystem error: {0}")]
    Filesystem(#[from] std::io::Error),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Configuration(_) => 2,
            Error::AuthenticationFailed(_) => 3,
            Error::NoToken => 4,
            Error::RequestFailed { .. } => 5,
            Error::Network(_) => 6,
            Error::Parse(_) => 7,
            Error::Filesystem(_) => 8,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
