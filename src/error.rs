//! Error types for repo-sweep

use thiserror::Error;

/// Result type alias for repo-sweep operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Prompt(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}

/// GitHub API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// The request reached GitHub but was answered with a status the
    /// operation does not accept as success.
    #[error("HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to the GitHub API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "GITHUB_USERNAME and GITHUB_TOKEN are not set.\n\
         Create a '.env' file containing:\n\
         GITHUB_USERNAME=<your GitHub user name>\n\
         GITHUB_TOKEN=<your GitHub personal access token>"
    )]
    MissingCredentials,

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
