//! Credential loading for repo-sweep
//!
//! Credentials live in a local `.env` file that is never committed. The file is
//! loaded into the process environment once at startup; after that the
//! resolved [`Config`] is passed explicitly to every component.

use std::fmt;
use std::path::Path;

use crate::error::{ConfigError, Result};

/// Environment variable holding the account login
pub const USERNAME_VAR: &str = "GITHUB_USERNAME";

/// Environment variable holding the personal access token
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Environment variable overriding the API base URL
pub const API_URL_VAR: &str = "GITHUB_API_URL";

/// Public GitHub REST API
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Resolved credentials and endpoint
#[derive(Clone)]
pub struct Config {
    /// Login that owns the repositories
    pub account: String,

    /// Personal access token
    pub token: String,

    /// Base URL of the REST API, without trailing slash
    pub api_base: String,
}

impl Config {
    /// Load the env file (if present) and read the credentials from the
    /// process environment.
    ///
    /// Variables already set in the environment take precedence over values
    /// from the file.
    pub fn load(env_file: &Path) -> Result<Self> {
        load_env_file(env_file)?;
        Self::from_env()
    }

    /// Read the credentials from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    ///
    /// Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let (Some(account), Some(token)) = (non_empty(USERNAME_VAR), non_empty(TOKEN_VAR)) else {
            return Err(ConfigError::MissingCredentials.into());
        };

        let api_base = non_empty(API_URL_VAR)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Self {
            account,
            token,
            api_base,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("account", &self.account)
            .field("token", &"<redacted>")
            .field("api_base", &self.api_base)
            .finish()
    }
}

/// Load `KEY=value` pairs from `path` into the process environment.
///
/// A missing file is fine: the variables may already be exported.
fn load_env_file(path: &Path) -> Result<()> {
    match dotenv::from_path(path) {
        Ok(()) => {
            log::debug!("Loaded environment from {}", path.display());
            Ok(())
        }
        Err(dotenv::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No env file at {}", path.display());
            Ok(())
        }
        Err(dotenv::Error::Io(err)) => Err(err.into()),
        Err(err) => Err(ConfigError::Invalid(format!("{}: {}", path.display(), err)).into()),
    }
}
