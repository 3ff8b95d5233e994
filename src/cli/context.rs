//! Command execution context
//!
//! Loads the credentials once and builds the API client every command needs.

use std::path::Path;

use log::debug;

use crate::client::GitHubClient;
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config and client.
pub struct CommandContext {
    /// Resolved credentials and endpoint
    pub config: Config,
    /// Authenticated API client
    pub client: GitHubClient,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingCredentials` if either credential is absent.
    pub fn new(env_file: &Path) -> Result<Self> {
        let config = Config::load(env_file)?;
        debug!("Using {:?}", config);

        let client = GitHubClient::new(&config)?;
        Ok(Self { config, client })
    }
}
