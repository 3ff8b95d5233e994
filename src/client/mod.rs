//! GitHub REST API client

use async_trait::async_trait;

use crate::error::Result;

#[cfg(test)]
pub mod mock;
pub mod github;
pub mod models;

#[cfg(test)]
pub use mock::MockGitHubClient;
pub use github::GitHubClient;
pub use models::{Repository, Visibility};

/// Which listing endpoint to query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoScope {
    /// `GET /user/repos`: everything the token can see, private included
    Authenticated,
    /// `GET /users/{account}/repos`: public repositories only
    Public,
}

/// Parameters for a single listing request
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub scope: RepoScope,
    /// Forwarded as-is; the API decides what to do with odd values
    pub per_page: i64,
}

impl ListQuery {
    pub fn new(include_private: bool, per_page: i64) -> Self {
        let scope = if include_private {
            RepoScope::Authenticated
        } else {
            RepoScope::Public
        };
        Self { scope, per_page }
    }

    /// Query string pairs, newest-updated first, owned repositories only.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("per_page", self.per_page.to_string()),
            ("sort", "updated".to_string()),
            ("direction", "desc".to_string()),
            ("affiliation", "owner".to_string()),
        ]
    }
}

/// GitHub repository operations used by repo-sweep.
///
/// A response with a status the operation does not accept comes back as
/// [`ApiError::UnexpectedStatus`](crate::error::ApiError::UnexpectedStatus),
/// so callers can tell a refused request apart from a broken connection.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Fetch one page of repositories. Success is exactly 200.
    async fn list_repos(&self, query: &ListQuery) -> Result<Vec<Repository>>;

    /// Flip a repository owned by the account to private. Success is exactly 200.
    async fn set_private(&self, repo: &str) -> Result<()>;

    /// Delete a repository owned by the account. Success is exactly 204.
    async fn delete_repo(&self, repo: &str) -> Result<()>;
}
