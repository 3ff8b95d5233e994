//! Mock GitHub API client for testing
//!
//! Provides an in-memory implementation of [`GitHubApi`] so listing and batch
//! logic can be tested without making real API calls.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::models::{Owner, Repository};
use super::{GitHubApi, ListQuery};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure responses via builder methods, then hand it to the code under test.
///
/// # Example
/// ```ignore
/// let mock = MockGitHubClient::new()
///     .with_repos(vec![repo("a", "alice", false)])
///     .await
///     .with_status("a", 404)
///     .await;
/// ```
#[derive(Default)]
pub struct MockGitHubClient {
    /// Repositories returned by `list_repos`
    repos: Arc<Mutex<Vec<Repository>>>,
    /// Status returned by `list_repos` instead of the repositories
    list_status: Arc<Mutex<Option<(u16, String)>>>,
    /// Per-repository failure status for mutations
    repo_status: Arc<Mutex<HashMap<String, u16>>>,
    /// Call counters
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests in call order
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_repos: usize,
    pub set_private: usize,
    pub delete_repo: usize,
}

impl CallCounts {
    /// Total number of API calls made.
    pub fn total(&self) -> usize {
        self.list_repos + self.set_private + self.delete_repo
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRequest {
    /// The API method called (e.g. "set_private")
    pub method: String,
    /// Repository name for mutations, page size for listings
    pub target: String,
}

/// Build a repository fixture
pub fn repo(name: &str, owner: &str, private: bool) -> Repository {
    Repository {
        name: name.to_string(),
        owner: Owner {
            login: owner.to_string(),
        },
        private,
        description: None,
        html_url: format!("https://github.com/{}/{}", owner, name),
        created_at: chrono::DateTime::parse_from_rfc3339("2024-01-31T12:00:00Z")
            .map(|dt| dt.with_timezone(&chrono::Utc))
            .unwrap_or_default(),
    }
}

impl MockGitHubClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure repositories to return from list_repos.
    pub async fn with_repos(self, repos: Vec<Repository>) -> Self {
        *self.repos.lock().await = repos;
        self
    }

    /// Make list_repos answer with `status` and `body`.
    pub async fn with_list_status(self, status: u16, body: &str) -> Self {
        *self.list_status.lock().await = Some((status, body.to_string()));
        self
    }

    /// Make mutations on `repo` answer with `status`.
    pub async fn with_status(self, repo: &str, status: u16) -> Self {
        self.repo_status
            .lock()
            .await
            .insert(repo.to_string(), status);
        self
    }

    /// Get call counts for verification.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get captured requests in call order.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    async fn capture(&self, method: &str, target: &str) {
        self.captured_requests.lock().await.push(CapturedRequest {
            method: method.to_string(),
            target: target.to_string(),
        });
    }

    async fn check_repo_status(&self, repo: &str) -> Result<()> {
        match self.repo_status.lock().await.get(repo) {
            Some(&status) => Err(ApiError::UnexpectedStatus {
                status,
                body: format!(r#"{{"message":"mock status {}"}}"#, status),
            }
            .into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl GitHubApi for MockGitHubClient {
    async fn list_repos(&self, query: &ListQuery) -> Result<Vec<Repository>> {
        self.capture("list_repos", &query.per_page.to_string()).await;
        self.call_count.lock().await.list_repos += 1;

        if let Some((status, body)) = self.list_status.lock().await.clone() {
            return Err(ApiError::UnexpectedStatus { status, body }.into());
        }

        Ok(self.repos.lock().await.clone())
    }

    async fn set_private(&self, repo: &str) -> Result<()> {
        self.capture("set_private", repo).await;
        self.call_count.lock().await.set_private += 1;
        self.check_repo_status(repo).await
    }

    async fn delete_repo(&self, repo: &str) -> Result<()> {
        self.capture("delete_repo", repo).await;
        self.call_count.lock().await.delete_repo += 1;
        self.check_repo_status(repo).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn test_mock_counts_and_captures() {
        let mock = MockGitHubClient::new().with_status("b", 404).await;

        assert!(mock.set_private("a").await.is_ok());
        assert!(mock.delete_repo("b").await.is_err());

        let counts = mock.call_counts().await;
        assert_eq!(counts.set_private, 1);
        assert_eq!(counts.delete_repo, 1);
        assert_eq!(counts.total(), 2);

        let captured = mock.captured_requests().await;
        assert_eq!(captured[0].target, "a");
        assert_eq!(captured[1].method, "delete_repo");
    }

    #[tokio::test]
    async fn test_mock_list_status() {
        let mock = MockGitHubClient::new()
            .with_repos(vec![repo("a", "alice", false)])
            .await
            .with_list_status(500, "boom")
            .await;

        let err = mock.list_repos(&ListQuery::new(true, 10)).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Api(ApiError::UnexpectedStatus { status: 500, .. })
        ));
    }
}
