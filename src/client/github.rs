//! GitHub API client implementation

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode};

use super::models::{Repository, UpdateRepositoryRequest};
use super::{GitHubApi, ListQuery, RepoScope};
use crate::config::Config;
use crate::error::{ApiError, Result};

/// Media type for the v3 REST API
const ACCEPT_V3: &str = "application/vnd.github.v3+json";

/// GitHub rejects requests without a User-Agent
const USER_AGENT: &str = concat!("repo-sweep/", env!("CARGO_PKG_VERSION"));

/// GitHub API client authenticated with a personal access token.
///
/// No request timeout is configured; every call blocks until GitHub answers.
pub struct GitHubClient {
    http: HttpClient,
    base_url: String,
    account: String,
    token: String,
}

impl GitHubClient {
    /// Create a client for the account and endpoint in `config`
    pub fn new(config: &Config) -> Result<Self> {
        let http = HttpClient::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api_base.clone(),
            account: config.account.clone(),
            token: config.token.clone(),
        })
    }

    /// Build an authenticated request against `path`
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        self.http
            .request(method, url)
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", ACCEPT_V3)
    }

    /// Path of a repository owned by the account
    fn repo_path(&self, repo: &str) -> String {
        format!("/repos/{}/{}", self.account, repo)
    }

    /// Send the request and return the response if its status is `expected`.
    ///
    /// Any other status is turned into [`ApiError::UnexpectedStatus`] carrying
    /// the raw body.
    async fn send_expecting(
        &self,
        request: RequestBuilder,
        expected: StatusCode,
    ) -> Result<Response> {
        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();
        debug!("Response status {}", status);

        if status == expected {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<unreadable body: {}>", e));
        Err(ApiError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        }
        .into())
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn list_repos(&self, query: &ListQuery) -> Result<Vec<Repository>> {
        let path = match query.scope {
            RepoScope::Authenticated => "/user/repos".to_string(),
            RepoScope::Public => format!("/users/{}/repos", self.account),
        };

        let request = self
            .request(Method::GET, &path)
            .query(&query.to_query_params());
        let response = self.send_expecting(request, StatusCode::OK).await?;

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;
        let repos: Vec<Repository> = serde_json::from_str(&text).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse repository list: {}", e))
        })?;

        debug!("Fetched {} repositories", repos.len());
        Ok(repos)
    }

    async fn set_private(&self, repo: &str) -> Result<()> {
        let request = self
            .request(Method::PATCH, &self.repo_path(repo))
            .json(&UpdateRepositoryRequest { private: true });
        self.send_expecting(request, StatusCode::OK).await?;
        Ok(())
    }

    async fn delete_repo(&self, repo: &str) -> Result<()> {
        let request = self.request(Method::DELETE, &self.repo_path(repo));
        self.send_expecting(request, StatusCode::NO_CONTENT).await?;
        Ok(())
    }
}
