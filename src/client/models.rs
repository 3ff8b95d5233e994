//! GitHub API response models

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Repository as returned by the repository listing endpoints.
///
/// Only the fields the lister renders are kept; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    /// Repository name (path segment under the owner)
    pub name: String,

    /// Owning account
    pub owner: Owner,

    /// Whether the repository is private
    #[serde(default)]
    pub private: bool,

    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,

    /// Web URL
    pub html_url: String,

    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Repository owner
#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    pub login: String,
}

/// Public/private classification of a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

impl Repository {
    pub fn visibility(&self) -> Visibility {
        if self.private {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }

    /// Whether the repository belongs to `account` (exact, case-sensitive match)
    pub fn is_owned_by(&self, account: &str) -> bool {
        self.owner.login == account
    }

    /// Creation time in the API's own `2024-01-31T12:00:00Z` form
    pub fn created_at_display(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Body of `PATCH /repos/{owner}/{repo}`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateRepositoryRequest {
    pub private: bool,
}
