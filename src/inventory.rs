//! Repository listing
//!
//! Fetches a single page of repositories, keeps the ones owned by the
//! configured account and counts them by visibility.

use log::{debug, warn};

use crate::client::{GitHubApi, ListQuery, RepoScope, Repository, Visibility};
use crate::config::Config;
use crate::error::{ApiError, Error, Result};
use crate::output::Reporter;

/// A repository kept by the listing, with its 1-based position in the API
/// response.
#[derive(Debug, Clone)]
pub struct ListedRepo {
    pub position: usize,
    pub repo: Repository,
}

/// Owned repositories in response order plus visibility tallies
#[derive(Debug, Clone, Default)]
pub struct Listing {
    pub repos: Vec<ListedRepo>,
    pub public_count: usize,
    pub private_count: usize,
}

impl Listing {
    /// Keep the repositories owned by `account`.
    ///
    /// Positions refer to the unfiltered response, so skipped entries leave
    /// gaps in the numbering. Private entries are dropped for public-only
    /// queries even if the backend returned them.
    pub fn from_response(repos: Vec<Repository>, account: &str, scope: RepoScope) -> Self {
        let mut listing = Listing::default();

        for (i, repo) in repos.into_iter().enumerate() {
            if !repo.is_owned_by(account) {
                debug!("Skipping {} owned by {}", repo.name, repo.owner.login);
                continue;
            }

            match repo.visibility() {
                Visibility::Private if scope == RepoScope::Public => continue,
                Visibility::Private => listing.private_count += 1,
                Visibility::Public => listing.public_count += 1,
            }

            listing.repos.push(ListedRepo {
                position: i + 1,
                repo,
            });
        }

        listing
    }

    /// Repository names in response order
    pub fn names(&self) -> Vec<String> {
        self.repos.iter().map(|e| e.repo.name.clone()).collect()
    }
}

/// List the account's repositories.
///
/// A non-success status is reported and yields an empty listing. Transport
/// and parse errors propagate.
pub async fn list_owned(
    client: &dyn GitHubApi,
    config: &Config,
    query: &ListQuery,
    reporter: &dyn Reporter,
) -> Result<Listing> {
    let repos = match client.list_repos(query).await {
        Ok(repos) => repos,
        Err(Error::Api(ApiError::UnexpectedStatus { status, body })) => {
            reporter.listing_failed(status, &body);
            return Ok(Listing::default());
        }
        Err(err) => return Err(err),
    };

    if query.per_page > 0 && repos.len() as i64 == query.per_page {
        warn!(
            "Received a full page of {} repositories; only the first page is listed, more may exist",
            repos.len()
        );
    }

    let listing = Listing::from_response(repos, &config.account, query.scope);
    reporter.listing(&config.account, &listing);
    Ok(listing)
}
