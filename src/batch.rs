//! Batch mutation of repositories listed in the list file
//!
//! A run moves through a fixed sequence: load the names, stop if there are
//! none, show them and ask for confirmation, stop unless the answer is `yes`,
//! then apply the action to every name in file order. Individual failures are
//! counted and never abort the batch.

use std::path::Path;

use log::debug;

use crate::client::GitHubApi;
use crate::error::{ApiError, Error, Result};
use crate::output::Reporter;
use crate::store;

/// Operation applied to each repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `PATCH /repos/{owner}/{repo}` with `{"private": true}`
    MakePrivate,
    /// `DELETE /repos/{owner}/{repo}`
    Delete,
}

impl Action {
    /// Status code GitHub answers with on success
    pub fn success_status(self) -> u16 {
        match self {
            Action::MakePrivate => 200,
            Action::Delete => 204,
        }
    }

    pub fn verb(self) -> &'static str {
        match self {
            Action::MakePrivate => "make private",
            Action::Delete => "delete",
        }
    }

    pub fn past_tense(self) -> &'static str {
        match self {
            Action::MakePrivate => "made private",
            Action::Delete => "deleted",
        }
    }

    /// Question put to the user before anything is changed
    pub fn prompt(self) -> String {
        format!("Type 'yes' to {} these repositories", self.verb())
    }
}

/// Result of a single mutation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed { status: u16, body: String },
}

/// A repository together with what happened to it
#[derive(Debug, Clone)]
pub struct MutationOutcome {
    pub repo: String,
    pub action: Action,
    pub outcome: Outcome,
}

impl MutationOutcome {
    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Succeeded
    }

    /// HTTP status the request was answered with
    pub fn status(&self) -> u16 {
        match &self.outcome {
            Outcome::Succeeded => self.action.success_status(),
            Outcome::Failed { status, .. } => *status,
        }
    }
}

/// Success and failure tallies; they always add up to the number of names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// How a batch run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchRun {
    /// The list was empty or missing
    NothingToDo,
    /// The confirmation was declined
    Cancelled,
    /// Every name was attempted
    Completed(BatchSummary),
}

/// Source of the confirmation answer
pub trait Confirm {
    /// Ask `prompt` and return the raw answer line
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// Whether an answer confirms the batch: `yes` in any letter case
pub fn is_confirmation(answer: &str) -> bool {
    answer.trim_end_matches(['\r', '\n']).to_lowercase() == "yes"
}

/// Apply `action` to one repository.
///
/// A refused request becomes a failed outcome; transport errors propagate.
pub async fn apply(client: &dyn GitHubApi, action: Action, repo: &str) -> Result<MutationOutcome> {
    let result = match action {
        Action::MakePrivate => client.set_private(repo).await,
        Action::Delete => client.delete_repo(repo).await,
    };

    let outcome = match result {
        Ok(()) => Outcome::Succeeded,
        Err(Error::Api(ApiError::UnexpectedStatus { status, body })) => {
            Outcome::Failed { status, body }
        }
        Err(err) => return Err(err),
    };

    Ok(MutationOutcome {
        repo: repo.to_string(),
        action,
        outcome,
    })
}

/// Confirm and apply `action` to every name.
pub async fn run(
    client: &dyn GitHubApi,
    action: Action,
    names: &[String],
    confirm: &mut dyn Confirm,
    reporter: &dyn Reporter,
) -> Result<BatchRun> {
    if names.is_empty() {
        reporter.nothing_to_do(action);
        return Ok(BatchRun::NothingToDo);
    }

    reporter.batch_preview(action, names);
    let answer = confirm.ask(&action.prompt())?;
    if !is_confirmation(&answer) {
        debug!("Confirmation declined with {:?}", answer);
        reporter.batch_cancelled(action);
        return Ok(BatchRun::Cancelled);
    }

    let mut summary = BatchSummary::default();
    for name in names {
        let outcome = apply(client, action, name).await?;
        if outcome.is_success() {
            summary.succeeded += 1;
        } else {
            summary.failed += 1;
        }
        reporter.mutation(&outcome);
    }

    debug!("Processed {} repositories", summary.total());
    reporter.batch_summary(action, &summary);
    Ok(BatchRun::Completed(summary))
}

/// Load names from the list file at `path` and [`run`] the batch on them.
///
/// A missing file is reported and treated as an empty list.
pub async fn run_from_file(
    client: &dyn GitHubApi,
    action: Action,
    path: &Path,
    confirm: &mut dyn Confirm,
    reporter: &dyn Reporter,
) -> Result<BatchRun> {
    let names = match store::load(path)? {
        Some(names) => {
            reporter.list_loaded(path, names.len());
            names
        }
        None => {
            reporter.list_missing(path);
            Vec::new()
        }
    };

    run(client, action, &names, confirm, reporter).await
}
