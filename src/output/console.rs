//! Terminal rendering of command events

use std::path::Path;

use colored::Colorize;

use super::Reporter;
use crate::batch::{Action, BatchSummary, MutationOutcome, Outcome};
use crate::client::{Repository, Visibility};
use crate::inventory::Listing;

const RULE_WIDTH: usize = 60;

/// Placeholder for repositories without a description
const NO_DESCRIPTION: &str = "(no description)";

/// Prints every event to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn listing_failed(&self, status: u16, body: &str) {
        println!("{} HTTP status {}", "Error:".red(), status);
        println!("{}", body);
    }

    fn listing(&self, account: &str, listing: &Listing) {
        print!("{}", render_listing(account, listing));
    }

    fn list_saved(&self, path: &Path) {
        println!("Saved repository names to {}", path.display());
    }

    fn list_missing(&self, path: &Path) {
        println!("{} {} not found", "Error:".red(), path.display());
    }

    fn list_loaded(&self, path: &Path, count: usize) {
        println!(
            "Loaded {} repository names from {}",
            count,
            path.display()
        );
    }

    fn nothing_to_do(&self, action: Action) {
        println!("Nothing to do: no repositories to {}", action.verb());
    }

    fn batch_preview(&self, action: Action, names: &[String]) {
        print!("{}", render_preview(action, names));
    }

    fn batch_cancelled(&self, action: Action) {
        println!("Cancelled: no repositories were {}", action.past_tense());
    }

    fn mutation(&self, outcome: &MutationOutcome) {
        println!("{}", render_outcome(outcome));
    }

    fn batch_summary(&self, action: Action, summary: &BatchSummary) {
        print!("{}", render_summary(action, summary));
    }
}

/// Visibility marker shown next to each repository
pub fn visibility_glyph(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Private => "🔒 private",
        Visibility::Public => "🌐 public",
    }
}

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

fn render_repo(position: usize, repo: &Repository) -> String {
    let description = repo
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(NO_DESCRIPTION);

    format!(
        "{}. {} ({})\n   Description: {}\n   URL: {}\n   Created: {}\n",
        position,
        repo.name,
        visibility_glyph(repo.visibility()),
        description,
        repo.html_url,
        repo.created_at_display()
    )
}

/// Render the repository records and the final tally
pub fn render_listing(account: &str, listing: &Listing) -> String {
    let mut out = format!("Repositories for {}:\n{}\n", account, rule());

    for entry in &listing.repos {
        out.push_str(&render_repo(entry.position, &entry.repo));
        out.push_str(&rule());
        out.push('\n');
    }

    out.push_str(&format!(
        "Total: {} repositories (public: {}, private: {})\n",
        listing.repos.len(),
        listing.public_count,
        listing.private_count
    ));
    out
}

/// Render the numbered list shown before the confirmation prompt
pub fn render_preview(action: Action, names: &[String]) -> String {
    let mut out = format!(
        "The following {} repositories will be {}:\n",
        names.len(),
        action.past_tense()
    );
    for (i, name) in names.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, name));
    }
    out
}

/// Render one mutation result
pub fn render_outcome(outcome: &MutationOutcome) -> String {
    match &outcome.outcome {
        Outcome::Succeeded => format!(
            "{} Repository '{}' {}",
            "✓".green(),
            outcome.repo,
            outcome.action.past_tense()
        ),
        Outcome::Failed { body, .. } => format!(
            "{} Failed to {} repository '{}': HTTP status {}\n{}",
            "✗".red(),
            outcome.action.verb(),
            outcome.repo,
            outcome.status(),
            body
        ),
    }
}

/// Render the two-line success/failure summary
pub fn render_summary(action: Action, summary: &BatchSummary) -> String {
    format!(
        "\nResults ({}):\nSucceeded: {}\nFailed: {}\n",
        action.verb(),
        summary.succeeded,
        summary.failed
    )
}
