//! Presentation layer
//!
//! Listing and batch logic report what happened through [`Reporter`]; they
//! never print themselves. [`console::ConsoleReporter`] is the terminal
//! rendering used by the binary.

use std::path::Path;

use crate::batch::{Action, BatchSummary, MutationOutcome};
use crate::inventory::Listing;

pub mod console;
#[cfg(test)]
pub mod recording;

pub use console::ConsoleReporter;

/// Receives the user-facing events of a command run
pub trait Reporter {
    /// The listing request was answered with a non-success status
    fn listing_failed(&self, status: u16, body: &str);

    /// A listing was fetched and filtered
    fn listing(&self, account: &str, listing: &Listing);

    /// The list file was written
    fn list_saved(&self, path: &Path);

    /// The list file does not exist
    fn list_missing(&self, path: &Path);

    /// The list file was read
    fn list_loaded(&self, path: &Path, count: usize);

    /// No names to process
    fn nothing_to_do(&self, action: Action);

    /// The names about to be processed, shown before asking for confirmation
    fn batch_preview(&self, action: Action, names: &[String]);

    /// The confirmation was declined
    fn batch_cancelled(&self, action: Action);

    /// One repository was processed
    fn mutation(&self, outcome: &MutationOutcome);

    /// All repositories were processed
    fn batch_summary(&self, action: Action, summary: &BatchSummary);
}
