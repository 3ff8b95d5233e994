//! Reporter that records events instead of printing them

use std::cell::RefCell;
use std::path::Path;

use super::Reporter;
use crate::batch::{Action, BatchSummary, MutationOutcome};
use crate::inventory::Listing;

/// An event seen by [`RecordingReporter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ListingFailed(u16),
    Listing { count: usize },
    ListSaved,
    ListMissing,
    ListLoaded(usize),
    NothingToDo,
    Preview(Vec<String>),
    Cancelled,
    Mutation { repo: String, success: bool },
    Summary(BatchSummary),
}

/// Collects events for assertions
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: RefCell<Vec<Event>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    fn push(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

impl Reporter for RecordingReporter {
    fn listing_failed(&self, status: u16, _body: &str) {
        self.push(Event::ListingFailed(status));
    }

    fn listing(&self, _account: &str, listing: &Listing) {
        self.push(Event::Listing {
            count: listing.repos.len(),
        });
    }

    fn list_saved(&self, _path: &Path) {
        self.push(Event::ListSaved);
    }

    fn list_missing(&self, _path: &Path) {
        self.push(Event::ListMissing);
    }

    fn list_loaded(&self, _path: &Path, count: usize) {
        self.push(Event::ListLoaded(count));
    }

    fn nothing_to_do(&self, _action: Action) {
        self.push(Event::NothingToDo);
    }

    fn batch_preview(&self, _action: Action, names: &[String]) {
        self.push(Event::Preview(names.to_vec()));
    }

    fn batch_cancelled(&self, _action: Action) {
        self.push(Event::Cancelled);
    }

    fn mutation(&self, outcome: &MutationOutcome) {
        self.push(Event::Mutation {
            repo: outcome.repo.clone(),
            success: outcome.is_success(),
        });
    }

    fn batch_summary(&self, _action: Action, summary: &BatchSummary) {
        self.push(Event::Summary(summary.clone()));
    }
}
