// web_app/state.rs - State behind the directory page
//
// Kept free of any Leptos types so the fetch/skip/apply rules can be
// exercised with plain unit tests. The page holds one `DirectoryState`
// inside a signal and calls these methods from its effects.

use std::fmt::Display;

use crate::web_app::model::{Business, DirectoryFilters};
use crate::web_app::query::BusinessQuery;

/// Number of placeholder cards shown while a fetch is outstanding
pub const SKELETON_CARD_COUNT: usize = 6;

/// Identifies one business fetch. Later fetches carry larger tickets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// What the page should do after a filter change
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchPlan {
    /// Default filters: results were cleared, no read is issued
    Skip,
    /// Issue exactly this query and report back with the ticket
    Fetch { ticket: FetchTicket, query: BusinessQuery },
}

/// Result of handing a fetch response back to the state
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied { count: usize },
    /// The read failed; previous results were kept
    Failed { message: String },
    /// A newer fetch was started (or filters were reset) since this ticket
    Stale,
}

/// The three mutually exclusive renderings of the results area
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultsView {
    Loading,
    Results,
    Empty,
}

#[derive(Clone, Debug, Default)]
pub struct DirectoryState {
    businesses: Vec<Business>,
    categories: Vec<String>,
    categories_requested: bool,
    loading: bool,
    latest: u64,
}

impl DirectoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns true the first time only; categories load once per mount
    pub fn begin_categories_load(&mut self) -> bool {
        !std::mem::replace(&mut self.categories_requested, true)
    }

    /// Store loaded categories. A failure leaves the list empty and hands
    /// back the message for logging.
    pub fn finish_categories_load<E: Display>(
        &mut self,
        result: Result<Vec<String>, E>,
    ) -> Option<String> {
        match result {
            Ok(names) => {
                self.categories = names;
                None
            }
            Err(e) => {
                self.categories.clear();
                Some(e.to_string())
            }
        }
    }

    /// React to a filter change.
    ///
    /// Default filters clear the results, stop the loading indicator, and
    /// invalidate any fetch still in flight. Anything else marks the page
    /// as loading and returns the query to issue.
    pub fn begin_fetch(&mut self, filters: &DirectoryFilters) -> FetchPlan {
        self.latest += 1;
        let ticket = FetchTicket(self.latest);

        match BusinessQuery::from_filters(filters) {
            None => {
                self.businesses.clear();
                self.loading = false;
                FetchPlan::Skip
            }
            Some(query) => {
                self.loading = true;
                FetchPlan::Fetch { ticket, query }
            }
        }
    }

    /// Apply a fetch response if it belongs to the latest ticket.
    ///
    /// Rows replace the list wholesale. Errors keep the previous rows.
    /// Loading is cleared last in both cases; stale responses change nothing.
    pub fn finish_fetch<E: Display>(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Business>, E>,
    ) -> FetchOutcome {
        if ticket.0 != self.latest {
            return FetchOutcome::Stale;
        }

        let outcome = match result {
            Ok(rows) => {
                let count = rows.len();
                self.businesses = rows;
                FetchOutcome::Applied { count }
            }
            Err(e) => FetchOutcome::Failed { message: e.to_string() },
        };
        self.loading = false;
        outcome
    }

    pub fn view(&self) -> ResultsView {
        if self.loading {
            ResultsView::Loading
        } else if !self.businesses.is_empty() {
            ResultsView::Results
        } else {
            ResultsView::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_empty() {
        let state = DirectoryState::new();
        assert!(!state.is_loading());
        assert!(state.businesses().is_empty());
        assert!(state.categories().is_empty());
        assert_eq!(state.view(), ResultsView::Empty);
    }

    #[test]
    fn test_tickets_increase() {
        let mut state = DirectoryState::new();
        let filters = DirectoryFilters { search: "tacos".into(), ..Default::default() };

        let first = match state.begin_fetch(&filters) {
            FetchPlan::Fetch { ticket, .. } => ticket,
            FetchPlan::Skip => panic!("expected a fetch"),
        };
        let second = match state.begin_fetch(&filters) {
            FetchPlan::Fetch { ticket, .. } => ticket,
            FetchPlan::Skip => panic!("expected a fetch"),
        };
        assert!(second > first);
        assert_eq!(second.sequence(), first.sequence() + 1);
    }
}
