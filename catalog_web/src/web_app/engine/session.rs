// web_app/engine/session.rs - Ordering of overlapping filter passes
//
// Every control event starts a pass, and passes can finish in any order.
// `FilterSession` numbers them; only the outcome of the most recently
// started pass is shown, and it only contributes its clamped page number
// to the state.

use crate::web_app::model::Product;

use super::{FilterOutcome, FilterState, Page};

/// Filter state plus the generation of the latest pass started from it
#[derive(Clone, Debug, PartialEq)]
pub struct FilterSession {
    state: FilterState,
    generation: u64,
}

impl FilterSession {
    pub fn new(state: FilterState) -> Self {
        Self {
            state,
            generation: 0,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Generation of the most recently started pass
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Adopt `next` and start a pass for it. Returns the pass generation;
    /// any pass started earlier is stale from now on.
    pub fn begin(&mut self, next: FilterState) -> u64 {
        self.state = next;
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Accept the outcome of pass `generation`.
    ///
    /// Returns the page to show, or `None` when a newer pass has started
    /// since. Only the clamped page number is taken from the outcome.
    pub fn complete(&mut self, generation: u64, outcome: FilterOutcome) -> Option<Page<Product>> {
        if !self.is_current(generation) {
            tracing::debug!(
                generation,
                latest = self.generation,
                "discarding stale filter pass"
            );
            return None;
        }
        self.state = self.state.clone().with_page(outcome.page.number);
        Some(outcome.page)
    }
}
