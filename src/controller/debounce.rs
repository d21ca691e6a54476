//! Debounce decision logic, independent of any timer.

use std::time::{Duration, Instant};

use crate::DEBOUNCE_DELAY;
use crate::domain::types::SearchQuery;

/// What the host should do after feeding the debouncer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DebounceAction {
    /// Nothing is pending.
    Idle,
    /// A commit is pending; wake up again after the given delay.
    Wait(Duration),
    /// The quiet period elapsed; the query should be searched.
    Commit(SearchQuery),
    /// The query is too short; displayed suggestions should be dropped.
    Clear,
}

#[derive(Clone, Debug)]
struct Pending {
    query: SearchQuery,
    deadline: Instant,
}

/// Turns a burst of query changes into at most one commit per quiet period.
#[derive(Clone, Debug)]
pub struct Debouncer {
    quiet_period: Duration,
    pending: Option<Pending>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_DELAY)
    }
}

impl Debouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    /// Records a change of the query text or filter at `now`.
    ///
    /// Replaces any pending commit. Queries below the minimum length cancel
    /// the pending commit and return [`DebounceAction::Clear`].
    pub fn input(&mut self, query: SearchQuery, now: Instant) -> DebounceAction {
        if query.term().is_err() {
            self.pending = None;
            return DebounceAction::Clear;
        }

        self.pending = Some(Pending {
            query,
            deadline: now + self.quiet_period,
        });
        DebounceAction::Wait(self.quiet_period)
    }

    /// Decides what to do at `now`. A commit is returned once.
    pub fn poll(&mut self, now: Instant) -> DebounceAction {
        let Some(pending) = self.pending.as_ref() else {
            return DebounceAction::Idle;
        };

        if now < pending.deadline {
            return DebounceAction::Wait(pending.deadline - now);
        }

        match self.pending.take() {
            Some(pending) => DebounceAction::Commit(pending.query),
            None => DebounceAction::Idle,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Instant at which the pending commit is due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }
}
