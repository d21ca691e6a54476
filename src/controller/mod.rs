//! Quick-search controller: turns input events into search cycles, applies
//! cycle results and drives the suggestion panel.
//!
//! The controller never touches a clock or the network. Callers pass the
//! current instant in and execute the returned [`Effect`]s; [`driver`] does
//! this on a tokio event loop.

use std::time::Instant;

use crate::domain::navigation::NavigationRequest;
use crate::domain::suggestion::Suggestion;
use crate::domain::types::{EntityFilter, SearchQuery, SearchTerm};
use crate::services::{ServiceError, ServiceResult};

pub mod cycle;
pub mod debounce;
pub mod driver;
pub mod selection;

use cycle::{CycleId, CycleTracker};
use debounce::{DebounceAction, Debouncer};
use selection::{PanelState, SuggestionPanel};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    QueryChanged(String),
    FilterChanged(EntityFilter),
    /// Key pressed while the search input has focus.
    Key(Key),
    /// Global modifier + K shortcut.
    Shortcut,
    Focus,
    ClickOutside,
    ClickSuggestion(usize),
    /// The surrounding application displays another page.
    RouteChanged(String),
}

/// Work the host must perform on behalf of the controller.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Run one fan-out cycle and report back with [`QuickSearchController::complete`].
    Dispatch {
        cycle: CycleId,
        term: SearchTerm,
        filter: EntityFilter,
    },
    Navigate(NavigationRequest),
    FocusInput,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchStatus {
    #[default]
    Idle,
    Searching,
    Failed,
}

/// What the panel below the input should display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PanelContent {
    #[default]
    Hidden,
    Searching,
    NoResults,
    Failed,
    Suggestions {
        items: Vec<Suggestion>,
        highlighted: usize,
    },
}

/// Snapshot of everything a view needs to render the search bar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PanelView {
    pub text: String,
    pub filter: EntityFilter,
    pub placeholder: &'static str,
    pub content: PanelContent,
}

#[derive(Debug, Default)]
pub struct QuickSearchController {
    query: SearchQuery,
    current_path: String,
    debouncer: Debouncer,
    cycles: CycleTracker,
    panel: SuggestionPanel,
    status: SearchStatus,
}

impl QuickSearchController {
    pub fn new(current_path: impl Into<String>) -> Self {
        Self {
            current_path: current_path.into(),
            ..Default::default()
        }
    }

    pub fn with_debouncer(mut self, debouncer: Debouncer) -> Self {
        self.debouncer = debouncer;
        self
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn panel(&self) -> &SuggestionPanel {
        &self.panel
    }

    /// Instant at which [`QuickSearchController::tick`] should run next.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    pub fn handle(&mut self, event: InputEvent, now: Instant) -> Vec<Effect> {
        match event {
            InputEvent::QueryChanged(text) => {
                self.query.text = text;
                self.restart(now);
                Vec::new()
            }
            InputEvent::FilterChanged(filter) => {
                self.query.entity_filter = filter;
                self.restart(now);
                Vec::new()
            }
            InputEvent::Key(Key::ArrowDown) => {
                self.panel.move_down();
                Vec::new()
            }
            InputEvent::Key(Key::ArrowUp) => {
                self.panel.move_up();
                Vec::new()
            }
            InputEvent::Key(Key::Enter) => match self.panel.highlighted().cloned() {
                Some(suggestion) => self.commit(suggestion),
                None => Vec::new(),
            },
            InputEvent::Key(Key::Escape) | InputEvent::ClickOutside => {
                self.status = SearchStatus::Idle;
                self.panel.close();
                Vec::new()
            }
            InputEvent::ClickSuggestion(index) => match self.panel.at(index).cloned() {
                Some(suggestion) => self.commit(suggestion),
                None => Vec::new(),
            },
            InputEvent::Shortcut => vec![Effect::FocusInput],
            InputEvent::Focus => {
                self.panel.reopen();
                Vec::new()
            }
            InputEvent::RouteChanged(path) => {
                self.current_path = path;
                Vec::new()
            }
        }
    }

    /// Fires the debounce timer if it is due.
    pub fn tick(&mut self, now: Instant) -> Vec<Effect> {
        let DebounceAction::Commit(query) = self.debouncer.poll(now) else {
            return Vec::new();
        };

        let Ok(term) = query.term() else {
            return Vec::new();
        };
        let cycle = self.cycles.begin();
        vec![Effect::Dispatch {
            cycle,
            term,
            filter: query.entity_filter,
        }]
    }

    /// Applies the outcome of `cycle`. Returns `false` when the cycle was
    /// superseded and its outcome discarded.
    pub fn complete(&mut self, cycle: CycleId, outcome: ServiceResult<Vec<Suggestion>>) -> bool {
        if !self.cycles.is_current(cycle) {
            log::debug!("Discarding results of superseded search cycle {cycle}");
            return false;
        }

        match outcome {
            Ok(suggestions) => {
                self.status = SearchStatus::Idle;
                self.panel.show(suggestions);
            }
            Err(ServiceError::AllSourcesFailed) => {
                self.status = SearchStatus::Failed;
                self.panel.reset();
            }
        }
        true
    }

    pub fn view(&self) -> PanelView {
        let content = match (self.status, self.panel.state()) {
            (SearchStatus::Searching, _) => PanelContent::Searching,
            (SearchStatus::Failed, _) => PanelContent::Failed,
            (SearchStatus::Idle, PanelState::Closed) => PanelContent::Hidden,
            (SearchStatus::Idle, PanelState::OpenEmpty) => PanelContent::NoResults,
            (SearchStatus::Idle, PanelState::OpenWithResults { highlighted }) => {
                PanelContent::Suggestions {
                    items: self.panel.suggestions().to_vec(),
                    highlighted,
                }
            }
        };

        PanelView {
            text: self.query.text.clone(),
            filter: self.query.entity_filter,
            placeholder: self.query.entity_filter.placeholder(),
            content,
        }
    }

    /// Any change of the query supersedes outstanding cycles and restarts
    /// the quiet period.
    fn restart(&mut self, now: Instant) {
        self.cycles.invalidate();
        match self.debouncer.input(self.query.clone(), now) {
            DebounceAction::Clear => self.clear(),
            _ => self.status = SearchStatus::Searching,
        }
    }

    fn clear(&mut self) {
        self.status = SearchStatus::Idle;
        self.panel.reset();
    }

    fn commit(&mut self, suggestion: Suggestion) -> Vec<Effect> {
        let request = NavigationRequest::for_suggestion(&suggestion, &self.current_path);
        self.query.text.clear();
        self.debouncer.cancel();
        self.cycles.invalidate();
        self.clear();
        vec![Effect::Navigate(request)]
    }
}
