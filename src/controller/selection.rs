//! Suggestion panel state and keyboard navigation.

use crate::domain::suggestion::Suggestion;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    OpenEmpty,
    OpenWithResults {
        highlighted: usize,
    },
}

/// Displayed suggestions together with the panel state.
///
/// Closing the panel keeps the suggestions so that focusing the input can
/// show them again; [`SuggestionPanel::reset`] drops them.
#[derive(Clone, Debug, Default)]
pub struct SuggestionPanel {
    state: PanelState,
    suggestions: Vec<Suggestion>,
}

impl SuggestionPanel {
    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn is_open(&self) -> bool {
        self.state != PanelState::Closed
    }

    /// Replaces the displayed set with the results of a completed cycle.
    pub fn show(&mut self, suggestions: Vec<Suggestion>) {
        self.state = if suggestions.is_empty() {
            PanelState::OpenEmpty
        } else {
            PanelState::OpenWithResults { highlighted: 0 }
        };
        self.suggestions = suggestions;
    }

    pub fn close(&mut self) {
        self.state = PanelState::Closed;
    }

    pub fn reset(&mut self) {
        self.state = PanelState::Closed;
        self.suggestions.clear();
    }

    /// Re-opens a closed panel when suggestions are retained.
    pub fn reopen(&mut self) {
        if self.state == PanelState::Closed && !self.suggestions.is_empty() {
            self.state = PanelState::OpenWithResults { highlighted: 0 };
        }
    }

    pub fn move_down(&mut self) {
        if let PanelState::OpenWithResults { highlighted } = self.state {
            let len = self.suggestions.len();
            self.state = PanelState::OpenWithResults {
                highlighted: (highlighted + 1) % len,
            };
        }
    }

    pub fn move_up(&mut self) {
        if let PanelState::OpenWithResults { highlighted } = self.state {
            let len = self.suggestions.len();
            self.state = PanelState::OpenWithResults {
                highlighted: (highlighted + len - 1) % len,
            };
        }
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        match self.state {
            PanelState::OpenWithResults { highlighted } if highlighted < self.suggestions.len() => {
                Some(highlighted)
            }
            _ => None,
        }
    }

    pub fn highlighted(&self) -> Option<&Suggestion> {
        self.highlighted_index()
            .and_then(|index| self.suggestions.get(index))
    }

    /// Row under the pointer; rows are only clickable while the panel is open.
    pub fn at(&self, index: usize) -> Option<&Suggestion> {
        if self.is_open() {
            self.suggestions.get(index)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::suggestion::SuggestionPayload;
    use crate::domain::types::EntityType;

    fn suggestions(count: usize) -> Vec<Suggestion> {
        (0..count)
            .map(|i| Suggestion {
                id: i.to_string(),
                entity_type: EntityType::Dress,
                title: format!("Robe {i}"),
                subtitle: None,
                description: None,
                payload: SuggestionPayload::default(),
            })
            .collect()
    }

    #[test]
    fn results_open_with_first_row_highlighted() {
        let mut panel = SuggestionPanel::default();
        assert_eq!(panel.state(), PanelState::Closed);
        panel.show(suggestions(3));
        assert_eq!(panel.state(), PanelState::OpenWithResults { highlighted: 0 });
    }

    #[test]
    fn empty_results_open_empty_panel() {
        let mut panel = SuggestionPanel::default();
        panel.show(Vec::new());
        assert_eq!(panel.state(), PanelState::OpenEmpty);
        assert!(panel.highlighted().is_none());
    }

    #[test]
    fn arrows_wrap_in_both_directions() {
        let mut panel = SuggestionPanel::default();
        panel.show(suggestions(3));
        panel.move_down();
        panel.move_down();
        panel.move_up();
        assert_eq!(panel.highlighted_index(), Some(1));

        let mut panel = SuggestionPanel::default();
        panel.show(suggestions(3));
        panel.move_up();
        assert_eq!(panel.highlighted_index(), Some(2));
        panel.move_down();
        assert_eq!(panel.highlighted_index(), Some(0));
    }

    #[test]
    fn arrows_are_ignored_without_results() {
        let mut panel = SuggestionPanel::default();
        panel.move_down();
        assert_eq!(panel.state(), PanelState::Closed);

        panel.show(Vec::new());
        panel.move_up();
        assert_eq!(panel.state(), PanelState::OpenEmpty);
    }

    #[test]
    fn close_keeps_suggestions_for_reopen() {
        let mut panel = SuggestionPanel::default();
        panel.show(suggestions(2));
        panel.move_down();
        panel.close();
        assert!(panel.highlighted().is_none());
        assert!(panel.at(0).is_none());

        panel.reopen();
        assert_eq!(panel.highlighted_index(), Some(0));

        panel.reset();
        panel.reopen();
        assert_eq!(panel.state(), PanelState::Closed);
    }
}
