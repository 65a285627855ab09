//! Suggestions screen: query completions followed by quick links.
//!
//! Row layout inside the area:
//!
//! ```text
//! Suggesties
//!   <query> leven
//!   <query> overlijden
//!   <query> aanrijding
//!
//! Snelle links
//!   → Veelgestelde vragen over <query>
//!   ...
//! ```
//!
//! Rows are numbered for the stagger in the same order: suggestions first,
//! then quick links.

use crate::app::state::AppState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub const SUGGESTIONS_TITLE: &str = "Suggesties";
pub const QUICK_LINKS_TITLE: &str = "Snelle links";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionHit {
    Suggestion(usize),
    QuickLink(usize),
}

impl SuggestionHit {
    /// Position in the stagger order.
    #[must_use]
    pub fn stagger_index(self, suggestion_count: usize) -> usize {
        match self {
            Self::Suggestion(i) => i,
            Self::QuickLink(i) => suggestion_count + i,
        }
    }
}

/// Row under screen row `row`, if any row of text is drawn there.
#[must_use]
pub fn row_hit(area: Rect, state: &AppState, row: u16) -> Option<SuggestionHit> {
    if row < area.y || row >= area.bottom() {
        return None;
    }
    let line = usize::from(row - area.y);
    let suggestions = state.search.suggestions.len();
    let links_title = suggestions + 2;

    let hit = if (1..=suggestions).contains(&line) {
        SuggestionHit::Suggestion(line - 1)
    } else if line > links_title && line <= links_title + state.search.quick_links.len() {
        SuggestionHit::QuickLink(line - links_title - 1)
    } else {
        return None;
    };

    state
        .view
        .stagger
        .is_revealed(hit.stagger_index(suggestions))
        .then_some(hit)
}

pub struct SuggestionsView<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for SuggestionsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let theme = self.theme;
        let search = &self.state.search;
        let stagger = &self.state.view.stagger;

        let mut lines = vec![Line::from(Span::styled(SUGGESTIONS_TITLE, theme.section_title))];
        for (i, suggestion) in search.suggestions.iter().enumerate() {
            if stagger.is_revealed(i) {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(suggestion.query.clone(), theme.suggestion_query),
                    Span::styled(format!(" {}", suggestion.suffix), theme.suggestion_suffix),
                ]));
            } else {
                lines.push(Line::default());
            }
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(QUICK_LINKS_TITLE, theme.section_title)));
        let offset = search.suggestions.len();
        for (i, link) in search.quick_links.iter().enumerate() {
            if stagger.is_revealed(offset + i) {
                lines.push(Line::from(vec![
                    Span::styled("  → ", theme.quick_link_icon),
                    Span::styled(link.before, theme.quick_link),
                    Span::styled(link.query.clone(), theme.suggestion_query),
                    Span::styled(link.after, theme.quick_link),
                ]));
            } else {
                lines.push(Line::default());
            }
        }

        Paragraph::new(lines).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_for(query: &str) -> AppState<'static> {
        let mut state = AppState::default();
        state.search.set_query(query);
        state.search.refresh_suggestions();
        state.view.stagger.start(state.search.row_count());
        state.view.stagger.complete();
        state
    }

    #[test]
    fn test_row_hit_maps_lines() {
        let state = state_for("lever");
        let area = Rect::new(0, 5, 60, 12);
        assert_eq!(row_hit(area, &state, 5), None);
        assert_eq!(row_hit(area, &state, 6), Some(SuggestionHit::Suggestion(0)));
        assert_eq!(row_hit(area, &state, 8), Some(SuggestionHit::Suggestion(2)));
        assert_eq!(row_hit(area, &state, 9), None);
        assert_eq!(row_hit(area, &state, 10), None);
        assert_eq!(row_hit(area, &state, 11), Some(SuggestionHit::QuickLink(0)));
        assert_eq!(row_hit(area, &state, 13), Some(SuggestionHit::QuickLink(2)));
        assert_eq!(row_hit(area, &state, 14), None);
    }

    #[test]
    fn test_unrevealed_rows_are_not_clickable() {
        let mut state = state_for("lever");
        state.view.stagger.start(6);
        state.view.stagger.step(1);
        let area = Rect::new(0, 0, 60, 12);
        assert_eq!(row_hit(area, &state, 2), Some(SuggestionHit::Suggestion(1)));
        assert_eq!(row_hit(area, &state, 3), None);
        assert_eq!(row_hit(area, &state, 6), None);
    }

    #[test]
    fn test_stagger_index_follows_suggestions() {
        assert_eq!(SuggestionHit::Suggestion(2).stagger_index(3), 2);
        assert_eq!(SuggestionHit::QuickLink(0).stagger_index(3), 3);
    }
}
