//! Bordered query field with its affordances.
//!
//! ```text
//! ╭──────────────────────────────────────────────────────────────╮
//! │lever                          ⏎ Enter  │  ✕   Filters ▾ │
//! ╰──────────────────────────────────────────────────────────────╯
//! ```

use crate::app::state::AppState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub const HEIGHT: u16 = 3;
pub const ENTER_BADGE: &str = " ⏎ Enter ";
pub const DIVIDER: &str = " │ ";
pub const CLEAR: &str = " ✕ ";
pub const MICROPHONE: &str = " ◉ ";
pub const FILTER_BUTTON: &str = " Filters ▾ ";
pub const FILTER_BUTTON_OPEN: &str = " Filters ▴ ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchRegions {
    pub block: Rect,
    pub input: Rect,
    pub enter_badge: Rect,
    pub divider: Rect,
    pub control: Rect,
    pub filter_button: Rect,
}

#[must_use]
pub fn regions(area: Rect) -> SearchRegions {
    let inner = block().inner(area);
    let row = Rect {
        height: inner.height.min(1),
        ..inner
    };
    let [input, enter_badge, divider, control, filter_button] = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(9),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(11),
    ])
    .areas(row);

    SearchRegions {
        block: area,
        input,
        enter_badge,
        divider,
        control,
        filter_button,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchHit {
    Input,
    EnterBadge,
    Clear,
    FilterButton,
}

fn inside(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

#[must_use]
pub fn hit(regions: &SearchRegions, state: &AppState, column: u16, row: u16) -> Option<SearchHit> {
    let affordances = &state.search.affordances;
    if inside(regions.filter_button, column, row) {
        Some(SearchHit::FilterButton)
    } else if inside(regions.control, column, row) && affordances.clear_button {
        Some(SearchHit::Clear)
    } else if inside(regions.enter_badge, column, row) && affordances.enter_badge {
        Some(SearchHit::EnterBadge)
    } else if inside(regions.block, column, row) {
        Some(SearchHit::Input)
    } else {
        None
    }
}

fn block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

pub struct SearchBox<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for SearchBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let theme = self.theme;
        let affordances = &self.state.search.affordances;
        let regions = regions(area);

        let border = if affordances.input_active {
            theme.border_focus
        } else {
            theme.border
        };
        block().border_style(border).render(area, buf);

        if regions.input.width > 0 && regions.input.height > 0 {
            (&self.state.search.input).render(regions.input, buf);
        }

        let mut draw = |text: &'static str, style: Style, rect: Rect| {
            if rect.width > 0 && rect.height > 0 {
                Paragraph::new(Span::styled(text, style)).render(rect, buf);
            }
        };
        if affordances.enter_badge {
            draw(ENTER_BADGE, theme.enter_badge, regions.enter_badge);
        }
        if affordances.divider {
            draw(DIVIDER, theme.divider, regions.divider);
        }
        if affordances.clear_button {
            draw(CLEAR, theme.control, regions.control);
        } else if affordances.microphone {
            draw(MICROPHONE, theme.control, regions.control);
        }
        if self.state.dropdown.is_some() {
            draw(FILTER_BUTTON_OPEN, theme.filter_button_open, regions.filter_button);
        } else {
            draw(FILTER_BUTTON, theme.filter_button, regions.filter_button);
        }
    }
}
