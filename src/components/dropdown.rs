use crate::app::state::AppState;
use crate::domain::filters::CATALOG;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

pub const WIDTH: u16 = 42;

/// Overlay rect hanging under `anchor` (the filter button), right-aligned to it.
#[must_use]
pub fn area(anchor: Rect, bounds: Rect) -> Rect {
    let height = u16::try_from(CATALOG.len()).unwrap_or(0) + 2;
    let width = WIDTH.min(bounds.width);
    let x = anchor
        .right()
        .saturating_sub(width)
        .clamp(bounds.x, bounds.right().saturating_sub(width));
    let y = anchor.bottom().min(bounds.bottom());
    Rect {
        x,
        y,
        width,
        height: height.min(bounds.bottom().saturating_sub(y)),
    }
}

/// Catalog index of the entry under `(column, row)`.
#[must_use]
pub fn entry_at(area: Rect, column: u16, row: u16) -> Option<usize> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    if column < inner.x || column >= inner.right() || row < inner.y || row >= inner.bottom() {
        return None;
    }
    let index = usize::from(row - inner.y);
    (index < CATALOG.len()).then_some(index)
}

#[must_use]
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

pub struct FilterDropdown<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for FilterDropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(dropdown) = self.state.dropdown else {
            return;
        };
        if area.width == 0 || area.height == 0 {
            return;
        }

        let lines: Vec<Line> = CATALOG
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let mark = if self.state.filters.contains(name) {
                    "✓ "
                } else {
                    "  "
                };
                let style = if i == dropdown.selected_index {
                    self.theme.list_selected
                } else {
                    self.theme.list_item
                };
                Line::from(vec![Span::styled(mark, self.theme.card), Span::styled(*name, style)])
            })
            .collect();

        let block = Block::default()
            .title(" Filters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        Clear.render(area, buf);
        Paragraph::new(lines).block(block).render(area, buf);
    }
}
