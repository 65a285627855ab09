//! Bar of active filter pills shown under the search box.
//!
//! The bar is one row: a label, the horizontally scrolling pill strip, a
//! one-cell overflow hint and the "clear all" control. Everything is laid
//! out with fixed widths so the reducer can size the strip from the
//! terminal width alone.

use crate::app::state::{AppState, Focus};
use crate::domain::strip::pill_spans;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub const LABEL: &str = " Filters: ";
pub const LABEL_WIDTH: u16 = 10;
pub const CLEAR_ALL: &str = " Wis alles ✕ ";
pub const CLEAR_ALL_WIDTH: u16 = 13;
pub const GRADIENT: &str = "»";
pub const GRADIENT_WIDTH: u16 = 1;

/// Cells left for pills on a bar spanning `total_width`.
#[must_use]
pub fn strip_viewport(total_width: u16) -> u16 {
    total_width.saturating_sub(LABEL_WIDTH + GRADIENT_WIDTH + CLEAR_ALL_WIDTH)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarRegions {
    pub label: Rect,
    pub strip: Rect,
    pub gradient: Rect,
    pub clear_all: Rect,
}

#[must_use]
pub fn regions(area: Rect) -> BarRegions {
    let row = Rect { height: area.height.min(1), ..area };
    let label_width = LABEL_WIDTH.min(row.width);
    let strip_width = strip_viewport(row.width);
    let gradient_x = row.x + label_width + strip_width;
    let gradient_width = GRADIENT_WIDTH.min(row.right().saturating_sub(gradient_x));
    let clear_x = gradient_x + gradient_width;

    BarRegions {
        label: Rect { width: label_width, ..row },
        strip: Rect {
            x: row.x + label_width,
            width: strip_width,
            ..row
        },
        gradient: Rect {
            x: gradient_x,
            width: gradient_width,
            ..row
        },
        clear_all: Rect {
            x: clear_x,
            width: row.right().saturating_sub(clear_x),
            ..row
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarHit {
    RemovePill(usize),
    ClearAll,
    Strip,
}

/// What a click at `(column, row)` lands on, given the bar drawn in `area`.
#[must_use]
pub fn hit(area: Rect, state: &AppState, column: u16, row: u16) -> Option<BarHit> {
    if !state.filter_bar.visible {
        return None;
    }
    let regions = regions(area);
    let inside = |r: Rect| row == r.y && r.height > 0 && column >= r.x && column < r.right();

    if inside(regions.clear_all) {
        return state.filter_bar.clear_all.then_some(BarHit::ClearAll);
    }
    if !inside(regions.strip) {
        return None;
    }

    let content_x = column - regions.strip.x + state.filter_bar.strip.scroll;
    let removed = pill_spans(state.filters.iter())
        .iter()
        .position(|&(offset, width)| {
            // The mark and its trailing space close " name ✕ "
            let mark = offset + width.saturating_sub(2);
            content_x >= mark && content_x < offset + width
        });
    Some(removed.map_or(BarHit::Strip, BarHit::RemovePill))
}

pub struct FilterBar<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let theme = self.theme;
        if area.width == 0 || area.height == 0 || !state.filter_bar.visible {
            return;
        }
        let regions = regions(area);

        Paragraph::new(Span::styled(LABEL, theme.bar_label)).render(regions.label, buf);

        let mut spans = Vec::new();
        for (i, name) in state.filters.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if state.focus == Focus::Pills && state.focused_item == i {
                theme.pill_focus
            } else {
                theme.pill
            };
            spans.push(Span::styled(format!(" {name} ✕ "), style));
        }
        if regions.strip.width > 0 {
            Paragraph::new(Line::from(spans))
                .scroll((0, state.filter_bar.strip.scroll))
                .render(regions.strip, buf);
        }

        if state.filter_bar.gradient && regions.gradient.width > 0 {
            Paragraph::new(Span::styled(GRADIENT, theme.gradient)).render(regions.gradient, buf);
        }
        if state.filter_bar.clear_all && regions.clear_all.width > 0 {
            Paragraph::new(Span::styled(CLEAR_ALL, theme.clear_all)).render(regions.clear_all, buf);
        }
    }
}
