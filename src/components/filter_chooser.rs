//! Filter tags offered on the start screen.

use super::chips::{chip_at, wrap_chips};
use crate::app::state::{AppState, Focus};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Span,
    widgets::{Paragraph, Widget},
};

pub const TITLE: &str = "Verfijn je zoekopdracht";

#[must_use]
pub fn chip_width(name: &str) -> u16 {
    u16::try_from(name.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(4)
}

/// Where each tag is drawn: the title takes the first row, tags wrap below it.
#[must_use]
pub fn chip_rects(area: Rect, names: &[&str]) -> Vec<Rect> {
    let chips_area = Rect {
        y: area.y.saturating_add(2),
        height: area.height.saturating_sub(2),
        ..area
    };
    let widths: Vec<u16> = names.iter().map(|name| chip_width(name)).collect();
    wrap_chips(&widths, chips_area)
}

/// Name of the tag under `(column, row)` when the chooser is on display.
#[must_use]
pub fn tag_at(area: Rect, state: &AppState, column: u16, row: u16) -> Option<&'static str> {
    if !state.view.filter_chooser {
        return None;
    }
    let tags = state.available_tags();
    let rects = chip_rects(area, &tags);
    chip_at(&rects, column, row).and_then(|i| tags.get(i).copied())
}

pub struct FilterChooser<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for FilterChooser<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || !self.state.view.filter_chooser {
            return;
        }

        let title = Rect { height: 1, ..area };
        Paragraph::new(Span::styled(TITLE, self.theme.section_title)).render(title, buf);

        let tags = self.state.available_tags();
        for (i, (name, rect)) in tags.iter().zip(chip_rects(area, &tags)).enumerate() {
            let style = if self.state.focus == Focus::Chooser && self.state.focused_item == i {
                self.theme.chip_focus
            } else {
                self.theme.chip
            };
            Paragraph::new(Span::styled(format!(" + {name} "), style)).render(rect, buf);
        }
    }
}
