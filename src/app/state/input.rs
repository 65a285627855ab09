use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

pub const PLACEHOLDER: &str = "Stel je vraag of zoek op trefwoord";

/// Single-line query field.
pub struct AppTextArea<'a>(pub TextArea<'a>);

impl Default for AppTextArea<'_> {
    fn default() -> Self {
        let mut area = TextArea::default();
        area.set_cursor_line_style(Style::default());
        area.set_placeholder_text(PLACEHOLDER);
        Self(area)
    }
}

impl AppTextArea<'_> {
    #[must_use]
    pub fn text(&self) -> String {
        self.0.lines().join("")
    }
}

impl Clone for AppTextArea<'_> {
    fn clone(&self) -> Self {
        let mut area = Self::default();
        area.insert_str(self.text());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(
            u16::try_from(row).unwrap_or(u16::MAX),
            u16::try_from(col).unwrap_or(u16::MAX),
        ));
        area
    }
}

impl std::fmt::Debug for AppTextArea<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppTextArea")
            .field("lines", &self.0.lines())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for AppTextArea<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for AppTextArea<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AppTextArea<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &AppTextArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_keeps_text_and_cursor() {
        let mut area = AppTextArea::default();
        area.insert_str("lever");
        area.move_cursor(CursorMove::Back);
        area.move_cursor(CursorMove::Back);

        let copy = area.clone();
        assert_eq!(copy.text(), "lever");
        assert_eq!(copy.cursor(), (0, 3));
        assert_eq!(copy, area);
    }
}
