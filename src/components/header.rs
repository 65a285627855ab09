use crate::domain::screen::Screen;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub const TITLE: &str = " ZOEKBALK ";
pub const SUBTITLE: &str = " Orgaandonatie · vraagbaak ";

pub struct Header<'a> {
    /// Screen the controller is on, even while its reveal is pending.
    pub screen: Screen,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);
        let sep = Style::default().fg(logo_bg).bg(base_bg);

        Paragraph::new(Line::from(vec![
            Span::styled(TITLE, self.theme.header_logo),
            Span::styled("▌", sep),
            Span::styled(SUBTITLE, self.theme.header),
        ]))
        .style(self.theme.header)
        .render(area, buf);

        Paragraph::new(Span::styled(
            format!(" {} ", self.screen.label()),
            self.theme.header_item,
        ))
        .alignment(Alignment::Right)
        .render(area, buf);
    }
}
