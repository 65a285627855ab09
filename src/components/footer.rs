use crate::app::state::{AppState, Focus};
use crate::domain::screen::Screen;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
}

const fn item(key: &'static str, desc: &'static str) -> FooterItem {
    FooterItem { key, desc }
}

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Footer<'_> {
    fn items(&self) -> Vec<FooterItem> {
        if self.state.dropdown.is_some() {
            return vec![
                item("↑/↓", "kies"),
                item("Enter", "toevoegen"),
                item("Esc", "sluiten"),
            ];
        }

        match self.state.focus {
            Focus::Chooser => {
                return vec![
                    item("←/→", "tag"),
                    item("Enter", "toevoegen"),
                    item("Tab", "verder"),
                ]
            }
            Focus::Pills => {
                return vec![
                    item("←/→", "filter"),
                    item("Del", "verwijderen"),
                    item("Tab", "verder"),
                ]
            }
            Focus::Input => {}
        }

        let mut items = match self.state.screen {
            Screen::Initial => vec![item("Tab", "filters kiezen")],
            Screen::Suggestions => vec![item("Enter", "zoeken"), item("Esc", "wissen")],
            Screen::Results => vec![item("Esc", "terug")],
        };
        items.push(item("^F", "filtermenu"));
        if !self.state.filters.is_empty() {
            items.push(item("^X", "filters wissen"));
        }
        items.push(item("^R", "opnieuw"));
        items.push(item("^Q", "stoppen"));
        items
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let theme = self.theme;
        let available_width = usize::from(area.width);

        let mut spans = vec![Span::styled(" ", theme.footer)];
        let mut current_width = 1;
        for FooterItem { key, desc } in self.items() {
            // " key desc "
            let width = key.chars().count() + desc.chars().count() + 3;
            if current_width + width > available_width {
                break;
            }
            spans.push(Span::styled(format!(" {key}"), theme.footer_key));
            spans.push(Span::styled(format!(" {desc} "), theme.footer_val));
            current_width += width;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
