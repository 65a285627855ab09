use crate::app::state::AppState;
use crate::domain::screen::RESULT_SECTION_COUNT;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

const SOURCE: &str = "transplantatiestichting.nl › donatie › levende donatie";
const ANSWER: &str = "Een gezond persoon vanaf 18 jaar kan een deel van de lever afstaan. \
    Na een uitgebreide medische en psychologische screening beslist het \
    transplantatieteam of donatie veilig is.";
const CARD_TITLE: &str = " Uitgelicht ";
const CARD: &str = "Leverdonatie bij leven gebeurt meestal aan een familielid. \
    De lever groeit bij donor en ontvanger binnen enkele maanden weer aan.";
const RELATED_TITLE: &str = "Gerelateerde vragen";
const RELATED: [&str; 3] = [
    "Hoe lang duurt het herstel na een leverdonatie?",
    "Welke onderzoeken doet een donor vooraf?",
    "Kan ik ook een nier doneren bij leven?",
];
const BOTTOM_TITLE: &str = "Niet gevonden wat je zocht?";
const BOTTOM_HINT: &str = "Druk op Esc om je vraag aan te passen of Ctrl+R om opnieuw te beginnen.";

/// Heights of the main result, highlighted card, related questions and bottom search.
const SECTION_HEIGHTS: [u16; RESULT_SECTION_COUNT] = [5, 5, 5, 2];

pub struct ResultsView<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl ResultsView<'_> {
    fn main_result(&self) -> Paragraph<'static> {
        let theme = self.theme;
        Paragraph::new(vec![
            Line::from(Span::styled(self.state.search.query(), theme.result_title)),
            Line::from(Span::styled(SOURCE, theme.dimmed)),
            Line::from(Span::styled(ANSWER, theme.result_body)),
        ])
        .wrap(Wrap { trim: true })
    }

    fn highlighted_card(&self) -> Paragraph<'static> {
        let block = Block::default()
            .title(CARD_TITLE)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.card);
        Paragraph::new(Span::styled(CARD, self.theme.result_body))
            .wrap(Wrap { trim: true })
            .block(block)
    }

    fn related(&self) -> Paragraph<'static> {
        let mut lines = vec![Line::from(Span::styled(RELATED_TITLE, self.theme.section_title))];
        lines.extend(RELATED.iter().map(|question| {
            Line::from(vec![
                Span::styled("  → ", self.theme.quick_link_icon),
                Span::styled(*question, self.theme.related),
            ])
        }));
        Paragraph::new(lines)
    }

    fn bottom_search(&self) -> Paragraph<'static> {
        Paragraph::new(vec![
            Line::from(Span::styled(BOTTOM_TITLE, self.theme.section_title)),
            Line::from(Span::styled(BOTTOM_HINT, self.theme.dimmed)),
        ])
    }
}

impl Widget for ResultsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let sections = Layout::vertical(SECTION_HEIGHTS.map(Constraint::Length)).split(area);
        let stagger = self.state.view.stagger;

        for (i, rect) in sections.iter().enumerate() {
            if !stagger.is_revealed(i) || rect.width == 0 || rect.height == 0 {
                continue;
            }
            let section = match i {
                0 => self.main_result(),
                1 => self.highlighted_card(),
                2 => self.related(),
                _ => self.bottom_search(),
            };
            section.render(*rect, buf);
        }
    }
}
