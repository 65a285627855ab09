use crate::app::state::{AppState, Focus};
use crate::components::dropdown::{self, FilterDropdown};
use crate::components::filter_bar::FilterBar;
use crate::components::filter_chooser::FilterChooser;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::results::ResultsView;
use crate::components::search_box::{self, SearchBox, SearchRegions};
use crate::components::suggestions::SuggestionsView;
use crate::domain::screen::Screen;

use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::Style,
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppLayout {
    pub header: Rect,
    pub search: SearchRegions,
    pub filter_bar: Rect,
    pub body: Rect,
    pub footer: Rect,
    /// Empty while the dropdown is closed.
    pub dropdown: Rect,
}

pub fn get_layout(area: Rect, state: &AppState) -> AppLayout {
    let bar_height = u16::from(state.filter_bar.visible);
    let [header, search, filter_bar, _, body, footer] = Layout::vertical([
        Constraint::Length(1),                  // Header
        Constraint::Length(search_box::HEIGHT), // Search box
        Constraint::Length(bar_height),         // Active filters
        Constraint::Length(1),                  // Spacing
        Constraint::Min(0),                     // Screen
        Constraint::Length(1),                  // Footer
    ])
    .areas(area);

    let search = search_box::regions(search);
    let dropdown = if state.dropdown.is_some() {
        // Hang below the box, not the button row
        let anchor = Rect {
            height: search.block.bottom().saturating_sub(search.filter_button.y),
            ..search.filter_button
        };
        dropdown::area(anchor, area)
    } else {
        Rect::default()
    };

    AppLayout {
        header,
        search,
        filter_bar,
        body: body.inner(Margin {
            horizontal: 2,
            vertical: 0,
        }),
        footer,
        dropdown,
    }
}

fn has_area(rect: Rect) -> bool {
    rect.width > 0 && rect.height > 0
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    let area = f.area();
    if !has_area(area) {
        return;
    }

    // The query field shows its cursor only while it has keyboard focus
    let theme = &app_state.theme;
    let cursor = if app_state.focus == Focus::Input && app_state.dropdown.is_none() {
        theme.cursor
    } else {
        Style::default()
    };
    let (text, placeholder) = (theme.input_text, theme.placeholder);
    let input = &mut app_state.search.input;
    input.set_cursor_style(cursor);
    input.set_style(text);
    input.set_placeholder_style(placeholder);

    let state = &*app_state;
    let theme = &state.theme;
    let layout = get_layout(area, state);

    // --- Header ---
    if has_area(layout.header) {
        let header = Header {
            screen: state.screen,
            theme,
        };
        f.render_widget(header, layout.header);
    }

    // --- Search Box ---
    if has_area(layout.search.block) {
        f.render_widget(SearchBox { state, theme }, layout.search.block);
    }

    // --- Active Filters ---
    if has_area(layout.filter_bar) {
        f.render_widget(FilterBar { state, theme }, layout.filter_bar);
    }

    // --- Screen ---
    if has_area(layout.body) {
        match state.view.visible {
            Some(Screen::Initial) => {
                f.render_widget(FilterChooser { state, theme }, layout.body);
            }
            Some(Screen::Suggestions) => {
                f.render_widget(SuggestionsView { state, theme }, layout.body);
            }
            Some(Screen::Results) => {
                f.render_widget(ResultsView { state, theme }, layout.body);
            }
            None => {}
        }
    }

    // --- Footer ---
    if has_area(layout.footer) {
        f.render_widget(Footer { state, theme }, layout.footer);
    }

    // --- Overlay ---
    if has_area(layout.dropdown) {
        f.render_widget(FilterDropdown { state, theme }, layout.dropdown);
    }
}
