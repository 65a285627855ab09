use crate::app::{
    action::Action,
    state::{AppState, Focus},
    ui::{self, AppLayout},
};
use crate::components::filter_bar::{self, BarHit};
use crate::components::search_box::{self, SearchHit};
use crate::components::suggestions::{self, SuggestionHit};
use crate::components::{dropdown, filter_chooser};
use crate::domain::screen::Screen;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Rect, Size};

/// Cells the filter strip moves per wheel notch.
const WHEEL_STEP: i16 = 3;

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        Event::Key(key) => map_key(key, app_state),
        Event::Mouse(mouse) => {
            let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
            let layout = ui::get_layout(area, app_state);
            map_mouse(mouse, app_state, &layout)
        }
        _ => None,
    }
}

fn map_key(key: KeyEvent, app_state: &AppState<'_>) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if app_state.dropdown.is_some() {
        match key.code {
            KeyCode::Esc => return Some(Action::CloseFilterDropdown),
            KeyCode::Up => return Some(Action::DropdownPrev),
            KeyCode::Down => return Some(Action::DropdownNext),
            KeyCode::Enter => return Some(Action::DropdownSelect),
            _ => {}
        }
    }

    if let Some(action) = app_state.keymap.get_action(key, app_state.focus) {
        return Some(action);
    }

    match app_state.focus {
        Focus::Input => Some(Action::TextAreaInput(key)),
        Focus::Chooser | Focus::Pills => None,
    }
}

fn map_mouse(mouse: MouseEvent, app_state: &AppState<'_>, layout: &AppLayout) -> Option<Action> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => click(app_state, layout, column, row),
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
            over_bar(layout, row).then_some(Action::ScrollFilters(-WHEEL_STEP))
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
            over_bar(layout, row).then_some(Action::ScrollFilters(WHEEL_STEP))
        }
        _ => None,
    }
}

fn over_bar(layout: &AppLayout, row: u16) -> bool {
    layout.filter_bar.height > 0 && row >= layout.filter_bar.y && row < layout.filter_bar.bottom()
}

fn click(app_state: &AppState<'_>, layout: &AppLayout, column: u16, row: u16) -> Option<Action> {
    // An open dropdown swallows the click
    if app_state.dropdown.is_some() {
        if dropdown::contains(layout.dropdown, column, row) {
            return dropdown::entry_at(layout.dropdown, column, row).map(Action::DropdownChoose);
        }
        return match search_box::hit(&layout.search, app_state, column, row) {
            Some(SearchHit::FilterButton) => Some(Action::ToggleFilterDropdown),
            _ => Some(Action::CloseFilterDropdown),
        };
    }

    if let Some(hit) = search_box::hit(&layout.search, app_state, column, row) {
        return Some(match hit {
            SearchHit::Input => Action::FocusInput,
            SearchHit::EnterBadge => Action::ClickEnterBadge,
            SearchHit::Clear => Action::ClearQuery,
            SearchHit::FilterButton => Action::ToggleFilterDropdown,
        });
    }

    if let Some(hit) = filter_bar::hit(layout.filter_bar, app_state, column, row) {
        return match hit {
            BarHit::RemovePill(i) => app_state
                .filters
                .get(i)
                .map(|name| Action::RemoveFilter(name.to_string())),
            BarHit::ClearAll => Some(Action::ClearAllFilters),
            BarHit::Strip => None,
        };
    }

    match app_state.view.visible {
        Some(Screen::Initial) => filter_chooser::tag_at(layout.body, app_state, column, row)
            .map(|name| Action::AddFilter(name.to_string())),
        Some(Screen::Suggestions) => {
            let in_body = column >= layout.body.x && column < layout.body.right();
            match suggestions::row_hit(layout.body, app_state, row).filter(|_| in_body)? {
                SuggestionHit::Suggestion(i) => Some(Action::SelectSuggestion(i)),
                SuggestionHit::QuickLink(i) => Some(Action::SelectQuickLink(i)),
            }
        }
        Some(Screen::Results) | None => None,
    }
}
