use crate::app::{
    action::{Action, UpdateResult},
    state::{AppState, DropdownState, Focus},
};
use crate::components::filter_bar::strip_viewport;
use crate::domain::filters::CATALOG;
use crate::domain::screen::active_bar_visible;
use crate::domain::strip;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::AddFilter(name) => {
            add_filter(state, name);
            UpdateResult::Handled(None)
        }
        Action::RemoveFilter(name) => {
            if state.filters.remove(name) {
                tracing::debug!(filter = %name, "filter removed");
            }
            rerender(state);
            UpdateResult::Handled(None)
        }
        Action::ClearAllFilters => {
            state.filters.clear();
            tracing::debug!("filters cleared");
            rerender(state);
            UpdateResult::Handled(None)
        }
        Action::ToggleFilterDropdown => {
            state.dropdown = match state.dropdown {
                Some(_) => None,
                None => Some(DropdownState::default()),
            };
            UpdateResult::Handled(None)
        }
        Action::CloseFilterDropdown => {
            state.dropdown = None;
            UpdateResult::Handled(None)
        }
        Action::DropdownNext => {
            if let Some(dropdown) = &mut state.dropdown {
                dropdown.next();
            }
            UpdateResult::Handled(None)
        }
        Action::DropdownPrev => {
            if let Some(dropdown) = &mut state.dropdown {
                dropdown.prev();
            }
            UpdateResult::Handled(None)
        }
        Action::DropdownSelect => {
            if let Some(name) = state.dropdown.and_then(|d| d.selected()) {
                add_filter(state, name);
                state.dropdown = None;
            }
            UpdateResult::Handled(None)
        }
        Action::DropdownChoose(idx) => {
            if let Some(name) = CATALOG.get(*idx) {
                add_filter(state, name);
                state.dropdown = None;
            }
            UpdateResult::Handled(None)
        }
        Action::ScrollFilters(delta) => {
            let bar = &mut state.filter_bar;
            bar.strip.scroll_by(i32::from(*delta));
            bar.gradient = bar.strip.gradient_after_scroll(bar.gradient);
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

pub fn add_filter(state: &mut AppState, name: &str) {
    if !state.filters.add(name) {
        return;
    }
    tracing::debug!(filter = %name, count = state.filters.len(), "filter added");
    rerender(state);
}

/// Recomputes everything on screen that depends on the active filters.
pub fn rerender(state: &mut AppState) {
    state.filter_bar.visible = active_bar_visible(
        state.screen,
        state.filters.len(),
        state.config.filters_bar.suggestions,
    );
    state.filter_bar.clear_all = !state.filters.is_empty();
    check_overflow(state);

    let focus_len = match state.focus {
        Focus::Input => return,
        Focus::Chooser => state.available_tags().len(),
        Focus::Pills => state.filters.len(),
    };
    if focus_len == 0 {
        state.focus = Focus::Input;
        state.focused_item = 0;
    } else {
        state.focused_item = state.focused_item.min(focus_len - 1);
    }
}

/// Measures the pill strip against the space the bar leaves for it.
pub fn check_overflow(state: &mut AppState) {
    let bar = &mut state.filter_bar;
    bar.strip.content_width = strip::content_width(state.filters.iter());
    bar.strip.viewport_width = strip_viewport(state.terminal_size.0);
    bar.strip.scroll = bar.strip.scroll.min(bar.strip.max_scroll());
    bar.gradient = bar.strip.has_overflow();
}
