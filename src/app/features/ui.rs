use super::filter::{add_filter, check_overflow};
use crate::app::{
    action::{Action, UpdateResult},
    state::{AppState, Focus},
};
use crate::domain::screen::Screen;
use crate::domain::strip::pill_spans;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            UpdateResult::Handled(None)
        }
        Action::Resize(w, h) => {
            state.terminal_size = (*w, *h);
            check_overflow(state);
            UpdateResult::Handled(None)
        }
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        Action::FocusNext => {
            let next = next_focus(state);
            if next == Focus::Input {
                // Landing back on the query field behaves like clicking it
                return super::typing::update(state, &Action::FocusInput);
            }
            state.focus = next;
            state.focused_item = 0;
            if next == Focus::Pills {
                keep_pill_in_view(state);
            }
            UpdateResult::Handled(None)
        }
        Action::FocusNextItem => {
            let len = focus_len(state);
            if len > 0 {
                state.focused_item = (state.focused_item + 1) % len;
                keep_pill_in_view(state);
            }
            UpdateResult::Handled(None)
        }
        Action::FocusPrevItem => {
            let len = focus_len(state);
            if len > 0 {
                state.focused_item = if state.focused_item == 0 {
                    len - 1
                } else {
                    state.focused_item - 1
                };
                keep_pill_in_view(state);
            }
            UpdateResult::Handled(None)
        }
        Action::ActivateFocused => {
            if state.focus == Focus::Chooser {
                if let Some(name) = state.available_tags().get(state.focused_item).copied() {
                    add_filter(state, name);
                }
            }
            UpdateResult::Handled(None)
        }
        Action::RemoveFocused => {
            if state.focus == Focus::Pills {
                if let Some(name) = state.filters.get(state.focused_item).map(str::to_string) {
                    return super::filter::update(state, &Action::RemoveFilter(name));
                }
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn focus_len(state: &AppState) -> usize {
    match state.focus {
        Focus::Input => 0,
        Focus::Chooser => state.available_tags().len(),
        Focus::Pills => state.filters.len(),
    }
}

fn next_focus(state: &AppState) -> Focus {
    let chooser = state.view.filter_chooser
        && state.view.visible == Some(Screen::Initial)
        && !state.available_tags().is_empty();
    let pills = state.filter_bar.visible && !state.filters.is_empty();

    match state.focus {
        Focus::Input if chooser => Focus::Chooser,
        Focus::Input | Focus::Chooser if pills => Focus::Pills,
        _ => Focus::Input,
    }
}

fn keep_pill_in_view(state: &mut AppState) {
    if state.focus != Focus::Pills {
        return;
    }
    let spans = pill_spans(state.filters.iter());
    if let Some((offset, width)) = spans.get(state.focused_item).copied() {
        let bar = &mut state.filter_bar;
        bar.strip.reveal(offset, width);
        bar.gradient = bar.strip.gradient_after_scroll(bar.gradient);
    }
}
