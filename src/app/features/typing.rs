use super::screen::transition_to;
use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, Focus},
};
use crate::domain::screen::Screen;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::TextAreaInput(key) => {
            if inserts_line_break(key) {
                return UpdateResult::Handled(None);
            }
            let before = state.search.query();
            state.search.input.input(*key);
            if state.search.query() == before {
                // Cursor movement only
                return UpdateResult::Handled(None);
            }
            UpdateResult::Handled(on_query_changed(state))
        }
        Action::FocusInput => {
            state.focus = Focus::Input;
            UpdateResult::Handled(on_focus(state))
        }
        Action::ClearQuery | Action::Reset => {
            state.focus = Focus::Input;
            let cancel = clear_query(state);
            UpdateResult::Handled(Command::batch([cancel, transition_to(state, Screen::Initial)]))
        }
        Action::RevealAffordances { keystroke } => {
            if *keystroke == state.search.keystroke && !state.search.query().is_empty() {
                state.search.affordances.show_pause();
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Runs after every change of the query text.
pub fn on_query_changed(state: &mut AppState) -> Option<Command> {
    state.search.keystroke += 1;
    let value = state.search.query();

    // Spaces count as typing
    if value.is_empty() {
        state.search.affordances.hide_all();
        let transition = if state.screen == Screen::Suggestions {
            transition_to(state, Screen::Initial)
        } else {
            None
        };
        return Command::batch([Some(Command::CancelAffordances), transition]);
    }

    let transition = if state.screen == Screen::Initial {
        transition_to(state, Screen::Suggestions)
    } else {
        None
    };

    state.search.refresh_suggestions();
    if state.view.visible == Some(Screen::Suggestions) {
        // Rows rebuilt on a visible screen skip the stagger
        state.view.stagger.complete();
    }
    state.search.affordances.show_typing();

    Command::batch([
        transition,
        Some(Command::RevealAffordances {
            keystroke: state.search.keystroke,
            delay: state.config.timing.typing_delay(),
        }),
    ])
}

fn on_focus(state: &mut AppState) -> Option<Command> {
    if state.search.query().trim().is_empty() || state.screen != Screen::Initial {
        return None;
    }
    let transition = transition_to(state, Screen::Suggestions);
    state.search.refresh_suggestions();
    state.search.affordances.show_all();
    transition
}

/// Empties the query field and hides its cues.
pub fn clear_query(state: &mut AppState) -> Option<Command> {
    state.search.set_query("");
    state.search.keystroke += 1;
    state.search.affordances.hide_all();
    Some(Command::CancelAffordances)
}

fn inserts_line_break(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
