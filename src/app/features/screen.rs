use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, Focus},
};
use crate::domain::screen::{active_bar_visible, Screen, RESULT_SECTION_COUNT};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Submit => {
            if state.screen == Screen::Suggestions {
                return UpdateResult::Handled(transition_to(state, Screen::Results));
            }
            UpdateResult::Handled(None)
        }
        Action::Back => UpdateResult::Handled(match state.screen {
            Screen::Results => transition_to(state, Screen::Suggestions),
            Screen::Suggestions => {
                let cancel = super::typing::clear_query(state);
                Command::batch([cancel, transition_to(state, Screen::Initial)])
            }
            Screen::Initial => None,
        }),
        Action::ClickEnterBadge => {
            if state.search.query().trim().is_empty() {
                return UpdateResult::Handled(None);
            }
            UpdateResult::Handled(transition_to(state, Screen::Results))
        }
        Action::SelectSuggestion(idx) => {
            let Some(text) = state.search.suggestions.get(*idx).map(|s| s.text()) else {
                return UpdateResult::Handled(None);
            };
            state.search.set_query(&text);
            UpdateResult::Handled(transition_to(state, Screen::Results))
        }
        Action::SelectQuickLink(idx) => {
            if *idx >= state.search.quick_links.len() {
                return UpdateResult::Handled(None);
            }
            UpdateResult::Handled(transition_to(state, Screen::Results))
        }
        Action::RevealScreen { screen, generation } => {
            UpdateResult::Handled(reveal(state, *screen, *generation))
        }
        Action::StaggerStep { generation, index } => {
            if *generation == state.view.generation {
                state.view.stagger.step(*index);
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Commits to `target` and hides every screen until the reveal fires.
pub fn transition_to(state: &mut AppState, target: Screen) -> Option<Command> {
    if state.screen == target {
        return None;
    }

    if target == Screen::Results && state.search.query().is_empty() {
        let fallback = state.config.fallback_query.clone();
        state.search.set_query(&fallback);
    }

    state.view.hide_all();
    state.view.generation += 1;
    let generation = state.view.generation;
    tracing::debug!(from = ?state.screen, to = ?target, generation, "screen transition");
    state.screen = target;
    // Chips and pills may disappear with the old screen
    state.focus = Focus::Input;
    state.focused_item = 0;

    let reveal = Some(Command::RevealScreen {
        screen: target,
        generation,
        delay: state.config.timing.transition_delay(),
    });

    // A pending badge reveal must not land on the results screen
    if target == Screen::Results {
        state.search.keystroke += 1;
        return Command::batch([Some(Command::CancelAffordances), reveal]);
    }
    reveal
}

fn reveal(state: &mut AppState, screen: Screen, generation: u64) -> Option<Command> {
    // A newer transition superseded this one
    if generation != state.view.generation || screen != state.screen {
        return None;
    }

    state.view.visible = Some(screen);
    state.filter_bar.visible = active_bar_visible(
        screen,
        state.filters.len(),
        state.config.filters_bar.suggestions,
    );

    match screen {
        Screen::Initial => {
            state.view.filter_chooser = true;
            state.search.affordances.hide_all();
            None
        }
        Screen::Suggestions => {
            let items = state.search.row_count();
            state.view.stagger.start(items);
            Some(Command::Stagger {
                generation,
                items,
                step: state.config.timing.suggestion_stagger(),
            })
        }
        Screen::Results => {
            state.search.affordances.hide_all();
            state.view.stagger.start(RESULT_SECTION_COUNT);
            Some(Command::Stagger {
                generation,
                items: RESULT_SECTION_COUNT,
                step: state.config.timing.result_stagger(),
            })
        }
    }
}
