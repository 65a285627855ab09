use crate::app::{
    action::Action, effects::Effects, input::map_event_to_action, reducer, state::AppState, ui,
};
use crate::infrastructure::tokio_scheduler::TokioScheduler;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app_state: AppState<'_>) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    // Timer callbacks come back through this channel
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut effects = Effects::new(Arc::new(TokioScheduler::new(action_tx)));
    let mut interval = interval(TICK_RATE);

    let size = terminal.size()?;
    reducer::update(&mut app_state, Action::Resize(size.width, size.height));
    tracing::info!(width = size.width, height = size.height, "event loop started");

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Timers
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Some(command) = reducer::update(&mut app_state, action) {
                effects.apply(command);
            }

            if app_state.should_quit {
                break;
            }
        }
    }

    tracing::info!(screen = ?app_state.screen, "event loop stopped");
    Ok(())
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
