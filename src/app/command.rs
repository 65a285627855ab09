use crate::domain::screen::Screen;
use std::time::Duration;

/// Side effects requested by the reducer and carried out by the effect runner.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Show `screen` after the transition delay.
    RevealScreen {
        screen: Screen,
        generation: u64,
        delay: Duration,
    },
    /// Replace the pending affordance reveal with a new one.
    RevealAffordances { keystroke: u64, delay: Duration },
    /// Drop the pending affordance reveal, if any.
    CancelAffordances,
    /// Reveal `items` rows one `step` apart.
    Stagger {
        generation: u64,
        items: usize,
        step: Duration,
    },
    Batch(Vec<Command>),
}

impl Command {
    /// Collapses optional commands into one, in order.
    pub fn batch(commands: impl IntoIterator<Item = Option<Command>>) -> Option<Command> {
        let mut commands: Vec<Command> = commands.into_iter().flatten().collect();
        match commands.len() {
            0 => None,
            1 => commands.pop(),
            _ => Some(Command::Batch(commands)),
        }
    }

    /// Flattened view of the command, mostly useful for assertions.
    #[must_use]
    pub fn flatten(self) -> Vec<Command> {
        match self {
            Command::Batch(commands) => commands.into_iter().flat_map(Command::flatten).collect(),
            other => vec![other],
        }
    }
}
