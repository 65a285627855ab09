use super::{action::Action, command::Command};
use crate::domain::scheduler::{Scheduler, TaskId};
use std::sync::Arc;

/// Carries out reducer commands and owns the typing debounce.
pub struct Effects {
    scheduler: Arc<dyn Scheduler>,
    debounce: Option<TaskId>,
}

impl Effects {
    pub fn new(scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            scheduler,
            debounce: None,
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::RevealScreen {
                screen,
                generation,
                delay,
            } => {
                self.scheduler
                    .schedule(delay, Action::RevealScreen { screen, generation });
            }
            Command::RevealAffordances { keystroke, delay } => {
                self.cancel_debounce();
                let id = self
                    .scheduler
                    .schedule(delay, Action::RevealAffordances { keystroke });
                self.debounce = Some(id);
            }
            Command::CancelAffordances => self.cancel_debounce(),
            Command::Stagger {
                generation,
                items,
                step,
            } => {
                for index in 0..items {
                    let delay = step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX));
                    self.scheduler
                        .schedule(delay, Action::StaggerStep { generation, index });
                }
            }
            Command::Batch(commands) => {
                for command in commands {
                    self.apply(command);
                }
            }
        }
    }

    fn cancel_debounce(&mut self) {
        if let Some(id) = self.debounce.take() {
            self.scheduler.cancel(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scheduler::MockScheduler;
    use crate::domain::screen::Screen;
    use mockall::predicate::eq;
    use mockall::Sequence;
    use std::time::Duration;

    #[test]
    fn test_debounce_cancels_previous_task() {
        let mut mock = MockScheduler::new();
        let mut seq = Sequence::new();

        mock.expect_schedule()
            .with(
                eq(Duration::from_millis(100)),
                eq(Action::RevealAffordances { keystroke: 1 }),
            )
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| TaskId(10));
        mock.expect_cancel()
            .with(eq(TaskId(10)))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        mock.expect_schedule()
            .with(
                eq(Duration::from_millis(100)),
                eq(Action::RevealAffordances { keystroke: 2 }),
            )
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| TaskId(11));

        let mut effects = Effects::new(Arc::new(mock));
        for keystroke in 1..=2 {
            effects.apply(Command::RevealAffordances {
                keystroke,
                delay: Duration::from_millis(100),
            });
        }
    }

    #[test]
    fn test_cancel_without_pending_is_noop() {
        let mut mock = MockScheduler::new();
        mock.expect_cancel().never();

        let mut effects = Effects::new(Arc::new(mock));
        effects.apply(Command::CancelAffordances);
    }

    #[test]
    fn test_cancel_only_once() {
        let mut mock = MockScheduler::new();
        mock.expect_schedule().times(1).returning(|_, _| TaskId(3));
        mock.expect_cancel().with(eq(TaskId(3))).times(1).return_const(());

        let mut effects = Effects::new(Arc::new(mock));
        effects.apply(Command::RevealAffordances {
            keystroke: 1,
            delay: Duration::from_millis(100),
        });
        effects.apply(Command::CancelAffordances);
        effects.apply(Command::CancelAffordances);
    }

    #[test]
    fn test_stagger_spaces_steps() {
        let mut mock = MockScheduler::new();
        for index in 0..4 {
            mock.expect_schedule()
                .with(
                    eq(Duration::from_millis(100 * index as u64)),
                    eq(Action::StaggerStep {
                        generation: 5,
                        index,
                    }),
                )
                .times(1)
                .returning(move |_, _| TaskId(index as u64));
        }

        let mut effects = Effects::new(Arc::new(mock));
        effects.apply(Command::Stagger {
            generation: 5,
            items: 4,
            step: Duration::from_millis(100),
        });
    }

    #[test]
    fn test_batch_applies_in_order() {
        let mut mock = MockScheduler::new();
        let mut seq = Sequence::new();
        mock.expect_schedule()
            .with(
                eq(Duration::from_millis(150)),
                eq(Action::RevealScreen {
                    screen: Screen::Suggestions,
                    generation: 1,
                }),
            )
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| TaskId(0));
        mock.expect_schedule()
            .with(
                eq(Duration::from_millis(100)),
                eq(Action::RevealAffordances { keystroke: 1 }),
            )
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| TaskId(1));

        let mut effects = Effects::new(Arc::new(mock));
        effects.apply(Command::Batch(vec![
            Command::RevealScreen {
                screen: Screen::Suggestions,
                generation: 1,
                delay: Duration::from_millis(150),
            },
            Command::RevealAffordances {
                keystroke: 1,
                delay: Duration::from_millis(100),
            },
        ]));
    }
}
