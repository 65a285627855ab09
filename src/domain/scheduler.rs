use crate::app::action::Action;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

/// Deferred delivery of actions back into the event loop.
#[cfg_attr(test, mockall::automock)]
pub trait Scheduler: Send + Sync {
    /// Sends `action` to the loop once `delay` has elapsed.
    fn schedule(&self, delay: Duration, action: Action) -> TaskId;

    /// Drops a pending task. Finished or unknown ids are ignored.
    fn cancel(&self, id: TaskId);
}
