use crate::app::action::Action;
use crate::domain::scheduler::{Scheduler, TaskId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Runs every scheduled action as its own sleeping tokio task.
pub struct TokioScheduler {
    tx: mpsc::Sender<Action>,
    next_id: AtomicU64,
    tasks: Mutex<HashMap<TaskId, JoinHandle<()>>>,
}

impl TokioScheduler {
    #[must_use]
    pub fn new(tx: mpsc::Sender<Action>) -> Self {
        Self {
            tx,
            next_id: AtomicU64::new(0),
            tasks: Mutex::new(HashMap::new()),
        }
    }

    /// Tasks that are still waiting to fire.
    pub fn pending(&self) -> usize {
        self.lock_tasks()
            .values()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    fn lock_tasks(&self) -> MutexGuard<'_, HashMap<TaskId, JoinHandle<()>>> {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, action: Action) -> TaskId {
        let id = TaskId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The loop may already be gone during shutdown
            let _ = tx.send(action).await;
        });

        let mut tasks = self.lock_tasks();
        tasks.retain(|_, handle| !handle.is_finished());
        tasks.insert(id, handle);
        id
    }

    fn cancel(&self, id: TaskId) {
        if let Some(handle) = self.lock_tasks().remove(&id) {
            handle.abort();
            tracing::trace!(task = id.0, "cancelled scheduled action");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::screen::Screen;
    use tokio::time::timeout;

    #[tokio::test(start_paused = true)]
    async fn test_scheduled_action_arrives_after_delay() {
        let (tx, mut rx) = mpsc::channel(4);
        let scheduler = TokioScheduler::new(tx);

        scheduler.schedule(
            Duration::from_millis(150),
            Action::RevealScreen {
                screen: Screen::Suggestions,
                generation: 1,
            },
        );

        assert!(timeout(Duration::from_millis(100), rx.recv()).await.is_err());
        let action = timeout(Duration::from_millis(100), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            action,
            Action::RevealScreen {
                screen: Screen::Suggestions,
                generation: 1
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_action_never_arrives() {
        let (tx, mut rx) = mpsc::channel(4);
        let scheduler = TokioScheduler::new(tx);

        let first = scheduler.schedule(
            Duration::from_millis(100),
            Action::RevealAffordances { keystroke: 1 },
        );
        scheduler.cancel(first);
        scheduler.schedule(
            Duration::from_millis(100),
            Action::RevealAffordances { keystroke: 2 },
        );

        let action = timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(action, Action::RevealAffordances { keystroke: 2 });
        assert!(timeout(Duration::from_secs(1), rx.recv()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_drops_finished_tasks() {
        let (tx, mut rx) = mpsc::channel(4);
        let scheduler = TokioScheduler::new(tx);

        scheduler.schedule(Duration::from_millis(10), Action::Tick);
        scheduler.schedule(Duration::from_millis(500), Action::Tick);
        assert_eq!(scheduler.pending(), 2);

        rx.recv().await.unwrap();
        tokio::task::yield_now().await;
        assert_eq!(scheduler.pending(), 1);

        // Unknown ids are ignored
        scheduler.cancel(TaskId(999));
    }
}
