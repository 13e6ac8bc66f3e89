use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use wordtable_core::{RepeatingTask, TaskStatus};

/// Shortest period the timer runs at.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerExit {
    Finished,
    Cancelled,
}

/// Ticks `task` every `interval` until it finishes or `cancel` fires.
///
/// The first tick happens one full interval after the call. `on_tick` sees
/// the task right after each step together with the status it reported.
/// A zero `interval` is raised to [`MIN_INTERVAL`].
pub async fn run_repeating<T, F>(
    mut task: T,
    interval: Duration,
    cancel: CancellationToken,
    mut on_tick: F,
) -> TickerExit
where
    T: RepeatingTask,
    F: FnMut(&T, TaskStatus),
{
    let interval = interval.max(MIN_INTERVAL);
    let mut timer = tokio::time::interval_at(tokio::time::Instant::now() + interval, interval);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => return TickerExit::Cancelled,
            _ = timer.tick() => {}
        }
        let status = task.tick();
        on_tick(&task, status);
        if status == TaskStatus::Finished {
            return TickerExit::Finished;
        }
    }
}
