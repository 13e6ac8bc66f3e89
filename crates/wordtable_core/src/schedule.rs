#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Continue,
    Finished,
}

/// Work performed once per timer tick until it reports `Finished`.
///
/// The task owns all of its state; whoever drives it only supplies the
/// cadence. This keeps tasks testable without a real clock.
pub trait RepeatingTask {
    fn tick(&mut self) -> TaskStatus;
}

/// Drives `task` synchronously, at most `max_ticks` times.
///
/// Returns the number of ticks taken, or `None` if the task was still
/// running when the budget ran out.
pub fn run_to_completion<T: RepeatingTask + ?Sized>(task: &mut T, max_ticks: usize) -> Option<usize> {
    for tick in 1..=max_ticks {
        if task.tick() == TaskStatus::Finished {
            return Some(tick);
        }
    }
    None
}
