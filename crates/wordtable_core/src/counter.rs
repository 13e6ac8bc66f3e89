use std::collections::BTreeMap;
use std::time::Duration;

use wordtable_logging::table_debug;

use crate::{RepeatingTask, TaskStatus};

pub const ANIMATION_DURATION: Duration = Duration::from_millis(2000);
pub const TICK_INTERVAL: Duration = Duration::from_millis(20);

/// Counters shown above the dictionary, in display order.
pub const DEFAULT_COUNTER_NAMES: [&str; 5] = ["stems", "derived", "verbs", "particles", "total"];

/// A single 0 → target count-up.
#[derive(Debug, Clone, PartialEq)]
pub struct CountAnimation {
    name: String,
    target: f64,
    increment: f64,
    value: f64,
    finished: bool,
}

impl CountAnimation {
    /// `None` for targets that cannot be animated (NaN or infinite) and for a
    /// zero tick, which would never reach the target.
    pub fn new(
        name: impl Into<String>,
        target: f64,
        duration: Duration,
        tick: Duration,
    ) -> Option<Self> {
        if !target.is_finite() || tick.is_zero() {
            return None;
        }
        let total_ticks = (duration.as_secs_f64() / tick.as_secs_f64()).max(1.0);
        Some(Self {
            name: name.into(),
            target,
            increment: target / total_ticks,
            value: 0.0,
            finished: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Floored value to show right now.
    pub fn displayed(&self) -> i64 {
        self.value.floor() as i64
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl RepeatingTask for CountAnimation {
    fn tick(&mut self) -> TaskStatus {
        if self.finished {
            return TaskStatus::Finished;
        }
        self.value += self.increment;
        if self.value >= self.target {
            self.value = self.target;
            self.finished = true;
            return TaskStatus::Finished;
        }
        TaskStatus::Continue
    }
}

/// Starts count-ups for a set of named targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountAnimator {
    duration: Duration,
    tick: Duration,
}

impl Default for CountAnimator {
    fn default() -> Self {
        Self {
            duration: ANIMATION_DURATION,
            tick: TICK_INTERVAL,
        }
    }
}

impl CountAnimator {
    /// `None` for a zero tick.
    pub fn new(duration: Duration, tick: Duration) -> Option<Self> {
        (!tick.is_zero()).then_some(Self { duration, tick })
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick
    }

    /// One independent animation per usable target; `None` and non-finite
    /// targets are skipped without error.
    pub fn animate<I, S>(&self, targets: I) -> Vec<CountAnimation>
    where
        I: IntoIterator<Item = (S, Option<f64>)>,
        S: Into<String>,
    {
        targets
            .into_iter()
            .filter_map(|(name, target)| {
                let name = name.into();
                let animation = target.and_then(|target| {
                    CountAnimation::new(name.clone(), target, self.duration, self.tick)
                });
                if animation.is_none() {
                    table_debug!("Skipping counter {} without a numeric target", name);
                }
                animation
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterDisplay {
    /// Waiting for the counts fetch.
    #[default]
    Pending,
    Counting(i64),
    Done(i64),
    /// The counts fetch failed.
    Error,
}

/// Display state of every configured counter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CounterBoard {
    displays: BTreeMap<String, CounterDisplay>,
    order: Vec<String>,
}

impl CounterBoard {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let order: Vec<String> = names.into_iter().map(Into::into).collect();
        let displays = order
            .iter()
            .map(|name| (name.clone(), CounterDisplay::Pending))
            .collect();
        Self { displays, order }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.displays.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<CounterDisplay> {
        self.displays.get(name).copied()
    }

    /// Returns false for names that are not on the board.
    pub(crate) fn set(&mut self, name: &str, display: CounterDisplay) -> bool {
        match self.displays.get_mut(name) {
            Some(slot) => {
                *slot = display;
                true
            }
            None => false,
        }
    }

    pub(crate) fn fail_all(&mut self) {
        for display in self.displays.values_mut() {
            *display = CounterDisplay::Error;
        }
    }

    /// Counters in configured order.
    pub fn entries(&self) -> Vec<(String, CounterDisplay)> {
        self.order
            .iter()
            .filter_map(|name| self.get(name).map(|display| (name.clone(), display)))
            .collect()
    }
}
