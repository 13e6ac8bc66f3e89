//! Wordtable core: pure table state machine, view derivation and counters.
mod counter;
mod effect;
mod format;
mod msg;
mod paginator;
mod pipeline;
mod record;
mod render;
mod schedule;
mod state;
mod update;
mod view_model;
mod view_state;

pub use counter::{
    CountAnimation, CountAnimator, CounterBoard, CounterDisplay, ANIMATION_DURATION,
    DEFAULT_COUNTER_NAMES, TICK_INTERVAL,
};
pub use effect::Effect;
pub use format::{DisplayFormatter, Locale, LocaleError, LocaleFormatter};
pub use msg::Msg;
pub use paginator::{build_paginator, PageControl, MAX_UNCOLLAPSED_PAGES};
pub use pipeline::{filter_records, page_count, sort_records, PageBounds, Summary};
pub use record::{is_temporal_key, parse_instant, Column, Record, SortValue};
pub use render::{render_table, Renderer};
pub use schedule::{run_to_completion, RepeatingTask, TaskStatus};
pub use state::{AppState, Dataset, TableState};
pub use update::update;
pub use view_model::{AppViewModel, CounterView, Placeholder, TableBody, TableViewModel};
pub use view_state::{SortDirection, SortSpec, ViewState};
