use std::num::NonZeroUsize;

use crate::counter::DEFAULT_COUNTER_NAMES;
use crate::paginator::build_paginator;
use crate::pipeline::{filter_records, page_count, sort_records, PageBounds, Summary};
use crate::view_model::{AppViewModel, CounterView, Placeholder, TableBody, TableViewModel};
use crate::{CountAnimator, CounterBoard, Record, ViewState};

/// Lifecycle of the fetched word list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Dataset {
    #[default]
    Loading,
    Ready(Vec<Record>),
    Failed(String),
}

/// Raw dataset plus the view inputs derived output is computed from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableState {
    dataset: Dataset,
    view: ViewState,
}

impl TableState {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            dataset: Dataset::Loading,
            view: ViewState::new(page_size),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub(crate) fn view_state_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    /// Replaces the dataset wholesale.
    pub(crate) fn set_dataset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
    }

    /// Runs filter → sort → slice → summarize → paginate for the current inputs.
    pub fn view(&self) -> TableViewModel {
        let view = &self.view;
        let mut model = TableViewModel {
            body: TableBody::Placeholder(Placeholder::Loading),
            summary: None,
            paginator: Vec::new(),
            sort: view.sort().clone(),
            search_term: view.search_term().to_string(),
            page_size: view.page_size(),
            current_page: view.current_page(),
            total: 0,
        };

        let records = match &self.dataset {
            Dataset::Loading => return model,
            Dataset::Failed(message) => {
                model.body = TableBody::Placeholder(Placeholder::Error(message.clone()));
                return model;
            }
            Dataset::Ready(records) => records,
        };

        let filtered = filter_records(records, view.search_term());
        let sorted = sort_records(filtered, view.sort());
        let total = sorted.len();
        let bounds = PageBounds::new(view.current_page(), view.page_size());

        let visible: Vec<Record> = bounds.slice(&sorted).iter().map(|r| (*r).clone()).collect();
        model.body = if visible.is_empty() {
            TableBody::Placeholder(Placeholder::NoResults)
        } else {
            TableBody::Rows(visible)
        };
        model.summary = Summary::new(total, bounds);
        model.paginator = build_paginator(view.current_page(), page_count(total, view.page_size()));
        model.total = total;
        model
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    table: TableState,
    counters: CounterBoard,
    animator: CountAnimator,
    started: bool,
    table_dirty: bool,
    counters_dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(default_page_size(), DEFAULT_COUNTER_NAMES)
    }

    pub fn with_settings<I, S>(page_size: NonZeroUsize, counter_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            table: TableState::new(page_size),
            counters: CounterBoard::new(counter_names),
            animator: CountAnimator::default(),
            started: false,
            table_dirty: false,
            counters_dirty: false,
        }
    }

    pub fn with_animator(mut self, animator: CountAnimator) -> Self {
        self.animator = animator;
        self
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            table: self.table.view(),
            counters: self
                .counters
                .entries()
                .into_iter()
                .map(|(name, display)| CounterView { name, display })
                .collect(),
        }
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    pub fn counters(&self) -> &CounterBoard {
        &self.counters
    }

    pub(crate) fn table_mut(&mut self) -> &mut TableState {
        &mut self.table
    }

    pub(crate) fn counters_mut(&mut self) -> &mut CounterBoard {
        &mut self.counters
    }

    pub(crate) fn animator(&self) -> &CountAnimator {
        &self.animator
    }

    /// Marks the session started; returns false if it already was.
    pub(crate) fn start(&mut self) -> bool {
        !std::mem::replace(&mut self.started, true)
    }

    pub(crate) fn mark_table_dirty(&mut self) {
        self.table_dirty = true;
    }

    pub(crate) fn mark_counters_dirty(&mut self) {
        self.counters_dirty = true;
    }

    /// Returns whether the table needs a render and clears the flag.
    pub fn consume_table_dirty(&mut self) -> bool {
        std::mem::take(&mut self.table_dirty)
    }

    /// Returns whether the counters need a render and clears the flag.
    pub fn consume_counters_dirty(&mut self) -> bool {
        std::mem::take(&mut self.counters_dirty)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn default_page_size() -> NonZeroUsize {
    NonZeroUsize::new(10).unwrap_or(NonZeroUsize::MIN)
}
