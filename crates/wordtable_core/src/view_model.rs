use std::num::NonZeroUsize;

use crate::{CounterDisplay, PageControl, Record, SortSpec, Summary};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// Shown until the words fetch resolves.
    Loading,
    /// The filter matched nothing.
    NoResults,
    /// The words fetch failed; carries the failure message.
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Rows(Vec<Record>),
    Placeholder(Placeholder),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableViewModel {
    pub body: TableBody,
    pub summary: Option<Summary>,
    pub paginator: Vec<PageControl>,
    pub sort: SortSpec,
    pub search_term: String,
    pub page_size: NonZeroUsize,
    pub current_page: usize,
    /// Number of records left after filtering.
    pub total: usize,
}

impl TableViewModel {
    pub fn rows(&self) -> &[Record] {
        match &self.body {
            TableBody::Rows(rows) => rows,
            TableBody::Placeholder(_) => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    pub name: String,
    pub display: CounterDisplay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub table: TableViewModel,
    pub counters: Vec<CounterView>,
}
