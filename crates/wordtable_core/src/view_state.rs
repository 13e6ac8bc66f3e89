use std::num::NonZeroUsize;

use crate::Column;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: Column::RequestCount.sort_key().to_string(),
            direction: SortDirection::Descending,
        }
    }
}

/// The four user-controlled inputs the table view is derived from.
///
/// Fields are private; every change goes through a transition method so the
/// page-reset rule cannot be bypassed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    search_term: String,
    sort: SortSpec,
    page_size: NonZeroUsize,
    current_page: usize,
}

impl ViewState {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            search_term: String::new(),
            sort: SortSpec::default(),
            page_size,
            current_page: 1,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    pub fn set_page_size(&mut self, page_size: NonZeroUsize) {
        self.page_size = page_size;
        self.current_page = 1;
    }

    /// Header activation: the active descending column flips to ascending,
    /// anything else starts the chosen column at descending.
    pub fn activate_sort_key(&mut self, key: impl Into<String>) {
        let key = key.into();
        let direction = if self.sort.key == key && self.sort.direction == SortDirection::Descending
        {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        };
        self.sort = SortSpec { key, direction };
        self.current_page = 1;
    }

    /// Jumps to `page` without touching any other input. Page 0 is ignored.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page == 0 {
            return false;
        }
        self.current_page = page;
        true
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(10).unwrap_or(NonZeroUsize::MIN))
    }
}
