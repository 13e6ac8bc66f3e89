use std::num::NonZeroUsize;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Host finished setting up; kicks off both fetches once.
    Started,
    /// User edited the search box.
    SearchChanged(String),
    /// User picked another rows-per-page option.
    PageSizeChanged(NonZeroUsize),
    /// User clicked a sortable column header, identified by its sort key.
    HeaderActivated(String),
    /// User clicked a paginator control.
    PageSelected(crate::PageControl),
    /// Words fetch resolved.
    WordsLoaded(Vec<crate::Record>),
    /// Words fetch failed with a displayable message.
    WordsFailed(String),
    /// Counts fetch resolved; `None` marks a non-numeric value.
    CountsLoaded(Vec<(String, Option<f64>)>),
    /// Counts fetch failed.
    CountsFailed(String),
    /// One animation step for a counter.
    CounterTick {
        name: String,
        value: i64,
        finished: bool,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
}
