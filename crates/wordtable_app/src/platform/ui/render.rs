use wordtable_core::{
    parse_instant, Column, CounterDisplay, CounterView, DisplayFormatter, PageControl,
    Placeholder, Record, Renderer, SortDirection, SortSpec, Summary,
};

use super::text::Catalog;

const COLUMN_SEPARATOR: &str = " | ";

/// Plain-text rendition of the review table.
///
/// Every region keeps its last content between passes, so a pass that only
/// touches the body leaves the previous summary and paginator on screen.
pub struct TerminalRenderer<F> {
    formatter: F,
    text: &'static Catalog,
    header: String,
    body: String,
    summary: String,
    paginator: String,
}

impl<F: DisplayFormatter> TerminalRenderer<F> {
    pub fn new(formatter: F, text: &'static Catalog) -> Self {
        let mut renderer = Self {
            formatter,
            text,
            header: String::new(),
            body: String::new(),
            summary: String::new(),
            paginator: String::new(),
        };
        renderer.render_sort_indicator(&SortSpec::default());
        renderer
    }

    /// Current table screen, empty regions skipped.
    pub fn screen(&self) -> String {
        let mut screen = String::new();
        for region in [&self.header, &self.body, &self.summary, &self.paginator] {
            if !region.is_empty() {
                screen.push_str(region);
                screen.push('\n');
            }
        }
        screen
    }

    pub fn counters_line(&self, counters: &[CounterView]) -> String {
        counters
            .iter()
            .map(|counter| format!("{}: {}", counter.name, self.counter_value(counter.display)))
            .collect::<Vec<_>>()
            .join("  ")
    }

    fn counter_value(&self, display: CounterDisplay) -> String {
        match display {
            CounterDisplay::Pending => self.text.counter_pending.to_string(),
            CounterDisplay::Counting(value) | CounterDisplay::Done(value) => {
                self.formatter.number(value)
            }
            CounterDisplay::Error => self.text.counter_error.to_string(),
        }
    }

    // Timestamps the server sent in an unexpected shape are shown verbatim.
    fn timestamp(&self, raw: &str) -> String {
        parse_instant(raw).map_or_else(|| raw.to_string(), |at| self.formatter.timestamp(&at))
    }

    fn row(&self, record: &Record) -> String {
        [
            record.word.clone(),
            self.formatter.count(record.request_count),
            record.status_label.clone(),
            self.timestamp(&record.first_seen),
            self.timestamp(&record.last_updated),
        ]
        .join(COLUMN_SEPARATOR)
    }

    fn control_label(&self, control: &PageControl) -> String {
        match *control {
            PageControl::Previous { enabled, .. } => nav_label(self.text.previous, enabled),
            PageControl::Next { enabled, .. } => nav_label(self.text.next, enabled),
            PageControl::Page {
                number,
                active: true,
            } => format!("[{}]", self.formatter.count(number as u64)),
            PageControl::Page { number, .. } => self.formatter.count(number as u64),
            PageControl::Ellipsis => "...".to_string(),
        }
    }
}

fn nav_label(label: &str, enabled: bool) -> String {
    if enabled {
        format!("<{label}>")
    } else {
        format!("({label})")
    }
}

impl<F: DisplayFormatter> Renderer for TerminalRenderer<F> {
    fn render_rows(&mut self, rows: &[Record]) {
        self.body = rows
            .iter()
            .map(|record| self.row(record))
            .collect::<Vec<_>>()
            .join("\n");
    }

    fn render_placeholder(&mut self, placeholder: &Placeholder) {
        self.body = match placeholder {
            Placeholder::Loading => self.text.loading.to_string(),
            Placeholder::NoResults => self.text.no_results.to_string(),
            Placeholder::Error(message) => format!("{}{}", self.text.load_error_prefix, message),
        };
    }

    fn render_summary(&mut self, summary: Option<&Summary>) {
        self.summary = match summary {
            Some(summary) => self.text.summary(
                &self.formatter.count(summary.start as u64),
                &self.formatter.count(summary.end as u64),
                &self.formatter.count(summary.total as u64),
            ),
            None => String::new(),
        };
    }

    fn render_paginator(&mut self, controls: &[PageControl]) {
        self.paginator = controls
            .iter()
            .map(|control| self.control_label(control))
            .collect::<Vec<_>>()
            .join(" ");
    }

    fn render_sort_indicator(&mut self, sort: &SortSpec) {
        self.header = Column::ALL
            .into_iter()
            .map(|column| {
                let title = self.text.column_title(column);
                if column.sort_key() != sort.key {
                    return title.to_string();
                }
                match sort.direction {
                    SortDirection::Ascending => format!("{title} ▲"),
                    SortDirection::Descending => format!("{title} ▼"),
                }
            })
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR);
    }
}
