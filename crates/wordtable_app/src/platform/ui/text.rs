use serde::Deserialize;
use wordtable_core::Column;

/// Language used for every fixed string the terminal shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Language {
    #[default]
    Kurdish,
    English,
}

/// Fixed UI strings for one language.
#[derive(Debug)]
pub struct Catalog {
    language: Language,
    pub loading: &'static str,
    pub no_results: &'static str,
    pub load_error_prefix: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub counter_error: &'static str,
    pub counter_pending: &'static str,
    pub help: &'static str,
    columns: [&'static str; 5],
}

const KURDISH: Catalog = Catalog {
    language: Language::Kurdish,
    loading: "دراوەکان بار دەکرێن...",
    no_results: "ھیچ وشەیەک نەدۆزرایەوە.",
    load_error_prefix: "ھەڵەیەک لە کاتی بارکردنی دراوەکە ڕووی دا: ",
    previous: "پێشوو",
    next: "دواتر",
    counter_error: "ھەڵە",
    counter_pending: "...",
    help: HELP,
    columns: [
        "وشە",
        "ژمارەی داواکاری",
        "دۆخ",
        "یەکەم جار بینراوە",
        "دوایین نوێکردنەوە",
    ],
};

const ENGLISH: Catalog = Catalog {
    language: Language::English,
    loading: "Loading data...",
    no_results: "No words found.",
    load_error_prefix: "An error occurred while loading the data: ",
    previous: "Previous",
    next: "Next",
    counter_error: "Error",
    counter_pending: "...",
    help: HELP,
    columns: ["Word", "Requests", "Status", "First seen", "Last updated"],
};

const HELP: &str = "\
commands:
  search <text>   filter words (no text clears the filter)
  size <n>        rows per page
  sort <column>   word | count | status | first | updated
  page <n>        jump to a page listed in the paginator
  next | prev     step one page
  quit";

impl Language {
    pub fn catalog(self) -> &'static Catalog {
        match self {
            Language::Kurdish => &KURDISH,
            Language::English => &ENGLISH,
        }
    }
}

impl Catalog {
    /// Summary line; the numbers arrive already formatted.
    pub fn summary(&self, start: &str, end: &str, total: &str) -> String {
        match self.language {
            Language::Kurdish => {
                format!("پیشاندانی {start} تا {end} وشە لە کۆی گشتیی {total} وشە")
            }
            Language::English => format!("Showing {start} to {end} of {total} words"),
        }
    }

    pub fn column_title(&self, column: Column) -> &'static str {
        let index = match column {
            Column::Word => 0,
            Column::RequestCount => 1,
            Column::Status => 2,
            Column::FirstSeen => 3,
            Column::LastUpdated => 4,
        };
        self.columns[index]
    }
}
