use chrono::{DateTime, NaiveDateTime};

/// One requested word as delivered by the review endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub word: String,
    pub request_count: u64,
    /// Status code (`pending`, `approved`, `rejected`).
    pub status: String,
    /// Display-ready localized status label.
    pub status_label: String,
    /// ISO-8601 timestamp, kept as sent by the server.
    pub first_seen: String,
    /// ISO-8601 timestamp, kept as sent by the server.
    pub last_updated: String,
}

impl Record {
    /// Value used to order this record by `key`.
    pub fn sort_value(&self, key: &str) -> SortValue {
        if is_temporal_key(key) {
            let raw = match key {
                "first_seen" => &self.first_seen,
                "last_updated" => &self.last_updated,
                _ => return SortValue::Missing,
            };
            return parse_instant(raw).map_or(SortValue::Missing, SortValue::Instant);
        }
        match key {
            "word" => SortValue::Text(self.word.clone()),
            "request_count" => SortValue::Number(self.request_count),
            "status" => SortValue::Text(self.status.clone()),
            "status_label" => SortValue::Text(self.status_label.clone()),
            _ => SortValue::Missing,
        }
    }
}

/// Sort keys naming a timestamp column are compared as instants.
pub fn is_temporal_key(key: &str) -> bool {
    key.contains("date") || key.contains("seen")
}

/// Parses the timestamp shapes the backend emits: naive ISO-8601 with an
/// optional fraction, or RFC 3339 with an offset (normalized to UTC).
pub fn parse_instant(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.naive_utc())
}

/// Comparable projection of a record field.
///
/// `Missing` orders before every present value so that unknown keys and
/// unparseable timestamps still yield a total order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue {
    Missing,
    Number(u64),
    Text(String),
    Instant(NaiveDateTime),
}

/// Columns of the review table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Word,
    RequestCount,
    Status,
    FirstSeen,
    LastUpdated,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Word,
        Column::RequestCount,
        Column::Status,
        Column::FirstSeen,
        Column::LastUpdated,
    ];

    /// Sort key a header click on this column selects.
    pub fn sort_key(self) -> &'static str {
        match self {
            Column::Word => "word",
            Column::RequestCount => "request_count",
            Column::Status => "status_label",
            Column::FirstSeen => "first_seen",
            Column::LastUpdated => "last_updated",
        }
    }
}
