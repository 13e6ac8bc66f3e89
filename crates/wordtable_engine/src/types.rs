use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// One row of `GET /api/get_requested_words`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequestedWord {
    pub word: String,
    pub request_count: u64,
    pub status: String,
    #[serde(rename = "status_kurdish")]
    pub status_label: String,
    pub first_seen: String,
    pub last_updated: String,
}

/// Body of `GET /api/get_word_counts`: counter name to count.
///
/// Values are kept as raw JSON so that a non-numeric entry only disables its
/// own counter instead of failing the whole response.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct WordCounts(pub BTreeMap<String, serde_json::Value>);

impl WordCounts {
    /// Counter targets; `None` where the value is not a number.
    pub fn targets(&self) -> Vec<(String, Option<f64>)> {
        self.0
            .iter()
            .map(|(name, value)| (name.clone(), value.as_f64()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    WordsFetched(Result<Vec<RequestedWord>, FetchError>),
    CountsFetched(Result<WordCounts, FetchError>),
    CounterTick {
        name: String,
        value: i64,
        finished: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "malformed response body"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
