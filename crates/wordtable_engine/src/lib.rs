//! Wordtable engine: HTTP fetches, animation timers and the command/event bridge.
mod engine;
mod fetch;
mod ticker;
mod types;

pub use engine::{EngineError, EngineEvents, EngineHandle};
pub use fetch::{ApiClient, FetchSettings, ReqwestApiClient, COUNTS_PATH, WORDS_PATH};
pub use ticker::{run_repeating, TickerExit, MIN_INTERVAL};
pub use types::{EngineEvent, FailureKind, FetchError, RequestedWord, WordCounts};
