use std::sync::mpsc;
use std::thread;

use wordtable_core::{Effect, Msg, Record};
use wordtable_engine::{
    EngineError, EngineEvent, EngineEvents, EngineHandle, FetchSettings, RequestedWord,
};
use wordtable_logging::{table_debug, table_info};

use super::app::AppEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(
        settings: FetchSettings,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> Result<Self, EngineError> {
        let (engine, events) = EngineHandle::new(settings)?;
        spawn_event_loop(events, event_tx);
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchWords => {
                    table_info!("FetchWords");
                    self.engine.fetch_words();
                }
                Effect::FetchCounts => {
                    table_info!("FetchCounts");
                    self.engine.fetch_counts();
                }
                Effect::AnimateCounts {
                    animations,
                    interval,
                } => {
                    table_info!(
                        "AnimateCounts counters={} interval={:?}",
                        animations.len(),
                        interval
                    );
                    self.engine.animate(animations, interval);
                }
            }
        }
    }

    pub fn shutdown(&self) {
        self.engine.shutdown();
    }
}

fn spawn_event_loop(events: EngineEvents, event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        while let Some(event) = events.recv() {
            if event_tx.send(AppEvent::Msg(map_event(event))).is_err() {
                break;
            }
        }
        table_debug!("Engine event loop ended");
    });
}

pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::WordsFetched(Ok(words)) => {
            Msg::WordsLoaded(words.into_iter().map(to_record).collect())
        }
        EngineEvent::WordsFetched(Err(err)) => Msg::WordsFailed(err.to_string()),
        EngineEvent::CountsFetched(Ok(counts)) => Msg::CountsLoaded(counts.targets()),
        EngineEvent::CountsFetched(Err(err)) => Msg::CountsFailed(err.to_string()),
        EngineEvent::CounterTick {
            name,
            value,
            finished,
        } => Msg::CounterTick {
            name,
            value,
            finished,
        },
    }
}

fn to_record(word: RequestedWord) -> Record {
    Record {
        word: word.word,
        request_count: word.request_count,
        status: word.status,
        status_label: word.status_label,
        first_seen: word.first_seen,
        last_updated: word.last_updated,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use wordtable_engine::{FailureKind, FetchError, WordCounts};

    #[test]
    fn fetched_words_become_records() {
        let msg = map_event(EngineEvent::WordsFetched(Ok(vec![RequestedWord {
            word: "کتێب".to_string(),
            request_count: 3,
            status: "approved".to_string(),
            status_label: "پەسەندکراو".to_string(),
            first_seen: "2024-01-01T00:00:00".to_string(),
            last_updated: "2024-01-02T00:00:00".to_string(),
        }])));

        match msg {
            Msg::WordsLoaded(records) => {
                assert_eq!(records.len(), 1);
                assert_eq!(records[0].status_label, "پەسەندکراو");
                assert_eq!(records[0].request_count, 3);
            }
            other => panic!("unexpected msg {other:?}"),
        }
    }

    #[test]
    fn failures_carry_the_error_message() {
        let err = FetchError {
            kind: FailureKind::HttpStatus(500),
            message: "HTTP error! Status: 500".to_string(),
        };
        assert_eq!(
            map_event(EngineEvent::CountsFetched(Err(err.clone()))),
            Msg::CountsFailed("HTTP error! Status: 500".to_string())
        );
        assert_eq!(
            map_event(EngineEvent::WordsFetched(Err(err))),
            Msg::WordsFailed("HTTP error! Status: 500".to_string())
        );
    }

    #[test]
    fn counts_map_to_animation_targets() {
        let mut counts = BTreeMap::new();
        counts.insert("verbs".to_string(), serde_json::json!(42));
        assert_eq!(
            map_event(EngineEvent::CountsFetched(Ok(WordCounts(counts)))),
            Msg::CountsLoaded(vec![("verbs".to_string(), Some(42.0))])
        );
    }
}
