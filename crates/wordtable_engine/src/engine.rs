use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use thiserror::Error;
use tokio_util::sync::CancellationToken;
use wordtable_core::{CountAnimation, TaskStatus};
use wordtable_logging::{table_debug, table_warn};

use crate::fetch::{ApiClient, FetchSettings, ReqwestApiClient};
use crate::ticker::run_repeating;
use crate::{EngineEvent, FetchError};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to configure http client: {0}")]
    Client(#[from] FetchError),
}

enum EngineCommand {
    FetchWords,
    FetchCounts,
    Animate {
        animations: Vec<CountAnimation>,
        interval: Duration,
    },
}

/// Command side of the engine. Cheap to clone.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    cancel: CancellationToken,
}

/// Event side of the engine.
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<(Self, EngineEvents), EngineError> {
        let client: Arc<dyn ApiClient> = Arc::new(ReqwestApiClient::new(settings)?);
        Self::with_client(client)
    }

    /// Starts the engine thread around any [`ApiClient`].
    pub fn with_client(client: Arc<dyn ApiClient>) -> Result<(Self, EngineEvents), EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        let root = cancel.clone();
        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                handle_command(&runtime, client.clone(), command, &event_tx, &root);
            }
            table_debug!("Engine command channel closed");
        });

        Ok((Self { cmd_tx, cancel }, EngineEvents { event_rx }))
    }

    pub fn fetch_words(&self) {
        let _ = self.cmd_tx.send(EngineCommand::FetchWords);
    }

    pub fn fetch_counts(&self) {
        let _ = self.cmd_tx.send(EngineCommand::FetchCounts);
    }

    /// Runs each animation as its own timer task.
    pub fn animate(&self, animations: Vec<CountAnimation>, interval: Duration) {
        let _ = self.cmd_tx.send(EngineCommand::Animate {
            animations,
            interval,
        });
    }

    /// Stops running animations; animations requested afterwards end immediately.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

impl EngineEvents {
    /// Blocks until an event arrives; `None` once the engine is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

fn handle_command(
    runtime: &tokio::runtime::Runtime,
    client: Arc<dyn ApiClient>,
    command: EngineCommand,
    event_tx: &mpsc::Sender<EngineEvent>,
    cancel: &CancellationToken,
) {
    match command {
        EngineCommand::FetchWords => {
            let event_tx = event_tx.clone();
            runtime.spawn(async move {
                let result = client.requested_words().await;
                if let Err(err) = &result {
                    table_warn!("Requested words fetch failed ({}): {}", err.kind, err);
                }
                let _ = event_tx.send(EngineEvent::WordsFetched(result));
            });
        }
        EngineCommand::FetchCounts => {
            let event_tx = event_tx.clone();
            runtime.spawn(async move {
                let result = client.word_counts().await;
                if let Err(err) = &result {
                    table_warn!("Word counts fetch failed ({}): {}", err.kind, err);
                }
                let _ = event_tx.send(EngineEvent::CountsFetched(result));
            });
        }
        EngineCommand::Animate {
            animations,
            interval,
        } => {
            for animation in animations {
                let event_tx = event_tx.clone();
                let token = cancel.child_token();
                runtime.spawn(async move {
                    let exit = run_repeating(animation, interval, token, |task, status| {
                        let _ = event_tx.send(EngineEvent::CounterTick {
                            name: task.name().to_string(),
                            value: task.displayed(),
                            finished: status == TaskStatus::Finished,
                        });
                    })
                    .await;
                    table_debug!("Counter animation ended: {:?}", exit);
                });
            }
        }
    }
}
