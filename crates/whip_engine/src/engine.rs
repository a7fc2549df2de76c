use std::sync::{mpsc, Arc};
use std::thread;

use whip_core::Platform;

use crate::extract::{ExtractSettings, LinkExtractor, PageLinkExtractor};
use crate::lookup::{HttpLookupClient, LookupClient, LookupSettings};
use crate::types::EngineEvent;

enum WorkerCommand {
    Lookup {
        source_url: String,
    },
    Extract {
        canonical_url: String,
        platform: Platform,
    },
}

/// Handle to the background worker thread.
///
/// Commands go in over a channel; each spawns one network operation and
/// produces exactly one [`EngineEvent`] on the way back. The interaction
/// loop polls [`try_recv`](EngineHandle::try_recv) and never blocks on
/// network I/O itself.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<WorkerCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(lookup: LookupSettings, extract: ExtractSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let lookup_client = Arc::new(HttpLookupClient::new(lookup));
        let extractor = Arc::new(PageLinkExtractor::new(extract));

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    log::error!("failed to start worker runtime: {err}");
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let lookup_client = lookup_client.clone();
                let extractor = extractor.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event =
                        run_command(lookup_client.as_ref(), extractor.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    /// Spawns the canonical lookup worker.
    pub fn start_lookup(&self, source_url: impl Into<String>) {
        let _ = self.cmd_tx.send(WorkerCommand::Lookup {
            source_url: source_url.into(),
        });
    }

    /// Spawns the link-extraction worker.
    pub fn start_extraction(&self, canonical_url: impl Into<String>, platform: Platform) {
        let _ = self.cmd_tx.send(WorkerCommand::Extract {
            canonical_url: canonical_url.into(),
            platform,
        });
    }

    /// Non-blocking poll for the next completion event.
    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn run_command(
    lookup: &dyn LookupClient,
    extractor: &dyn LinkExtractor,
    command: WorkerCommand,
) -> EngineEvent {
    match command {
        WorkerCommand::Lookup { source_url } => {
            EngineEvent::LookupDone(lookup.lookup(&source_url).await)
        }
        WorkerCommand::Extract {
            canonical_url,
            platform,
        } => EngineEvent::ExtractDone(extractor.extract(&canonical_url, &platform).await),
    }
}
