use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use wordfreq_logging::{wf_info, wf_warn};

use crate::decode::decode_text;
use crate::fetch::{ChannelProgressSink, FetchSettings, Fetcher, ProgressSink, ReqwestFetcher};
use crate::{EngineEvent, FailureKind, FetchError, FetchedDocument};

#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub fetch: FetchSettings,
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("failed to spawn engine thread: {0}")]
    Thread(#[source] std::io::Error),
}

enum EngineCommand {
    Fetch { url: String },
}

/// Handle to the background IO thread. Cheap to clone; all clones share the
/// same command queue and event stream.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestFetcher::new(config.fetch));
        let runtime = tokio::runtime::Runtime::new().map_err(EngineError::Runtime)?;

        thread::Builder::new()
            .name("wordfreq-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let fetcher = fetcher.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(fetcher.as_ref(), command, event_tx).await;
                    });
                }
            })
            .map_err(EngineError::Thread)?;

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn fetch(&self, url: impl Into<String>) {
        let url = url.into();
        wf_info!("Fetch requested url={}", url);
        if self.cmd_tx.send(EngineCommand::Fetch { url }).is_err() {
            wf_warn!("Engine thread is gone; fetch dropped");
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    /// Blocks until the next event. Returns `None` once the engine thread
    /// has exited and every queued event has been taken.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { url } => {
            let sink = ChannelProgressSink::new(event_tx.clone());
            let result = fetch_document(fetcher, &url, &sink).await;
            let _ = event_tx.send(EngineEvent::FetchCompleted { result });
        }
    }
}

/// Fetches `url` and decodes the body into text.
pub async fn fetch_document(
    fetcher: &dyn Fetcher,
    url: &str,
    sink: &dyn ProgressSink,
) -> Result<FetchedDocument, FetchError> {
    let output = fetcher.fetch(url, sink).await?;
    let decoded = decode_text(&output.bytes, output.metadata.content_type.as_deref())
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
    Ok(FetchedDocument {
        text: decoded.text,
        encoding_label: decoded.encoding_label,
        metadata: output.metadata,
    })
}
