use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use wordfreq_core::{Effect, ExportOutcome, Msg, RankedEntry};
use wordfreq_engine::{write_csv_export, EngineEvent, EngineHandle};
use wordfreq_logging::{wf_error, wf_info, wf_warn};

use super::app::AppEvent;

pub struct EffectRunner {
    engine: EngineHandle,
    export_dir: PathBuf,
    event_tx: mpsc::Sender<AppEvent>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, export_dir: PathBuf, event_tx: mpsc::Sender<AppEvent>) -> Self {
        let runner = Self {
            engine,
            export_dir,
            event_tx,
        };
        runner.spawn_event_loop();
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchDocument { url } => {
                    self.engine.fetch(url);
                }
                Effect::ExportCsv { entries } => {
                    let outcome = export_entries(&self.export_dir, &entries);
                    let _ = self.event_tx.send(AppEvent::Msg(Msg::ExportFinished(outcome)));
                }
            }
        }
    }

    fn spawn_event_loop(&self) {
        let engine = self.engine.clone();
        let event_tx = self.event_tx.clone();
        thread::spawn(move || {
            while let Some(event) = engine.recv() {
                if event_tx.send(AppEvent::Msg(map_engine_event(event))).is_err() {
                    break;
                }
            }
        });
    }
}

pub(crate) fn map_engine_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::Progress { bytes } => Msg::FetchProgress { bytes },
        EngineEvent::FetchCompleted { result: Ok(document) } => {
            wf_info!(
                "Fetched {} ({} bytes, {})",
                document.metadata.final_url,
                document.metadata.byte_len,
                document.encoding_label
            );
            Msg::DocumentFetched {
                text: document.text,
            }
        }
        EngineEvent::FetchCompleted { result: Err(err) } => {
            wf_warn!("Fetch failed: {}", err);
            Msg::FetchFailed {
                reason: err.to_string(),
            }
        }
    }
}

pub(crate) fn export_entries(dir: &Path, entries: &[RankedEntry]) -> ExportOutcome {
    match write_csv_export(dir, entries) {
        Ok(summary) => ExportOutcome::Written {
            path: summary.output_path.display().to_string(),
            rows: summary.rows,
        },
        Err(err) => {
            wf_error!("Export to {:?} failed: {}", dir, err);
            ExportOutcome::Failed {
                reason: err.to_string(),
            }
        }
    }
}
