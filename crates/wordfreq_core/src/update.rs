use wordfreq_logging::{wf_debug, wf_error, wf_info, wf_warn};

use crate::{count_words, AppState, Effect, Msg, Phase, TokenStats, DOCUMENT_URL};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ComputeClicked => {
            // Busy flag: a second compute while loading is dropped.
            if state.phase() == Phase::Loading {
                wf_debug!("Compute ignored: fetch already in flight");
                return (state, Vec::new());
            }
            state.begin_loading();
            vec![Effect::FetchDocument {
                url: DOCUMENT_URL.to_string(),
            }]
        }
        Msg::ExportClicked => {
            if !state.chart_visible() {
                wf_debug!("Export ignored: no ranked entries");
                return (state, Vec::new());
            }
            vec![Effect::ExportCsv {
                entries: state.result().clone(),
            }]
        }
        Msg::FetchProgress { bytes } => {
            if state.phase() == Phase::Loading {
                state.apply_progress(bytes);
            }
            Vec::new()
        }
        Msg::DocumentFetched { text } => {
            if state.phase() != Phase::Loading {
                wf_warn!("Dropping document delivered outside of Loading");
                return (state, Vec::new());
            }
            let table = count_words(&text);
            let stats = TokenStats::from(&table);
            match table.into_ranked(state.top_words()) {
                Ok(result) => {
                    wf_info!(
                        "Ranked {} of {} distinct tokens ({} total)",
                        result.len(),
                        stats.distinct,
                        stats.total
                    );
                    state.finish_loading(result, stats);
                }
                Err(err) => {
                    wf_error!("Frequency computation rejected its input: {}", err);
                    state.fail_loading(err.to_string());
                }
            }
            Vec::new()
        }
        Msg::FetchFailed { reason } => {
            if state.phase() != Phase::Loading {
                wf_warn!("Dropping fetch failure delivered outside of Loading: {}", reason);
                return (state, Vec::new());
            }
            state.fail_loading(reason);
            Vec::new()
        }
        Msg::ExportFinished(outcome) => {
            state.apply_export(outcome);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
