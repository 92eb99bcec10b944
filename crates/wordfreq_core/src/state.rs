use crate::frequency::{FrequencyTable, RankedResult, DEFAULT_TOP_WORDS};
use crate::view_model::AppViewModel;

/// Lifecycle of the compute action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { path: String, rows: usize },
    Failed { reason: String },
}

/// Totals over the whole document, not just the ranked slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenStats {
    pub total: u64,
    pub distinct: usize,
}

impl From<&FrequencyTable> for TokenStats {
    fn from(table: &FrequencyTable) -> Self {
        Self {
            total: table.total_tokens(),
            distinct: table.distinct(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    phase: Phase,
    top_words: usize,
    result: RankedResult,
    stats: Option<TokenStats>,
    downloaded_bytes: Option<u64>,
    last_failure: Option<String>,
    last_export: Option<ExportOutcome>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_top_words(DEFAULT_TOP_WORDS)
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State whose compute action keeps `top_words` entries.
    pub fn with_top_words(top_words: usize) -> Self {
        Self {
            phase: Phase::Idle,
            top_words,
            result: Vec::new(),
            stats: None,
            downloaded_bytes: None,
            last_failure: None,
            last_export: None,
            dirty: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn top_words(&self) -> usize {
        self.top_words
    }

    pub fn result(&self) -> &RankedResult {
        &self.result
    }

    /// The chart is shown whenever a non-empty result is held.
    pub fn chart_visible(&self) -> bool {
        !self.result.is_empty()
    }

    /// Projects the state into what the renderer needs. Derived flags are
    /// recomputed here on every call rather than stored.
    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            phase: self.phase,
            busy: self.phase == Phase::Loading,
            show_chart: self.chart_visible(),
            entries: self.result.clone(),
            stats: self.stats,
            downloaded_bytes: self.downloaded_bytes,
            last_failure: self.last_failure.clone(),
            last_export: self.last_export.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn begin_loading(&mut self) {
        self.phase = Phase::Loading;
        self.downloaded_bytes = None;
        self.last_failure = None;
        self.mark_dirty();
    }

    pub(crate) fn apply_progress(&mut self, bytes: u64) {
        if self.downloaded_bytes != Some(bytes) {
            self.downloaded_bytes = Some(bytes);
            self.mark_dirty();
        }
    }

    pub(crate) fn finish_loading(&mut self, result: RankedResult, stats: TokenStats) {
        self.phase = Phase::Ready;
        self.result = result;
        self.stats = Some(stats);
        self.downloaded_bytes = None;
        self.mark_dirty();
    }

    /// Leaves the previous result in place so an earlier chart stays visible.
    pub(crate) fn fail_loading(&mut self, reason: String) {
        self.phase = Phase::Failed;
        self.downloaded_bytes = None;
        self.last_failure = Some(reason);
        self.mark_dirty();
    }

    pub(crate) fn apply_export(&mut self, outcome: ExportOutcome) {
        self.last_export = Some(outcome);
        self.mark_dirty();
    }
}
