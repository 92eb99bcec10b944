use crate::{ExportOutcome, Phase, RankedResult, TokenStats};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: Phase,
    /// Compute is in flight; the Submit action is disabled.
    pub busy: bool,
    /// At least one ranked entry is available.
    pub show_chart: bool,
    pub entries: RankedResult,
    pub stats: Option<TokenStats>,
    pub downloaded_bytes: Option<u64>,
    pub last_failure: Option<String>,
    pub last_export: Option<ExportOutcome>,
    pub dirty: bool,
}

impl AppViewModel {
    /// Largest count in the chart, used to scale the bars.
    pub fn max_count(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| entry.count)
            .max()
            .unwrap_or(0)
    }
}
