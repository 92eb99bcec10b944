//! Wordfreq core: word-frequency computation, pure state machine and
//! view-model helpers.
mod effect;
mod frequency;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use frequency::{
    compute_top_words, count_words, FrequencyError, FrequencyTable, RankedEntry, RankedResult,
    DEFAULT_TOP_WORDS,
};
pub use msg::Msg;
pub use state::{AppState, ExportOutcome, Phase, TokenStats};
pub use update::update;
pub use view_model::AppViewModel;

/// The remote document the compute action analyses.
pub const DOCUMENT_URL: &str = "https://www.terriblytinytales.com/test.txt";
