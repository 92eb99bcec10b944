use crate::RankedResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the document text; the outcome comes back as
    /// `Msg::DocumentFetched` or `Msg::FetchFailed`.
    FetchDocument { url: String },
    /// Serialize the ranked entries and offer them as `word_frequency.csv`.
    ExportCsv { entries: RankedResult },
}
