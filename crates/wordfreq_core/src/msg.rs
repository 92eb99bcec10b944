#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User triggered "compute" (the Submit button).
    ComputeClicked,
    /// User triggered "export".
    ExportClicked,
    /// Engine reported download progress for the in-flight fetch.
    FetchProgress { bytes: u64 },
    /// Engine delivered the decoded document text.
    DocumentFetched { text: String },
    /// Engine gave up on the fetch.
    FetchFailed { reason: String },
    /// Export effect finished, successfully or not.
    ExportFinished(crate::ExportOutcome),
    /// Blank input; nothing to do.
    NoOp,
}
