//! Wordfreq engine: document fetch, decoding, CSV export and effect execution.
mod decode;
mod engine;
mod export;
mod fetch;
mod types;

pub use decode::{decode_text, DecodeError, DecodedText};
pub use engine::{fetch_document, EngineConfig, EngineError, EngineHandle};
pub use export::{
    serialize_csv, write_csv_export, ExportError, ExportSummary, EXPORT_FILENAME,
    EXPORT_MIME_TYPE,
};
pub use fetch::{ChannelProgressSink, FetchSettings, Fetcher, ProgressSink, ReqwestFetcher};
pub use types::{EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, FetchedDocument};
