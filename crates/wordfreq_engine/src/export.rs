use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use wordfreq_core::RankedEntry;
use wordfreq_logging::{wf_debug, wf_info};

/// Name under which the export is offered to the user.
pub const EXPORT_FILENAME: &str = "word_frequency.csv";
pub const EXPORT_MIME_TYPE: &str = "text/csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub rows: usize,
    pub byte_len: usize,
    pub output_path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("export target {} is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

/// Serializes ranked entries as `word,count` rows.
///
/// Rows keep the ranking order and are separated by `\n`, with no header and
/// no trailing newline. A word containing a comma, a quote or a line break is
/// quoted using standard CSV rules; all other words are written verbatim.
pub fn serialize_csv(entries: &[RankedEntry]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for entry in entries {
        let count = entry.count.to_string();
        writer.write_record([entry.word.as_str(), count.as_str()])?;
    }

    let mut bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))?;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    Ok(bytes)
}

/// Serializes `entries` and writes them to `{dir}/word_frequency.csv`,
/// creating `dir` if needed. An existing export is replaced in one rename;
/// on failure the previous file, if any, is left untouched.
pub fn write_csv_export(dir: &Path, entries: &[RankedEntry]) -> Result<ExportSummary, ExportError> {
    let bytes = serialize_csv(entries)?;
    let output_path = replace_file(dir, EXPORT_FILENAME, &bytes)?;
    wf_info!(
        "Exported {} rows ({}) to {}",
        entries.len(),
        EXPORT_MIME_TYPE,
        output_path.display()
    );
    Ok(ExportSummary {
        rows: entries.len(),
        byte_len: bytes.len(),
        output_path,
    })
}

fn replace_file(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    } else if !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }

    // Staged next to the target so the final rename stays on one filesystem.
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(bytes)?;
    staged.as_file_mut().sync_all()?;

    let target = dir.join(filename);
    staged.persist(&target).map_err(|err| err.error)?;
    wf_debug!("Replaced {} ({} bytes)", target.display(), bytes.len());
    Ok(target)
}
