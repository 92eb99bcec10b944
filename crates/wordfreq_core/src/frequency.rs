//! Word-frequency computation: whitespace tokenization, counting, ranking.

use std::collections::HashMap;

/// Number of entries shown in the chart and written to the export.
pub const DEFAULT_TOP_WORDS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub word: String,
    pub count: u64,
}

impl RankedEntry {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Top entries by descending count, ties in first-seen order.
pub type RankedResult = Vec<RankedEntry>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrequencyError {
    #[error("invalid argument: limit must be a positive integer, got {limit}")]
    InvalidArgument { limit: usize },
}

/// Token counts in first-seen order.
///
/// Tokens are compared exactly: no case folding, no punctuation stripping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<RankedEntry>,
    total_tokens: u64,
}

impl FrequencyTable {
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|entry| entry.word == word)
            .map(|entry| entry.count)
    }

    /// Iterates entries in the order their tokens first appeared.
    pub fn iter(&self) -> impl Iterator<Item = &RankedEntry> {
        self.entries.iter()
    }

    /// Consumes the table, returning at most `limit` entries ranked by count.
    ///
    /// The sort is stable, so equal counts keep first-seen order.
    pub fn into_ranked(self, limit: usize) -> Result<RankedResult, FrequencyError> {
        if limit == 0 {
            return Err(FrequencyError::InvalidArgument { limit });
        }
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(limit);
        Ok(entries)
    }
}

/// Builds the frequency table in a single pass over the whitespace-separated
/// tokens of `text`. Leading and trailing whitespace never yields empty tokens.
pub fn count_words(text: &str) -> FrequencyTable {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut table = FrequencyTable::default();

    for token in text.split_whitespace() {
        table.total_tokens += 1;
        match slots.get(token) {
            Some(&slot) => table.entries[slot].count += 1,
            None => {
                slots.insert(token, table.entries.len());
                table.entries.push(RankedEntry::new(token, 1));
            }
        }
    }

    table
}

/// Returns the `limit` most frequent tokens of `text`.
///
/// The result length is `min(distinct tokens, limit)` and every returned
/// count is at least as large as any omitted count. Fails with
/// [`FrequencyError::InvalidArgument`] when `limit` is zero.
///
/// ```
/// use wordfreq_core::{compute_top_words, RankedEntry};
///
/// let top = compute_top_words("b a b a c c", 3).unwrap();
/// assert_eq!(
///     top,
///     vec![
///         RankedEntry::new("b", 2),
///         RankedEntry::new("a", 2),
///         RankedEntry::new("c", 2),
///     ]
/// );
/// ```
pub fn compute_top_words(text: &str, limit: usize) -> Result<RankedResult, FrequencyError> {
    if limit == 0 {
        return Err(FrequencyError::InvalidArgument { limit });
    }
    count_words(text).into_ranked(limit)
}
