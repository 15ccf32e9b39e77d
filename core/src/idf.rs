use crate::error::{Error, Result};
use crate::index::{IdfTable, InvertedIndexEntry, Vocabulary};
use std::collections::HashMap;

/// `idf = ln(document_count / document_frequency)`, unsmoothed.
///
/// Fails with `NumericDomain` for an entry without documents, or when there are
/// no documents but the vocabulary is non-empty.
pub fn calculate_idf(
    vocabulary: &Vocabulary,
    entries: &[InvertedIndexEntry],
    document_count: usize,
) -> Result<IdfTable> {
    if document_count == 0 && !entries.is_empty() {
        return Err(Error::NumericDomain("idf over an empty document set".into()));
    }
    let mut values = HashMap::with_capacity(entries.len());
    for entry in entries {
        if !vocabulary.contains(&entry.token) {
            return Err(Error::DataConsistency(format!("token {:?} is not in the vocabulary", entry.token)));
        }
        let df = entry.document_frequency();
        if df == 0 {
            return Err(Error::NumericDomain(format!("token {:?} has document frequency 0", entry.token)));
        }
        if df > document_count {
            tracing::warn!(token = %entry.token, df, document_count, "document frequency exceeds document count");
        }
        values.insert(entry.token.clone(), (document_count as f64 / df as f64).ln());
    }
    Ok(IdfTable { values })
}
