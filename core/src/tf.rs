use crate::corpus::TokenSource;
use crate::error::{Error, Result};
use crate::index::{MetricTable, Vocabulary};
use rayon::prelude::*;
use std::collections::HashMap;

/// Term frequencies of one document: token and count / document length.
type Column = Vec<(String, f64)>;

fn document_column(vocabulary: &Vocabulary, document: &str, source: &dyn TokenSource) -> Result<Column> {
    let tokens = source.tokens(document)?;
    if tokens.is_empty() {
        tracing::debug!(document, "empty document, all frequencies zero");
        return Ok(Vec::new());
    }
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in &tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    let total = tokens.len() as f64;
    counts
        .into_iter()
        .map(|(token, count)| {
            if !vocabulary.contains(token) {
                return Err(Error::DataConsistency(format!(
                    "token {token:?} of document {document:?} is missing from the inverted index"
                )));
            }
            Ok((token.to_string(), count as f64 / total))
        })
        .collect()
}

/// TF table with one column per document, in `documents` order.
///
/// Every vocabulary token gets a row; cells for documents that do not contain
/// the token stay 0.0. With `parallel` the per-document columns are computed on
/// the rayon pool and merged afterwards.
pub fn calculate_tf(
    vocabulary: &Vocabulary,
    documents: &[String],
    source: &dyn TokenSource,
    parallel: bool,
) -> Result<MetricTable> {
    let columns: Vec<Column> = if parallel {
        documents.par_iter().map(|d| document_column(vocabulary, d, source)).collect::<Result<_>>()?
    } else {
        documents.iter().map(|d| document_column(vocabulary, d, source)).collect::<Result<_>>()?
    };

    let mut table = MetricTable::zeroed(vocabulary, documents.to_vec());
    for (i, column) in columns.into_iter().enumerate() {
        for (token, frequency) in column {
            match table.rows.get_mut(&token) {
                Some(row) => row[i] = frequency,
                None => return Err(Error::DataConsistency(format!("token {token:?} has no TF row"))),
            }
        }
    }
    Ok(table)
}
