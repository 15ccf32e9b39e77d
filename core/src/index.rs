use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};

/// One line of `inverted-index.txt`: a token and the documents listed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvertedIndexEntry {
    pub token: String,
    pub documents: Vec<String>, // literal entries, duplicates kept
}

impl InvertedIndexEntry {
    pub fn document_frequency(&self) -> usize { self.documents.len() }
}

/// The token keyspace shared by the TF, IDF and TF-IDF tables.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    tokens: HashSet<String>,
}

impl Vocabulary {
    pub fn from_entries(entries: &[InvertedIndexEntry]) -> Result<Self> {
        let mut tokens = HashSet::with_capacity(entries.len());
        for entry in entries {
            if !tokens.insert(entry.token.clone()) {
                return Err(Error::DataConsistency(format!(
                    "token {:?} appears more than once in the inverted index",
                    entry.token
                )));
            }
        }
        Ok(Self { tokens })
    }

    pub fn contains(&self, token: &str) -> bool { self.tokens.contains(token) }
    pub fn len(&self) -> usize { self.tokens.len() }
    pub fn is_empty(&self) -> bool { self.tokens.is_empty() }
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.tokens.iter().map(String::as_str) }
}

/// Token-keyed table with one value per column.
///
/// Row order is whatever the map yields; anything that emits rows goes through
/// [`MetricTable::sorted_tokens`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricTable {
    pub headers: Vec<String>,
    pub rows: HashMap<String, Vec<f64>>,
}

impl MetricTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self { headers, rows: HashMap::new() }
    }

    /// A table with a zero row of `headers.len()` columns for every vocabulary token.
    pub fn zeroed(vocabulary: &Vocabulary, headers: Vec<String>) -> Self {
        let width = headers.len();
        let rows = vocabulary.iter().map(|t| (t.to_string(), vec![0.0; width])).collect();
        Self { headers, rows }
    }

    pub fn get(&self, token: &str) -> Option<&[f64]> { self.rows.get(token).map(Vec::as_slice) }

    pub fn value(&self, token: &str, column: usize) -> Option<f64> {
        self.rows.get(token).and_then(|v| v.get(column)).copied()
    }

    pub fn column_count(&self) -> usize { self.headers.len() }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Tokens in ascending byte order.
    pub fn sorted_tokens(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.rows.keys().map(String::as_str).collect();
        tokens.sort_unstable();
        tokens
    }
}

/// Corpus-wide IDF, one value per token.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdfTable {
    pub values: HashMap<String, f64>,
}

impl IdfTable {
    pub fn get(&self, token: &str) -> Option<f64> { self.values.get(token).copied() }
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Single-column view under the `idf` header, as the reporter renders it.
    pub fn to_metric_table(&self) -> MetricTable {
        let rows = self.values.iter().map(|(t, v)| (t.clone(), vec![*v])).collect();
        MetricTable { headers: vec!["idf".to_string()], rows }
    }

    pub fn from_metric_table(table: &MetricTable) -> Result<Self> {
        let mut values = HashMap::with_capacity(table.len());
        for (token, row) in &table.rows {
            match row.as_slice() {
                [v] => { values.insert(token.clone(), *v); }
                _ => {
                    return Err(Error::DataConsistency(format!(
                        "idf row for {token:?} has {} values, expected 1",
                        row.len()
                    )))
                }
            }
        }
        Ok(Self { values })
    }
}
