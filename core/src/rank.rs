//! Cosine-similarity ranking of documents against a query, using the IDF and
//! TF-IDF tables as rendered by the pipeline.

use crate::error::{Error, Result};
use crate::index::{IdfTable, MetricTable};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedDocument {
    pub document: String,
    pub score: f64,
}

/// Query term weights `tf_query * idf`. Terms outside the IDF vocabulary are dropped.
pub fn query_weights(query: &[String], idf: &IdfTable) -> HashMap<String, f64> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in query {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    let total = query.len() as f64;
    counts
        .into_iter()
        .filter_map(|(token, count)| idf.get(token).map(|w| (token.to_string(), count as f64 / total * w)))
        .collect()
}

fn norm<'a>(values: impl Iterator<Item = &'a f64>) -> f64 {
    values.map(|v| v * v).sum::<f64>().sqrt()
}

/// Score every TF-IDF column by cosine similarity, best first. Ties keep column order.
///
/// A zero vector on either side scores 0.0. An empty query yields no results.
pub fn rank_documents(query: &[String], idf: &IdfTable, tfidf: &MetricTable) -> Result<Vec<RankedDocument>> {
    if query.is_empty() {
        return Ok(Vec::new());
    }
    for (token, row) in &tfidf.rows {
        if idf.get(token).is_none() {
            return Err(Error::DataConsistency(format!("token {token:?} has TF-IDF but no IDF")));
        }
        if row.len() != tfidf.column_count() {
            return Err(Error::DataConsistency(format!(
                "token {token:?} has {} values for {} documents",
                row.len(),
                tfidf.column_count()
            )));
        }
    }

    let weights = query_weights(query, idf);
    let query_norm = norm(weights.values());

    let mut ranked: Vec<RankedDocument> = tfidf
        .headers
        .iter()
        .enumerate()
        .map(|(j, document)| {
            let mut dot = 0.0f64;
            let mut sq = 0.0f64;
            for (token, row) in &tfidf.rows {
                let d = row[j];
                sq += d * d;
                if let Some(q) = weights.get(token) {
                    dot += d * q;
                }
            }
            let denom = sq.sqrt() * query_norm;
            let score = if denom == 0.0 { 0.0 } else { dot / denom };
            RankedDocument { document: document.clone(), score }
        })
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(ranked)
}
