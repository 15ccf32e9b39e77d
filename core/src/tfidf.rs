use crate::error::{Error, Result};
use crate::index::{IdfTable, MetricTable};

/// Cell-wise `tf * idf`. A TF row without an IDF value is an error, never an implicit zero.
pub fn calculate_tfidf(tf: &MetricTable, idf: &IdfTable) -> Result<MetricTable> {
    let mut out = MetricTable::new(tf.headers.clone());
    out.rows.reserve(tf.len());
    for (token, frequencies) in &tf.rows {
        let weight = idf
            .get(token)
            .ok_or_else(|| Error::DataConsistency(format!("token {token:?} has TF but no IDF")))?;
        out.rows.insert(token.clone(), frequencies.iter().map(|f| f * weight).collect());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplies_each_cell() {
        let mut tf = MetricTable::new(vec!["a".into(), "b".into()]);
        tf.rows.insert("x".into(), vec![0.5, 1.0]);
        tf.rows.insert("y".into(), vec![0.5, 0.0]);
        let mut idf = IdfTable::default();
        idf.values.insert("x".into(), 0.0);
        idf.values.insert("y".into(), 2f64.ln());

        let out = calculate_tfidf(&tf, &idf).unwrap();
        assert_eq!(out.headers, tf.headers);
        for (token, row) in &out.rows {
            for (i, v) in row.iter().enumerate() {
                let expected = tf.value(token, i).unwrap() * idf.get(token).unwrap();
                assert!((v - expected).abs() < 1e-9);
            }
        }
        assert!((out.value("y", 0).unwrap() - 0.34657).abs() < 1e-5);
    }

    #[test]
    fn missing_idf_is_a_consistency_error() {
        let mut tf = MetricTable::new(vec!["a".into()]);
        tf.rows.insert("x".into(), vec![0.0]);
        let err = calculate_tfidf(&tf, &IdfTable::default()).unwrap_err();
        assert!(matches!(err, Error::DataConsistency(_)));
    }
}
