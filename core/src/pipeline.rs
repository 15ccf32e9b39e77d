use crate::config::PipelineConfig;
use crate::corpus::{load_document_names, load_inverted_index, TokenDir};
use crate::error::Result;
use crate::idf::calculate_idf;
use crate::index::{IdfTable, Vocabulary};
use crate::persist::{load_report, save_report, ReportPaths};
use crate::rank::{rank_documents, RankedDocument};
use crate::tf::calculate_tf;
use crate::tfidf::calculate_tfidf;
use std::path::PathBuf;

pub const TF_REPORT: &str = "tf";
pub const IDF_REPORT: &str = "idf";
pub const TFIDF_REPORT: &str = "tf-idf";

#[derive(Debug, Clone)]
pub struct PipelineSummary {
    pub num_docs: usize,
    pub num_tokens: usize,
    pub reports: Vec<PathBuf>,
}

/// Load the corpus, compute TF, IDF and TF-IDF, and write the three reports.
/// The first error aborts the run; a run that fails while computing leaves
/// existing reports untouched.
pub fn run(config: &PipelineConfig) -> Result<PipelineSummary> {
    let documents = load_document_names(&config.index_file())?;
    let entries = load_inverted_index(&config.inverted_index_file())?;
    let vocabulary = Vocabulary::from_entries(&entries)?;
    tracing::info!(num_docs = documents.len(), num_tokens = vocabulary.len(), "loaded corpus");

    let tokens = TokenDir::new(config.tokens_dir(), config.missing_inputs);

    tracing::info!("start processing tf");
    let tf = calculate_tf(&vocabulary, &documents, &tokens, config.parallel)?;
    tracing::info!("processed tf");

    tracing::info!("start processing idf");
    let idf = calculate_idf(&vocabulary, &entries, documents.len())?;
    tracing::info!("processed idf");

    tracing::info!("start processing tf-idf");
    let tfidf = calculate_tfidf(&tf, &idf)?;
    tracing::info!("processed tf-idf");

    // reports are only touched once every metric is computed
    let reports = ReportPaths::new(config.reports_dir());
    let written = vec![
        save_report(&reports, TF_REPORT, &tf, config.write_mode)?,
        save_report(&reports, IDF_REPORT, &idf.to_metric_table(), config.write_mode)?,
        save_report(&reports, TFIDF_REPORT, &tfidf, config.write_mode)?,
    ];
    tracing::info!(dir = %reports.root.display(), "reports written");

    Ok(PipelineSummary { num_docs: documents.len(), num_tokens: vocabulary.len(), reports: written })
}

/// Rank documents for `query` from previously written `idf` and `tf-idf` reports.
pub fn rank_from_reports(config: &PipelineConfig, query: &[String], top: Option<usize>) -> Result<Vec<RankedDocument>> {
    let reports = ReportPaths::new(config.reports_dir());
    let idf = IdfTable::from_metric_table(&load_report(&reports, IDF_REPORT)?)?;
    let tfidf = load_report(&reports, TFIDF_REPORT)?;
    tracing::debug!(num_docs = tfidf.column_count(), num_tokens = idf.len(), "loaded reports");
    let mut ranked = rank_documents(query, &idf, &tfidf)?;
    if let Some(k) = top {
        ranked.truncate(k);
    }
    Ok(ranked)
}
