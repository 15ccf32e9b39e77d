use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tfidf_core::pipeline::{rank_from_reports, run};
use tfidf_core::{MissingInputs, PipelineConfig, WriteMode};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "tfidf")]
#[command(about = "Compute TF, IDF and TF-IDF reports over a tokenized corpus", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the metrics and write tf.md, idf.md and tf-idf.md
    Build {
        /// JSON config file; flags below override it
        #[arg(long)]
        config: Option<PathBuf>,
        /// Directory holding index.txt, inverted-index.txt and tokens/
        #[arg(long)]
        artifacts: Option<PathBuf>,
        /// Directory to write reports into (defaults to the artifacts directory)
        #[arg(long)]
        reports: Option<PathBuf>,
        /// Append table blocks to existing reports instead of replacing them
        #[arg(long, default_value_t = false)]
        append: bool,
        /// Treat unreadable token files as empty documents
        #[arg(long, default_value_t = false)]
        lenient: bool,
        /// Compute per-document term frequencies in parallel
        #[arg(long, default_value_t = false)]
        parallel: bool,
    },
    /// Rank documents against query tokens using the written reports
    Rank {
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        artifacts: Option<PathBuf>,
        #[arg(long)]
        reports: Option<PathBuf>,
        /// Only print the best K documents
        #[arg(long)]
        top: Option<usize>,
        /// Query tokens, already normalized like the corpus tokens
        #[arg(required = true)]
        tokens: Vec<String>,
    },
}

fn load_config(config: Option<PathBuf>, artifacts: Option<PathBuf>, reports: Option<PathBuf>) -> Result<PipelineConfig> {
    let mut cfg = match config {
        Some(path) => PipelineConfig::from_json_file(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(dir) = artifacts {
        cfg.artifacts_dir = dir;
    }
    if reports.is_some() {
        cfg.reports_dir = reports;
    }
    Ok(cfg)
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { config, artifacts, reports, append, lenient, parallel } => {
            let mut cfg = load_config(config, artifacts, reports)?;
            if append {
                cfg.write_mode = WriteMode::Append;
            }
            if lenient {
                cfg.missing_inputs = MissingInputs::Lenient;
            }
            cfg.parallel |= parallel;
            let summary = run(&cfg)?;
            tracing::info!(num_docs = summary.num_docs, num_tokens = summary.num_tokens, "reports written");
            for path in &summary.reports {
                println!("{}", path.display());
            }
            Ok(())
        }
        Commands::Rank { config, artifacts, reports, top, tokens } => {
            let cfg = load_config(config, artifacts, reports)?;
            for hit in rank_from_reports(&cfg, &tokens, top)? {
                println!("{:.5} {}", hit.score, hit.document);
            }
            Ok(())
        }
    }
}
