use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// How the reporter treats an existing report file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    #[default]
    Truncate,
    Append,
}

/// What to do when a per-document token file cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingInputs {
    #[default]
    Strict,
    /// Treat the document as empty and log a warning.
    Lenient,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub artifacts_dir: PathBuf,
    pub index_file: Option<PathBuf>,
    pub inverted_index_file: Option<PathBuf>,
    pub tokens_dir: Option<PathBuf>,
    pub reports_dir: Option<PathBuf>,
    pub write_mode: WriteMode,
    pub missing_inputs: MissingInputs,
    pub parallel: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            artifacts_dir: PathBuf::from("../artifacts"),
            index_file: None,
            inverted_index_file: None,
            tokens_dir: None,
            reports_dir: None,
            write_mode: WriteMode::default(),
            missing_inputs: MissingInputs::default(),
            parallel: false,
        }
    }
}

impl PipelineConfig {
    pub fn with_artifacts<P: AsRef<Path>>(dir: P) -> Self {
        Self { artifacts_dir: dir.as_ref().to_path_buf(), ..Self::default() }
    }

    /// Load a JSON config file. Missing fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn index_file(&self) -> PathBuf {
        self.index_file.clone().unwrap_or_else(|| self.artifacts_dir.join("index.txt"))
    }

    pub fn inverted_index_file(&self) -> PathBuf {
        self.inverted_index_file.clone().unwrap_or_else(|| self.artifacts_dir.join("inverted-index.txt"))
    }

    pub fn tokens_dir(&self) -> PathBuf {
        self.tokens_dir.clone().unwrap_or_else(|| self.artifacts_dir.join("tokens"))
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.reports_dir.clone().unwrap_or_else(|| self.artifacts_dir.clone())
    }
}
