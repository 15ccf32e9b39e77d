use crate::config::{MissingInputs, WriteMode};
use crate::error::{Error, Result};
use crate::index::MetricTable;
use crate::report::{parse_table, render_table};
use std::fs::{self, create_dir_all, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Locations of the rendered `<metric>.md` reports.
pub struct ReportPaths {
    pub root: PathBuf,
}

impl ReportPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
    pub fn report(&self, metric_name: &str) -> PathBuf { self.root.join(format!("{metric_name}.md")) }
}

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Read an input that lenient mode may substitute with nothing.
pub fn read_optional_text(path: &Path, policy: MissingInputs) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if policy == MissingInputs::Lenient => {
            tracing::warn!(path = %path.display(), error = %e, "unreadable input, treating as empty");
            Ok(None)
        }
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Render `table` into `<root>/<metric_name>.md`, returning the file path.
pub fn save_report(paths: &ReportPaths, metric_name: &str, table: &MetricTable, mode: WriteMode) -> Result<PathBuf> {
    create_dir_all(&paths.root).map_err(|e| Error::io(&paths.root, e))?;
    let path = paths.report(metric_name);
    let mut options = OpenOptions::new();
    options.create(true);
    match mode {
        WriteMode::Truncate => options.write(true).truncate(true),
        WriteMode::Append => options.append(true),
    };
    let file = options.open(&path).map_err(|e| Error::io(&path, e))?;
    let mut w = BufWriter::new(file);
    render_table(&mut w, table).map_err(|e| Error::io(&path, e))?;
    w.flush().map_err(|e| Error::io(&path, e))?;
    w.get_ref().sync_all().map_err(|e| Error::io(&path, e))?;
    Ok(path)
}

/// Parse the last table block of a rendered report.
pub fn load_report(paths: &ReportPaths, metric_name: &str) -> Result<MetricTable> {
    let path = paths.report(metric_name);
    parse_table(&read_text(&path)?)
}
