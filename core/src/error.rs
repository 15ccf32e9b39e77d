use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An input could not be read or a report could not be written.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Tables or inputs disagree about the token vocabulary.
    #[error("data consistency: {0}")]
    DataConsistency(String),
    /// A division by zero or logarithm of a non-positive value reached the numeric core.
    #[error("numeric domain: {0}")]
    NumericDomain(String),
    #[error("invalid config: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}
