pub mod config;
pub mod corpus;
pub mod error;
pub mod idf;
pub mod index;
pub mod persist;
pub mod pipeline;
pub mod rank;
pub mod report;
pub mod tf;
pub mod tfidf;

pub use config::{MissingInputs, PipelineConfig, WriteMode};
pub use error::{Error, Result};
pub use index::*;
