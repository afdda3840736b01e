//! Content loading and reshaping for the directory site
//!
//! Sources parse the directory tables into the record model; the transform
//! module does the presentational reshaping the pages need; the filter
//! module holds the organization filter selection.

pub mod filter;
pub mod sources;
pub mod transform;

use thiserror::Error;
use tokio::task::JoinError;

// Re-exports
pub use filter::{FilterAction, OrganizationFilter};
pub use sources::{CsvContentSource, MemoryContentSource};

/// Errors that can occur while loading content
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(String),

    #[error("missing column '{0}'")]
    MissingColumn(String),

    #[error("content directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("join error: {0}")]
    Join(#[from] JoinError),

    #[error("other error: {0}")]
    Other(String),
}

impl From<csv::Error> for ContentError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_err) => {
                ContentError::Io(std::io::Error::new(io_err.kind(), error.to_string()))
            }
            _ => ContentError::Csv(error.to_string()),
        }
    }
}
