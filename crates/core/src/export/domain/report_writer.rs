use std::path::{Path, PathBuf};

use thiserror::Error;

use super::report::Report;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("there are no fragments to export")]
    NoFragments,
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write document: {0}")]
    Document(String),
}

/// Domain interface for rendering a report to a document file.
///
/// Implementations must refuse an empty report without touching the
/// filesystem.
pub trait ReportWriter: Send {
    fn write(&self, report: &Report, path: &Path) -> Result<(), ExportError>;
}
