//! Error types for every failure class the summary run can hit.
//!
//! Only [`SpecError`] and [`ReportError`] are fatal. An [`InventoryError`]
//! is absorbed by the per-source tally and surfaces solely as the `f`
//! status prefix in the rendered statistics.
use std::path::PathBuf;
use thiserror::Error;

/// A labeled inventory argument could not be accepted.
#[derive(Debug, Error)]
pub enum SpecError {
    /// The argument did not split into 3 or 4 colon-delimited segments.
    #[error(
        "malformed source specification {spec:?}: expected longlabel:shortlabel:path \
         (3 or 4 colon-separated segments), found {segments}"
    )]
    Malformed { spec: String, segments: usize },

    /// The resolved inventory path does not exist.
    #[error("inventory file not found: {}", path.display())]
    NotFound { path: PathBuf },
}

/// Enumerating one source's records failed partway through.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("failed to read inventory {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid record on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Free-form failure raised by a custom [`crate::inventory::RecordSource`].
    #[error("{0}")]
    Other(String),
}

/// Writing a rendered document failed.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
