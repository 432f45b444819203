//! Report rendering — the LaTeX and HTML comparison tables.
//!
//! Rendering is pure string work ([`Format::render`]); only
//! [`write_reports`] touches the filesystem, and only after both documents
//! have been rendered in memory.
pub mod escape;
pub mod html;
pub mod latex;
pub mod substitute;

pub use substitute::{fill_statistics, fill_template, placeholder};

use crate::aggregate::Aggregator;
use crate::error::ReportError;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Latex,
    Html,
}

impl Format {
    /// Both formats, in the order they are written.
    pub const ALL: [Format; 2] = [Self::Latex, Self::Html];

    /// Prefix of this format's fields in the template descriptor.
    pub fn field_prefix(self) -> &'static str {
        match self {
            Self::Latex => "latex",
            Self::Html => "html",
        }
    }

    /// Fixed output file name.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Latex => latex::FILE_NAME,
            Self::Html => html::FILE_NAME,
        }
    }

    /// Document skeleton consumed by stage one.
    pub fn skeleton(self) -> &'static str {
        match self {
            Self::Latex => latex::SKELETON,
            Self::Html => html::SKELETON,
        }
    }

    /// One column header cell, label escaped for the markup.
    pub fn header_cell(self, label: &str) -> String {
        match self {
            Self::Latex => format!("& {}", escape::latex(label)),
            Self::Html => format!("<th>{}</th>", escape::html(label)),
        }
    }

    /// One data cell whose content is the placeholder for `key`.
    pub fn data_cell(self, key: &str) -> String {
        match self {
            Self::Latex => format!("& {} ", placeholder(key)),
            Self::Html => format!("<td>{}</td>", placeholder(key)),
        }
    }

    /// Render the final document from the aggregator's derived structures.
    pub fn render(self, aggregator: &Aggregator) -> String {
        let intermediate = fill_template(self.skeleton(), aggregator.template());
        debug!("{:?} intermediate template:\n{intermediate}", self);
        fill_statistics(&intermediate, aggregator.statistics())
    }
}

/// Render both documents, then write them into `dir`.
///
/// Each document is staged in a temporary file inside `dir` and only moved
/// into place once both are fully written. If moving the second one fails,
/// the first is removed again, so an error never leaves a lone document.
///
/// Returns the written paths in [`Format::ALL`] order.
pub fn write_reports(aggregator: &Aggregator, dir: &Path) -> Result<Vec<PathBuf>, ReportError> {
    let mut staged: Vec<(PathBuf, NamedTempFile)> = Vec::with_capacity(Format::ALL.len());
    for format in Format::ALL {
        let path = dir.join(format.file_name());
        let document = format.render(aggregator);
        let io_error = |source| ReportError::Io {
            path: path.clone(),
            source,
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(io_error)?;
        tmp.write_all(document.as_bytes()).map_err(io_error)?;
        staged.push((path, tmp));
    }

    let mut written: Vec<PathBuf> = Vec::with_capacity(staged.len());
    for (path, tmp) in staged {
        if let Err(e) = tmp.persist(&path) {
            for done in &written {
                let _ = std::fs::remove_file(done);
            }
            return Err(ReportError::Io {
                path,
                source: e.error,
            });
        }
        written.push(path);
    }

    for path in &written {
        info!("Wrote {}", path.display());
    }
    Ok(written)
}
