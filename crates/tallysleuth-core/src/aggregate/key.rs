//! Composite keys naming one cell of the comparison matrix.
use crate::analysis::SourceStatus;
use crate::model::TallyKey;
use std::borrow::Cow;
use std::fmt;

/// Middle segment of the per-source volume-count key.
pub const VOLUMES_SEGMENT: &str = "volumes";

/// A `/`-delimited cell identifier:
/// `status/alloc/type/label` or `status/volumes/label`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeKey<'a> {
    Volumes {
        status: SourceStatus,
        label: &'a str,
    },
    Files {
        status: SourceStatus,
        key: TallyKey,
        label: &'a str,
    },
}

/// Label as it appears inside a key. Braces would end the placeholder that
/// wraps the key, so they are percent-encoded (and `%` itself, to keep the
/// encoding one-to-one).
fn key_label(label: &str) -> Cow<'_, str> {
    if !label.contains(['{', '}', '%']) {
        return Cow::Borrowed(label);
    }
    let mut out = String::with_capacity(label.len() + 8);
    for ch in label.chars() {
        match ch {
            '%' => out.push_str("%25"),
            '{' => out.push_str("%7B"),
            '}' => out.push_str("%7D"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

impl fmt::Display for CompositeKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Volumes { status, label } => {
                let label = key_label(label);
                write!(f, "{}/{VOLUMES_SEGMENT}/{label}", status.prefix())
            }
            Self::Files { status, key, label } => {
                let label = key_label(label);
                write!(f, "{}/{}/{}/{label}", status.prefix(), key.alloc, key.kind)
            }
        }
    }
}
