//! Labeled inventory specifications: `longlabel:shortlabel:path`.
use crate::error::SpecError;
use compact_str::CompactString;
use std::path::PathBuf;
use std::str::FromStr;

/// Separator between specification segments.
const SEGMENT_SEPARATOR: char = ':';

/// One parsed `longlabel:shortlabel:path` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    /// Column label used in the rendered tables and composite keys.
    pub label: CompactString,
    /// Short label. Only used in log messages; tables show `label`.
    pub short_label: CompactString,
    /// Path to the tool's inventory.
    pub path: PathBuf,
}

impl SourceSpec {
    /// Fail with [`SpecError::NotFound`] unless the inventory path exists.
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.path.exists() {
            Ok(())
        } else {
            Err(SpecError::NotFound {
                path: self.path.clone(),
            })
        }
    }
}

impl FromStr for SourceSpec {
    type Err = SpecError;

    /// Split into exactly 3 or 4 segments. The fourth segment tolerates a
    /// drive-letter colon inside a Windows absolute path; everything after
    /// the short label is rejoined to form the path.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = spec.split(SEGMENT_SEPARATOR).collect();
        if !matches!(parts.len(), 3 | 4) {
            return Err(SpecError::Malformed {
                spec: spec.to_owned(),
                segments: parts.len(),
            });
        }
        Ok(Self {
            label: CompactString::new(parts[0]),
            short_label: CompactString::new(parts[1]),
            path: PathBuf::from(parts[2..].join(":")),
        })
    }
}

/// Parse and validate every specification, failing on the first bad one.
///
/// Nothing is processed until all arguments pass, so a typo in the last
/// argument never leaves the earlier sources half-summarised.
pub fn validate_all<S: AsRef<str>>(specs: &[S]) -> Result<Vec<SourceSpec>, SpecError> {
    specs
        .iter()
        .map(|raw| {
            let spec: SourceSpec = raw.as_ref().parse()?;
            spec.validate()?;
            Ok(spec)
        })
        .collect()
}
