//! The template-structure descriptor: every stage-one field the document
//! skeletons reference, built from the sorted list of source labels.
//!
//! Row fields hold one data cell per source, and each cell is a stage-two
//! placeholder naming a [`CompositeKey`]. The numbers themselves only
//! arrive when the statistics map is merged in.
use super::key::CompositeKey;
use crate::analysis::SourceStatus;
use crate::model::TallyKey;
use crate::report::Format;
use std::collections::BTreeMap;

/// Field holding the number of compared sources.
pub const TOOL_COUNT_FIELD: &str = "tool_count";

/// Stage-one field map for both document formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescriptor {
    tool_count: usize,
    fields: BTreeMap<String, String>,
}

impl TemplateDescriptor {
    /// Build the descriptor. Labels are sorted and deduplicated first, so
    /// column order never depends on the order sources were recorded in.
    pub fn build<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let mut labels: Vec<&str> = labels.into_iter().collect();
        labels.sort_unstable();
        labels.dedup();

        let tool_count = labels.len();
        let mut fields: BTreeMap<String, String> = BTreeMap::new();
        fields.insert(TOOL_COUNT_FIELD.to_owned(), tool_count.to_string());
        fields.insert(
            "latex_column_aligns".to_owned(),
            vec!["r"; tool_count].join("|"),
        );
        fields.insert(
            "html_partial_colspan".to_owned(),
            (tool_count + 1).to_string(),
        );

        for format in Format::ALL {
            let prefix = format.field_prefix();
            let headers = fields
                .entry(format!("{prefix}_tool_column_headers"))
                .or_default();
            for &label in &labels {
                headers.push_str(&format.header_cell(label));
            }

            for status in SourceStatus::ALL {
                let sf = status.prefix();
                let row = fields
                    .entry(format!("{prefix}_row_{sf}_parts_processed"))
                    .or_default();
                for &label in &labels {
                    let key = CompositeKey::Volumes { status, label };
                    row.push_str(&format.data_cell(&key.to_string()));
                }

                for key in TallyKey::all() {
                    let row = fields
                        .entry(format!("{prefix}_row_{sf}_{}_{}", key.alloc, key.kind))
                        .or_default();
                    for &label in &labels {
                        let cell = CompositeKey::Files { status, key, label };
                        row.push_str(&format.data_cell(&cell.to_string()));
                    }
                }
            }
        }

        Self { tool_count, fields }
    }

    pub fn tool_count(&self) -> usize {
        self.tool_count
    }

    /// Look up a stage-one field.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// All fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
