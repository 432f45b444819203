//! JSON Lines inventory exports — one serde-tagged [`Record`] per line.
//!
//! This is the interchange format the command-line tool reads. Converting
//! a tool's native output (e.g. DFXML) into it is left to the producer.
//!
//! ```text
//! {"kind":"volume","partition_offset":32256,"ftype":"ntfs"}
//! {"kind":"file","alloc_inode":true,"alloc_name":true,"name_type":"r"}
//! ```
use super::{RecordSource, RecordStream};
use crate::error::InventoryError;
use crate::model::Record;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// A JSON Lines inventory on disk.
#[derive(Debug, Clone)]
pub struct JsonLinesInventory {
    path: PathBuf,
}

impl JsonLinesInventory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonLinesInventory {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn records(&self) -> Result<RecordStream<'_>, InventoryError> {
        let file = File::open(&self.path).map_err(|source| InventoryError::Io {
            path: self.path.clone(),
            source,
        })?;

        let stream = BufReader::new(file)
            .lines()
            .enumerate()
            .filter_map(move |(i, line)| {
                let line = match line {
                    Ok(line) => line,
                    Err(source) => {
                        return Some(Err(InventoryError::Io {
                            path: self.path.clone(),
                            source,
                        }))
                    }
                };
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    return None;
                }
                Some(
                    serde_json::from_str::<Record>(trimmed)
                        .map_err(|source| InventoryError::Parse { line: i + 1, source }),
                )
            });
        Ok(Box::new(stream))
    }
}
