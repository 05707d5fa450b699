// src/process/mod.rs
use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;
use tracing::{debug, info};

use crate::error::ParseError;

pub mod utils;
pub mod write;

pub use utils::ValueKind;
pub use write::write_rul_csv;

/// Header of the single output column.
pub const RUL_COLUMN: &str = "RUL";

/// The processed table: one `RUL` value per raw row, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RulTable {
    /// Values exactly as read from the raw file.
    pub values: Vec<String>,
}

impl RulTable {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    pub fn value_kind(&self) -> ValueKind {
        utils::infer_column_kind(self.iter())
    }
}

/// Parse the space-delimited raw RUL file.
///
/// Each row is `<value> <artifact>`: field 1 comes from the trailing space and
/// is dropped whatever it holds. Any further fields must be empty (more
/// trailing spaces). Blank lines are skipped; a file with no rows at all is
/// an error, as is a row whose value field is empty (a leading space).
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_rul_table<P: AsRef<Path>>(path: P) -> Result<RulTable> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true) // field counts are checked per row below
        .from_path(path)
        .with_context(|| format!("Failed to open raw table {}", path.display()))?;

    let mut values = Vec::new();
    for result in rdr.records() {
        let record = result.with_context(|| format!("CSV parse error in {}", path.display()))?;
        // `records()` sets a position on every record
        let line = record.position().map_or(0, |p| p.line());
        values.push(rul_value(path, line, &record)?);
    }

    if values.is_empty() {
        return Err(ParseError::Empty {
            path: path.to_path_buf(),
        }
        .into());
    }

    let table = RulTable { values };
    info!(rows = table.len(), kind = %table.value_kind(), "loaded RUL table");
    Ok(table)
}

fn rul_value(path: &Path, line: u64, record: &StringRecord) -> Result<String, ParseError> {
    if record.len() < 2 {
        return Err(ParseError::TooFewFields {
            path: path.to_path_buf(),
            line,
            found: record.len(),
        });
    }
    if let Some((column, value)) = record
        .iter()
        .enumerate()
        .skip(2)
        .find(|(_, v)| !v.is_empty())
    {
        return Err(ParseError::UnexpectedField {
            path: path.to_path_buf(),
            line,
            column,
            value: value.to_string(),
        });
    }
    if record.len() > 2 {
        debug!(line, fields = record.len(), "dropping extra blank fields");
    }
    if record[0].is_empty() {
        return Err(ParseError::EmptyValue {
            path: path.to_path_buf(),
            line,
        });
    }
    Ok(record[0].to_string())
}
