use std::path::PathBuf;
use thiserror::Error;

/// Rows in the raw RUL table that don't match the `<value> <blank>` layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("{}: line {line} has {found} field(s), expected at least 2", .path.display())]
    TooFewFields {
        path: PathBuf,
        line: u64,
        found: usize,
    },
    #[error("{}: line {line} has unexpected value {value:?} in column {column}", .path.display())]
    UnexpectedField {
        path: PathBuf,
        line: u64,
        column: usize,
        value: String,
    },
    #[error("{}: line {line} has an empty RUL value", .path.display())]
    EmptyValue { path: PathBuf, line: u64 },
    #[error("{}: no rows", .path.display())]
    Empty { path: PathBuf },
}
