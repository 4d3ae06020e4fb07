//! Tabular datasets loaded from CSV files.
//!
//! `RawTable` is the verbatim cell grid; the typed tables validate the
//! expected columns once at load time so page builders never re-parse.

mod investment;
mod raw;
mod trends;

pub use investment::{InvestmentRow, InvestmentTable, Peak, Region};
pub use raw::RawTable;
pub use trends::{TrendPoint, TrendRow, TrendTable};

use thiserror::Error;

/// A CSV file parsed but did not have the expected shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("Missing column '{0}'")]
    MissingColumn(String),

    #[error("Invalid header '{column}': {reason}")]
    InvalidHeader { column: String, reason: String },

    #[error("Invalid value '{value}' in column '{column}' at row {row}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },
}

/// Cell at `idx`, or empty when the row is short.
pub(crate) fn cell(cells: &[String], idx: usize) -> &str {
    cells.get(idx).map(String::as_str).unwrap_or("")
}

/// Parses a numeric cell; an empty cell is a missing value.
pub(crate) fn parse_number(
    cell: &str,
    row: usize,
    column: &str,
) -> Result<f64, SchemaError> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Ok(f64::NAN);
    }
    trimmed.parse::<f64>().map_err(|_| SchemaError::InvalidValue {
        row,
        column: column.to_string(),
        value: cell.to_string(),
    })
}
