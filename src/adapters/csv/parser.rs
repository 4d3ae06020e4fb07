//! CSV parsing for the dashboard's flat data files.
//!
//! Built on the `csv` crate: RFC 4180 quoting (including fields that span
//! lines), CRLF line endings, empty lines skipped and cells trimmed. A
//! leading byte-order mark is dropped before parsing.

use csv::{ErrorKind, ReaderBuilder, StringRecord, Trim};

use crate::domain::datasets::RawTable;
use crate::ports::DatasetError;

/// Parses CSV text; the first non-empty line is the header row.
pub fn parse_csv(file: &str, text: &str) -> Result<RawTable, DatasetError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(false)
        .from_reader(text.as_bytes());

    let headers = to_cells(reader.headers().map_err(|e| malformed(file, e))?);
    if headers.iter().all(String::is_empty) {
        return Err(DatasetError::Malformed {
            file: file.to_string(),
            line: 1,
            reason: "missing header row".to_string(),
        });
    }

    let rows = reader
        .records()
        .map(|record| record.map(|r| to_cells(&r)).map_err(|e| malformed(file, e)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RawTable::new(headers, rows))
}

fn to_cells(record: &StringRecord) -> Vec<String> {
    record.iter().map(str::to_string).collect()
}

fn malformed(file: &str, error: csv::Error) -> DatasetError {
    let line = error.position().map_or(0, |p| p.line() as usize);
    let reason = match error.kind() {
        ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => format!("expected {} fields, found {}", expected_len, len),
        _ => error.to_string(),
    };
    DatasetError::Malformed {
        file: file.to_string(),
        line,
        reason,
    }
}
