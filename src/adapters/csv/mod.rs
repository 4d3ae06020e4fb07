//! CSV dataset adapters.

mod cached_reader;
mod file_reader;
mod parser;

pub use cached_reader::{CachedDatasetReader, WarmSummary};
pub use file_reader::CsvDatasetReader;
pub use parser::parse_csv;
