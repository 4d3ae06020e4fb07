use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::datasets::{InvestmentTable, RawTable, SchemaError, TrendTable};

/// Read-only port for the two CSV-backed datasets
#[async_trait]
pub trait DatasetReader: Send + Sync {
    /// Market size per technology trend and year
    async fn trends(&self) -> Result<Arc<TrendTable>, DatasetError>;

    /// Annual private AI investment per region
    async fn investment(&self) -> Result<Arc<InvestmentTable>, DatasetError>;

    /// The investment file cell-for-cell, for raw data tables
    async fn raw_investment(&self) -> Result<Arc<RawTable>, DatasetError>;
}

/// Errors that can occur while loading a dataset
#[derive(Debug, Clone, thiserror::Error)]
pub enum DatasetError {
    #[error("Data file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    #[error("Malformed CSV in {file} at line {line}: {reason}")]
    Malformed {
        file: String,
        line: usize,
        reason: String,
    },

    #[error("Unexpected layout in {file}: {source}")]
    Schema {
        file: String,
        #[source]
        source: SchemaError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_trait_is_object_safe() {
        fn accepts(_reader: Option<Arc<dyn DatasetReader>>) {}
        accepts(None);
    }

    #[test]
    fn test_error_messages() {
        let err = DatasetError::NotFound(PathBuf::from("data/trends.csv"));
        assert_eq!(err.to_string(), "Data file not found: data/trends.csv");

        let err = DatasetError::Malformed {
            file: "trends.csv".to_string(),
            line: 4,
            reason: "expected 9 fields, found 8".to_string(),
        };
        assert!(err.to_string().contains("line 4"));

        let err = DatasetError::Schema {
            file: "trends.csv".to_string(),
            source: SchemaError::MissingColumn("Trend".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected layout in trends.csv: Missing column 'Trend'"
        );
    }
}
