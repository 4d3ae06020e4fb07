//! Reads the dashboard datasets straight from CSV files on disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;

use crate::config::DataConfig;
use crate::domain::datasets::{InvestmentTable, RawTable, TrendTable};
use crate::ports::{DatasetError, DatasetReader};

use super::parser::parse_csv;

/// Uncached file reader; every call re-reads the file.
#[derive(Debug, Clone)]
pub struct CsvDatasetReader {
    trends_path: PathBuf,
    investment_path: PathBuf,
}

impl CsvDatasetReader {
    pub fn new(trends_path: impl Into<PathBuf>, investment_path: impl Into<PathBuf>) -> Self {
        Self {
            trends_path: trends_path.into(),
            investment_path: investment_path.into(),
        }
    }

    pub fn from_config(config: &DataConfig) -> Self {
        Self::new(config.trends_path(), config.investment_path())
    }

    async fn read_raw(&self, path: &Path) -> Result<RawTable, DatasetError> {
        let text = fs::read_to_string(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => DatasetError::NotFound(path.to_path_buf()),
            _ => DatasetError::Io {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
        })?;
        let table = parse_csv(&file_name(path), &text)?;
        tracing::debug!(path = %path.display(), rows = table.len(), "Parsed CSV file");
        Ok(table)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[async_trait]
impl DatasetReader for CsvDatasetReader {
    async fn trends(&self) -> Result<Arc<TrendTable>, DatasetError> {
        let raw = self.read_raw(&self.trends_path).await?;
        TrendTable::from_raw(&raw)
            .map(Arc::new)
            .map_err(|source| DatasetError::Schema {
                file: file_name(&self.trends_path),
                source,
            })
    }

    async fn investment(&self) -> Result<Arc<InvestmentTable>, DatasetError> {
        let raw = self.read_raw(&self.investment_path).await?;
        InvestmentTable::from_raw(&raw)
            .map(Arc::new)
            .map_err(|source| DatasetError::Schema {
                file: file_name(&self.investment_path),
                source,
            })
    }

    async fn raw_investment(&self) -> Result<Arc<RawTable>, DatasetError> {
        self.read_raw(&self.investment_path).await.map(Arc::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::datasets::Region;
    use std::io::Write;

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[tokio::test]
    async fn reads_both_datasets() {
        let dir = tempfile::tempdir().unwrap();
        let trends = write(dir.path(), "trends.csv", "Trend,2018,2019\nAI/ML,2.1,4.0\n");
        let investment = write(
            dir.path(),
            "inv.csv",
            "Year,World,United States,European Union & UK,China\n2021,12.7,8.0,2.0,1.6\n",
        );
        let reader = CsvDatasetReader::new(trends, investment);

        let trends = reader.trends().await.unwrap();
        assert_eq!(trends.years(), &[2018, 2019]);

        let investment = reader.investment().await.unwrap();
        assert_eq!(investment.peak(Region::World).unwrap().year, 2021);

        let raw = reader.raw_investment().await.unwrap();
        assert_eq!(raw.headers.len(), 5);
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let reader = CsvDatasetReader::new(dir.path().join("nope.csv"), dir.path().join("x.csv"));
        match reader.trends().await {
            Err(DatasetError::NotFound(path)) => assert!(path.ends_with("nope.csv")),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn wrong_columns_are_a_schema_error() {
        let dir = tempfile::tempdir().unwrap();
        let trends = write(dir.path(), "trends.csv", "Name,2018\nAI/ML,1\n");
        let reader = CsvDatasetReader::new(trends, dir.path().join("x.csv"));
        match reader.trends().await {
            Err(DatasetError::Schema { file, .. }) => assert_eq!(file, "trends.csv"),
            other => panic!("expected Schema, got {:?}", other),
        }
    }
}
