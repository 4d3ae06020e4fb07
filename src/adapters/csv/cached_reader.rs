//! Process-lifetime cache in front of a dataset reader.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::OnceCell;

use crate::domain::datasets::{InvestmentTable, RawTable, TrendTable};
use crate::ports::{DatasetError, DatasetReader};

/// Loads each dataset at most once; failed loads are retried on the next call.
pub struct CachedDatasetReader<R> {
    inner: R,
    trends: OnceCell<Arc<TrendTable>>,
    investment: OnceCell<Arc<InvestmentTable>>,
    raw_investment: OnceCell<Arc<RawTable>>,
    loaded_at: once_cell::sync::OnceCell<DateTime<Utc>>,
}

/// Row counts reported after warming the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarmSummary {
    pub trend_rows: usize,
    pub trend_years: usize,
    pub investment_rows: usize,
}

impl<R: DatasetReader> CachedDatasetReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            trends: OnceCell::new(),
            investment: OnceCell::new(),
            raw_investment: OnceCell::new(),
            loaded_at: once_cell::sync::OnceCell::new(),
        }
    }

    /// When the first dataset was loaded, if any.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at.get().copied()
    }

    /// Loads every dataset up front.
    pub async fn warm(&self) -> Result<WarmSummary, DatasetError> {
        let trends = self.trends().await?;
        let investment = self.investment().await?;
        self.raw_investment().await?;

        let summary = WarmSummary {
            trend_rows: trends.rows().len(),
            trend_years: trends.years().len(),
            investment_rows: investment.rows().len(),
        };
        tracing::info!(
            trend_rows = summary.trend_rows,
            trend_years = summary.trend_years,
            investment_rows = summary.investment_rows,
            "Dataset cache warmed"
        );
        Ok(summary)
    }

    fn mark_loaded(&self) {
        self.loaded_at.get_or_init(Utc::now);
    }
}

#[async_trait]
impl<R: DatasetReader> DatasetReader for CachedDatasetReader<R> {
    async fn trends(&self) -> Result<Arc<TrendTable>, DatasetError> {
        let table = self
            .trends
            .get_or_try_init(|| async {
                tracing::debug!("Loading trends dataset");
                self.inner.trends().await
            })
            .await?;
        self.mark_loaded();
        Ok(table.clone())
    }

    async fn investment(&self) -> Result<Arc<InvestmentTable>, DatasetError> {
        let table = self
            .investment
            .get_or_try_init(|| async {
                tracing::debug!("Loading investment dataset");
                self.inner.investment().await
            })
            .await?;
        self.mark_loaded();
        Ok(table.clone())
    }

    async fn raw_investment(&self) -> Result<Arc<RawTable>, DatasetError> {
        let table = self
            .raw_investment
            .get_or_try_init(|| self.inner.raw_investment())
            .await?;
        self.mark_loaded();
        Ok(table.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::datasets::InvestmentRow;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    // ─────────────────────────────────────────────────────────────────────
    // Mock Implementation
    // ─────────────────────────────────────────────────────────────────────

    struct CountingReader {
        loads: AtomicUsize,
        fail_next: Mutex<bool>,
    }

    impl CountingReader {
        fn new() -> Self {
            Self {
                loads: AtomicUsize::new(0),
                fail_next: Mutex::new(false),
            }
        }
    }

    #[async_trait]
    impl DatasetReader for CountingReader {
        async fn trends(&self) -> Result<Arc<TrendTable>, DatasetError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            let mut fail = self.fail_next.lock().unwrap();
            if *fail {
                *fail = false;
                return Err(DatasetError::NotFound("trends.csv".into()));
            }
            let raw = RawTable::new(vec!["Trend".to_string(), "2018".to_string()], vec![]);
            Ok(Arc::new(TrendTable::from_raw(&raw).unwrap()))
        }

        async fn investment(&self) -> Result<Arc<InvestmentTable>, DatasetError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(InvestmentTable::new(vec![InvestmentRow {
                year: 2021,
                world: 1.0,
                united_states: 1.0,
                eu_uk: 1.0,
                china: 1.0,
            }])))
        }

        async fn raw_investment(&self) -> Result<Arc<RawTable>, DatasetError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(RawTable::default()))
        }
    }

    #[tokio::test]
    async fn loads_each_dataset_once() {
        let cached = CachedDatasetReader::new(CountingReader::new());
        assert!(cached.loaded_at().is_none());

        for _ in 0..3 {
            cached.trends().await.unwrap();
            cached.investment().await.unwrap();
        }
        assert_eq!(cached.inner.loads.load(Ordering::SeqCst), 2);
        assert!(cached.loaded_at().is_some());
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let reader = CountingReader::new();
        *reader.fail_next.lock().unwrap() = true;
        let cached = CachedDatasetReader::new(reader);

        assert!(cached.trends().await.is_err());
        assert!(cached.loaded_at().is_none());
        assert!(cached.trends().await.is_ok());
        assert_eq!(cached.inner.loads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn warm_reports_row_counts() {
        let cached = CachedDatasetReader::new(CountingReader::new());
        let summary = cached.warm().await.unwrap();
        assert_eq!(
            summary,
            WarmSummary {
                trend_rows: 0,
                trend_years: 1,
                investment_rows: 1,
            }
        );
        assert_eq!(cached.inner.loads.load(Ordering::SeqCst), 3);
    }
}
