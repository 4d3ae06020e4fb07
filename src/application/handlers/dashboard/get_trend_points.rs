//! GetTrendPointsHandler - Long-form trend data for external charting.

use std::sync::Arc;

use crate::domain::datasets::TrendPoint;
use crate::ports::{DatasetError, DatasetReader};

pub struct GetTrendPointsHandler {
    reader: Arc<dyn DatasetReader>,
}

impl GetTrendPointsHandler {
    pub fn new(reader: Arc<dyn DatasetReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self) -> Result<Vec<TrendPoint>, DatasetError> {
        Ok(self.reader.trends().await?.melt())
    }
}
