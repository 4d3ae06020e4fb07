//! Dashboard view models and the five page builders.

pub mod ai_market;
pub mod blocks;
pub mod chart;
pub mod impact;
pub mod industry_trends;
pub mod overview;
pub mod use_cases;

pub use blocks::{Block, MetricView, PageView, TableView, Toggles};
pub use chart::{BarSeries, ChartKind, ChartSpec, Orientation, XySeries};

use crate::domain::foundation::ValidationError;

/// A page could not be assembled from the given inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewError {
    #[error("Year {year} is not in the trends table (available: {available:?})")]
    InvalidYear { year: i32, available: Vec<i32> },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Table cell text for a number; missing values render as `n/a`.
pub(crate) fn format_value(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        value.to_string()
    }
}
