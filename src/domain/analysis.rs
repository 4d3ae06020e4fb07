//! Reshapes and orderings applied before charting.
//!
//! Nothing here aggregates: every function reorders, filters or pivots
//! literal figures.

use serde::Serialize;

use crate::domain::catalog::{CapabilityMatrix, CountryForecast, MarketSizeSeries, UseCaseShare};
use crate::domain::foundation::{GrowthRate, ValidationError};

/// A country ranked by projected growth.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthMarket {
    pub country: String,
    pub growth_rate: GrowthRate,
}

/// The `limit` countries with the highest projected growth rate.
///
/// Ties keep catalog order.
pub fn top_growth_markets(
    forecasts: &[CountryForecast],
    limit: usize,
) -> Result<Vec<GrowthMarket>, ValidationError> {
    let mut markets = forecasts
        .iter()
        .map(|f| {
            Ok(GrowthMarket {
                country: f.country.clone(),
                growth_rate: GrowthRate::parse(&f.growth_rate)?,
            })
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    markets.sort_by(|a, b| b.growth_rate.value().total_cmp(&a.growth_rate.value()));
    markets.truncate(limit);
    Ok(markets)
}

/// Orders use cases from smallest to largest share.
///
/// A horizontal bar chart draws the first category at the bottom, so the
/// largest share ends up on top.
pub fn sort_use_cases_ascending(mut cases: Vec<UseCaseShare>) -> Vec<UseCaseShare> {
    cases.sort_by(|a, b| a.share_percent.total_cmp(&b.share_percent));
    cases
}

/// Observed and projected halves of a market size series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitSeries {
    pub current: Vec<(i32, f64)>,
    pub projected: Vec<(i32, f64)>,
}

/// Splits a series at its boundary year.
///
/// The boundary point belongs to both halves so the two areas meet.
pub fn split_market_series(series: &MarketSizeSeries) -> Result<SplitSeries, ValidationError> {
    if series.years.len() != series.values.len() {
        return Err(ValidationError::invalid_format(
            "market_size",
            format!(
                "{} years but {} values",
                series.years.len(),
                series.values.len()
            ),
        ));
    }
    if !series.years.contains(&series.boundary_year) {
        let min = series.years.iter().copied().min().unwrap_or_default();
        let max = series.years.iter().copied().max().unwrap_or_default();
        return Err(ValidationError::out_of_range(
            "boundary_year",
            i64::from(min),
            i64::from(max),
            i64::from(series.boundary_year),
        ));
    }

    let points = series.years.iter().copied().zip(series.values.iter().copied());
    let current = points
        .clone()
        .filter(|(year, _)| *year <= series.boundary_year)
        .collect();
    let projected = points
        .filter(|(year, _)| *year >= series.boundary_year)
        .collect();

    Ok(SplitSeries { current, projected })
}

/// Heatmap grid with specialties as rows and tasks as columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapGrid {
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
    pub z: Vec<Vec<f64>>,
}

/// Transposes the task-by-specialty capability table.
pub fn capability_heatmap(matrix: &CapabilityMatrix) -> HeatmapGrid {
    let z = (0..matrix.specialties.len())
        .map(|s| {
            matrix
                .values
                .iter()
                .map(|task_row| task_row.get(s).copied().map(f64::from).unwrap_or(f64::NAN))
                .collect()
        })
        .collect();

    HeatmapGrid {
        row_labels: matrix.specialties.clone(),
        column_labels: matrix.tasks.clone(),
        z,
    }
}
