//! Market size per technology trend, one column per year.

use serde::Serialize;

use super::{cell, parse_number, RawTable, SchemaError};

const TREND_COLUMN: &str = "Trend";

/// One technology trend and its market size for every year column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendRow {
    pub trend: String,
    /// Market size in USD billion, aligned with `TrendTable::years`.
    pub values: Vec<f64>,
}

/// A single (trend, year) observation of the long form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub trend: String,
    pub year: i32,
    pub market_size: f64,
}

/// Wide trend table: rows are trends, columns are years.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendTable {
    years: Vec<i32>,
    rows: Vec<TrendRow>,
}

impl TrendTable {
    /// Builds the table from a raw CSV grid.
    ///
    /// Every column other than `Trend` must be an integer year.
    pub fn from_raw(raw: &RawTable) -> Result<Self, SchemaError> {
        let trend_idx = raw
            .column_index(TREND_COLUMN)
            .ok_or_else(|| SchemaError::MissingColumn(TREND_COLUMN.to_string()))?;

        let mut year_columns = Vec::new();
        for (idx, header) in raw.headers.iter().enumerate() {
            if idx == trend_idx {
                continue;
            }
            let year = header
                .trim()
                .parse::<i32>()
                .map_err(|_| SchemaError::InvalidHeader {
                    column: header.clone(),
                    reason: "expected a year".to_string(),
                })?;
            year_columns.push((idx, year));
        }

        let mut rows = Vec::with_capacity(raw.rows.len());
        for (row_no, cells) in raw.rows.iter().enumerate() {
            let trend = cell(cells, trend_idx).trim().to_string();
            let values = year_columns
                .iter()
                .map(|(idx, _)| parse_number(cell(cells, *idx), row_no + 1, &raw.headers[*idx]))
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(TrendRow { trend, values });
        }

        Ok(Self {
            years: year_columns.into_iter().map(|(_, y)| y).collect(),
            rows,
        })
    }

    /// The selectable years, in column order.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn rows(&self) -> &[TrendRow] {
        &self.rows
    }

    /// Reshapes to one point per (trend, year).
    ///
    /// Points are ordered year-major: every trend for the first year, then
    /// every trend for the next.
    pub fn melt(&self) -> Vec<TrendPoint> {
        let mut points = Vec::with_capacity(self.years.len() * self.rows.len());
        for (col, year) in self.years.iter().enumerate() {
            for row in &self.rows {
                points.push(TrendPoint {
                    trend: row.trend.clone(),
                    year: *year,
                    market_size: row.values[col],
                });
            }
        }
        points
    }

    /// The trend column paired with one year's market size.
    pub fn year_slice(&self, year: i32) -> Option<Vec<(String, f64)>> {
        let col = self.years.iter().position(|y| *y == year)?;
        Some(
            self.rows
                .iter()
                .map(|row| (row.trend.clone(), row.values[col]))
                .collect(),
        )
    }
}
