//! Annual private AI investment in medical & healthcare by region.

use serde::Serialize;

use super::{cell, parse_number, RawTable, SchemaError};

const YEAR_COLUMN: &str = "Year";

/// The value columns of the investment file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    World,
    UnitedStates,
    EuropeanUnionUk,
    China,
}

impl Region {
    pub fn all() -> &'static [Region] {
        &[
            Region::World,
            Region::UnitedStates,
            Region::EuropeanUnionUk,
            Region::China,
        ]
    }

    /// Column header in the CSV file, also used as the legend label.
    pub fn label(&self) -> &'static str {
        match self {
            Region::World => "World",
            Region::UnitedStates => "United States",
            Region::EuropeanUnionUk => "European Union & UK",
            Region::China => "China",
        }
    }
}

/// One year of investment, USD billion (constant 2021 dollars).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRow {
    pub year: i32,
    pub world: f64,
    pub united_states: f64,
    pub eu_uk: f64,
    pub china: f64,
}

impl InvestmentRow {
    pub fn value(&self, region: Region) -> f64 {
        match region {
            Region::World => self.world,
            Region::UnitedStates => self.united_states,
            Region::EuropeanUnionUk => self.eu_uk,
            Region::China => self.china,
        }
    }
}

/// Maximum of a region's series and the year it first occurred.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Peak {
    pub value: f64,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentTable {
    rows: Vec<InvestmentRow>,
}

impl InvestmentTable {
    pub fn new(rows: Vec<InvestmentRow>) -> Self {
        Self { rows }
    }

    /// Builds the table from a raw CSV grid, locating columns by name.
    pub fn from_raw(raw: &RawTable) -> Result<Self, SchemaError> {
        let find = |name: &str| {
            raw.column_index(name)
                .ok_or_else(|| SchemaError::MissingColumn(name.to_string()))
        };
        let year_idx = find(YEAR_COLUMN)?;
        let region_idx = Region::all()
            .iter()
            .map(|r| find(r.label()))
            .collect::<Result<Vec<_>, _>>()?;

        let mut rows = Vec::with_capacity(raw.rows.len());
        for (row_no, cells) in raw.rows.iter().enumerate() {
            let line = row_no + 1;
            let year_cell = cell(cells, year_idx);
            let year = year_cell
                .trim()
                .parse::<i32>()
                .map_err(|_| SchemaError::InvalidValue {
                    row: line,
                    column: YEAR_COLUMN.to_string(),
                    value: year_cell.to_string(),
                })?;
            let mut values = [0.0_f64; 4];
            for (slot, (region, idx)) in values
                .iter_mut()
                .zip(Region::all().iter().zip(region_idx.iter()))
            {
                *slot = parse_number(cell(cells, *idx), line, region.label())?;
            }
            rows.push(InvestmentRow {
                year,
                world: values[0],
                united_states: values[1],
                eu_uk: values[2],
                china: values[3],
            });
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[InvestmentRow] {
        &self.rows
    }

    pub fn series(&self, region: Region) -> Vec<(i32, f64)> {
        self.rows.iter().map(|r| (r.year, r.value(region))).collect()
    }

    /// Largest value of a region and the year of its first occurrence.
    ///
    /// Missing values are skipped; `None` when nothing is present.
    pub fn peak(&self, region: Region) -> Option<Peak> {
        let mut best: Option<Peak> = None;
        for row in &self.rows {
            let value = row.value(region);
            if value.is_nan() {
                continue;
            }
            match best {
                Some(peak) if value <= peak.value => {}
                _ => best = Some(Peak { value, year: row.year }),
            }
        }
        best
    }
}
