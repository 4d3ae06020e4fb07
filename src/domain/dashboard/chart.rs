//! Chart specifications.
//!
//! A `ChartSpec` says what to draw, never how; the SVG adapter turns it
//! into markup and the JSON API ships it as-is.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub x_title: String,
    pub y_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_title: Option<String>,
    pub kind: ChartKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ChartKind {
    /// One bar group per category, one bar per series.
    #[serde(rename_all = "camelCase")]
    Bar {
        categories: Vec<String>,
        series: Vec<BarSeries>,
        orientation: Orientation,
        /// Single-series bars take a palette color per category.
        color_by_category: bool,
    },
    #[serde(rename_all = "camelCase")]
    Line { series: Vec<XySeries>, markers: bool },
    /// Lines filled down to zero.
    #[serde(rename_all = "camelCase")]
    Area { series: Vec<XySeries> },
    #[serde(rename_all = "camelCase")]
    Heatmap {
        rows: Vec<String>,
        columns: Vec<String>,
        /// `z[row][column]`
        z: Vec<Vec<f64>>,
        show_values: bool,
        color_label: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarSeries {
    pub name: String,
    pub values: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl BarSeries {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XySeries {
    pub name: String,
    pub points: Vec<(f64, f64)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub dashed: bool,
}

impl XySeries {
    pub fn new(name: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            name: name.into(),
            points,
            color: None,
            dashed: false,
        }
    }

    /// Series keyed by integer year.
    pub fn from_years(name: impl Into<String>, points: &[(i32, f64)]) -> Self {
        Self::new(
            name,
            points.iter().map(|(x, y)| (f64::from(*x), *y)).collect(),
        )
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }
}

impl ChartSpec {
    pub fn new(kind: ChartKind, x_title: impl Into<String>, y_title: impl Into<String>) -> Self {
        Self {
            title: None,
            x_title: x_title.into(),
            y_title: y_title.into(),
            legend_title: None,
            kind,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_legend_title(mut self, legend_title: impl Into<String>) -> Self {
        self.legend_title = Some(legend_title.into());
        self
    }

    /// Names shown in the legend, in draw order.
    pub fn legend_entries(&self) -> Vec<String> {
        match &self.kind {
            ChartKind::Bar {
                categories,
                series,
                color_by_category,
                ..
            } => {
                if *color_by_category && series.len() == 1 {
                    categories.clone()
                } else {
                    series.iter().map(|s| s.name.clone()).collect()
                }
            }
            ChartKind::Line { series, .. } | ChartKind::Area { series } => {
                series.iter().map(|s| s.name.clone()).collect()
            }
            ChartKind::Heatmap { .. } => Vec::new(),
        }
    }
}
