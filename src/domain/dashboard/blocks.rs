//! Page building blocks.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{DeltaDirection, KeyMetric};
use crate::domain::datasets::RawTable;
use crate::domain::foundation::Page;

use super::chart::ChartSpec;

/// A fully assembled view, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub page: Page,
    pub title: String,
    pub blocks: Vec<Block>,
}

impl PageView {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            title: page.display_name().to_string(),
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }

    pub fn charts(&self) -> impl Iterator<Item = &ChartSpec> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Chart { chart } => Some(chart),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    Title { text: String },
    Header { text: String },
    Subheader { text: String },
    /// CommonMark source.
    Markdown { text: String },
    Metrics { metrics: Vec<MetricView> },
    Chart { chart: ChartSpec },
    Table { table: TableView },
    /// Collapsible table revealed by a checkbox-like control. The heading,
    /// if any, is shown above the table only while open.
    Toggle {
        key: String,
        label: String,
        open: bool,
        heading: Option<String>,
        table: TableView,
    },
    YearSelect {
        label: String,
        param: String,
        years: Vec<i32>,
        selected: i32,
    },
    Image {
        src: String,
        caption: String,
        available: bool,
    },
}

impl Block {
    pub fn title(text: impl Into<String>) -> Self {
        Block::Title { text: text.into() }
    }

    pub fn header(text: impl Into<String>) -> Self {
        Block::Header { text: text.into() }
    }

    pub fn subheader(text: impl Into<String>) -> Self {
        Block::Subheader { text: text.into() }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Block::Markdown { text: text.into() }
    }

    pub fn chart(chart: ChartSpec) -> Self {
        Block::Chart { chart }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricView {
    pub label: String,
    pub value: String,
    pub delta: String,
    pub direction: DeltaDirection,
}

impl From<&KeyMetric> for MetricView {
    fn from(metric: &KeyMetric) -> Self {
        Self {
            label: metric.label.clone(),
            value: metric.value.clone(),
            delta: metric.delta.clone(),
            direction: metric.direction(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn with_row(mut self, row: Vec<String>) -> Self {
        self.rows.push(row);
        self
    }
}

impl From<&RawTable> for TableView {
    fn from(raw: &RawTable) -> Self {
        Self {
            headers: raw.headers.clone(),
            rows: raw.rows.clone(),
        }
    }
}

/// Which raw-data toggles the reader has opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Toggles {
    #[serde(default)]
    pub raw: bool,
    #[serde(default)]
    pub forecast: bool,
    #[serde(default)]
    pub tasks: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::key_metrics;

    #[test]
    fn metric_view_carries_direction() {
        let view = MetricView::from(&key_metrics()[1]);
        assert_eq!(view.label, "Telehealth Adoption");
        assert_eq!(view.direction, DeltaDirection::Down);
    }

    #[test]
    fn table_view_copies_raw_table() {
        let raw = RawTable::new(
            vec!["Year".to_string()],
            vec![vec!["2017".to_string()]],
        );
        let table = TableView::from(&raw);
        assert_eq!(table.headers, vec!["Year"]);
        assert_eq!(table.rows, vec![vec!["2017".to_string()]]);
    }

    #[test]
    fn blocks_serialize_with_type_tag() {
        let json = serde_json::to_value(Block::subheader("Investment Highlights")).unwrap();
        assert_eq!(json["type"], "subheader");
        assert_eq!(json["text"], "Investment Highlights");
    }
}
