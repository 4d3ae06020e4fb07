//! Market size of healthcare technology trends, 2018 onwards.

use crate::domain::datasets::TrendTable;
use crate::domain::foundation::Page;

use super::blocks::{Block, PageView};
use super::chart::{BarSeries, ChartKind, ChartSpec, Orientation, XySeries};
use super::ViewError;

const MARKET_SIZE: &str = "Market Size (USD Billion)";

const TREND_LIST: &str = "\
Healthcare Industry Technological Trends:
- **AI/ML**
- **Medical Robotics**
- **Blockchain**
- **Cybersecurity**
- **Health apps**
- **Telemedicine and virtual care**
- **Wearable devices**
";

/// Trend lines over all years plus a per-year comparison.
///
/// `year` defaults to the first year column; a year the table does not
/// contain is rejected.
pub fn build(trends: &TrendTable, year: Option<i32>) -> Result<PageView, ViewError> {
    let selected = match year {
        Some(year) if trends.years().contains(&year) => Some(year),
        Some(year) => {
            return Err(ViewError::InvalidYear {
                year,
                available: trends.years().to_vec(),
            })
        }
        None => trends.years().first().copied(),
    };

    let mut view = PageView::new(Page::IndustryTrends);
    view.push(Block::title("📈 Healthcare Market Research: Industry Trends"))
        .push(Block::markdown(
            "Analyze healthcare technology trends from 2018 to 2025.",
        ))
        .push(Block::markdown(TREND_LIST))
        .push(Block::subheader("Trend Growth Over Time"))
        .push(Block::chart(growth_chart(trends)));

    if let Some(selected) = selected {
        view.push(Block::YearSelect {
            label: "Select a Year to Compare Trends".to_string(),
            param: "year".to_string(),
            years: trends.years().to_vec(),
            selected,
        })
        .push(Block::subheader(format!(
            "Market Size Comparison for {}",
            selected
        )));
        if let Some(slice) = trends.year_slice(selected) {
            view.push(Block::chart(comparison_chart(slice)));
        }
    }

    Ok(view)
}

fn growth_chart(trends: &TrendTable) -> ChartSpec {
    // Group the long form back into one line per trend, keeping first-seen order.
    let mut series: Vec<XySeries> = Vec::new();
    for point in trends.melt() {
        let xy = (f64::from(point.year), point.market_size);
        match series.iter_mut().find(|s| s.name == point.trend) {
            Some(existing) => existing.points.push(xy),
            None => series.push(XySeries::new(point.trend, vec![xy])),
        }
    }

    ChartSpec::new(
        ChartKind::Line {
            series,
            markers: true,
        },
        "Year",
        MARKET_SIZE,
    )
    .with_legend_title("Trend")
}

fn comparison_chart(slice: Vec<(String, f64)>) -> ChartSpec {
    let (categories, values): (Vec<_>, Vec<_>) = slice.into_iter().unzip();
    ChartSpec::new(
        ChartKind::Bar {
            categories,
            series: vec![BarSeries::new(MARKET_SIZE, values)],
            orientation: Orientation::Vertical,
            color_by_category: true,
        },
        "Trend",
        MARKET_SIZE,
    )
    .with_legend_title("Trend")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::datasets::RawTable;

    fn trends() -> TrendTable {
        let raw = RawTable::new(
            ["Trend", "2018", "2019"].iter().map(|s| s.to_string()).collect(),
            vec![
                ["AI/ML", "2.1", "4.0"].iter().map(|s| s.to_string()).collect(),
                ["Telemedicine", "38.0", "45.5"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ],
        );
        TrendTable::from_raw(&raw).unwrap()
    }

    #[test]
    fn default_year_is_first_column() {
        let view = build(&trends(), None).unwrap();
        let select = view
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::YearSelect { selected, years, .. } => Some((*selected, years.clone())),
                _ => None,
            })
            .unwrap();
        assert_eq!(select, (2018, vec![2018, 2019]));
        assert!(view.blocks.contains(&Block::subheader("Market Size Comparison for 2018")));
    }

    #[test]
    fn line_chart_has_one_series_per_trend() {
        let view = build(&trends(), Some(2019)).unwrap();
        let line = view.charts().next().unwrap();
        match &line.kind {
            ChartKind::Line { series, markers } => {
                assert!(*markers);
                assert_eq!(series.len(), 2);
                assert_eq!(series[1].name, "Telemedicine");
                assert_eq!(series[1].points, vec![(2018.0, 38.0), (2019.0, 45.5)]);
            }
            other => panic!("expected line chart, got {:?}", other),
        }
    }

    #[test]
    fn comparison_uses_selected_year() {
        let view = build(&trends(), Some(2019)).unwrap();
        let bar = view.charts().nth(1).unwrap();
        match &bar.kind {
            ChartKind::Bar { series, .. } => assert_eq!(series[0].values, vec![4.0, 45.5]),
            other => panic!("expected bar chart, got {:?}", other),
        }
    }

    #[test]
    fn unknown_year_is_rejected() {
        let err = build(&trends(), Some(2030)).unwrap_err();
        assert_eq!(
            err,
            ViewError::InvalidYear {
                year: 2030,
                available: vec![2018, 2019]
            }
        );
    }

    #[test]
    fn empty_table_renders_without_comparison() {
        let raw = RawTable::new(vec!["Trend".to_string()], vec![]);
        let view = build(&TrendTable::from_raw(&raw).unwrap(), None).unwrap();
        assert_eq!(view.charts().count(), 1);
        assert!(!view
            .blocks
            .iter()
            .any(|b| matches!(b, Block::YearSelect { .. })));
    }
}
