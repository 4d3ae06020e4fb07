//! AI investment, country forecasts and global market growth.

use crate::domain::analysis::{split_market_series, top_growth_markets};
use crate::domain::catalog::{country_forecasts, global_market_size, CountryForecast};
use crate::domain::datasets::{InvestmentTable, Peak, RawTable, Region};
use crate::domain::foundation::Page;

use super::blocks::{Block, PageView, TableView, Toggles};
use super::chart::{BarSeries, ChartKind, ChartSpec, Orientation, XySeries};
use super::{format_value, ViewError};

const INTRO: &str = "\
This dashboard shows the annual private investment in artificial intelligence within the medical and healthcare sector.
Data includes companies that received more than $1.5 million in investment.
All values are in **constant 2021 US dollars**, adjusted for inflation.
";

pub fn build(
    investment: &InvestmentTable,
    raw_investment: &RawTable,
    toggles: Toggles,
    top_growth_limit: usize,
) -> Result<PageView, ViewError> {
    let forecasts = country_forecasts();
    let top = top_growth_markets(&forecasts, top_growth_limit)?;
    let split = split_market_series(&global_market_size())?;

    let mut view = PageView::new(Page::AiHealthcareMarket);
    view.push(Block::subheader(
        "AI Investment in Medical & Healthcare (2017-2023)",
    ))
    .push(Block::markdown(INTRO))
    .push(Block::chart(investment_chart(investment)))
    .push(Block::Toggle {
        key: "raw".to_string(),
        label: "Show raw data".to_string(),
        open: toggles.raw,
        heading: Some("Raw Investment Data".to_string()),
        table: TableView::from(raw_investment),
    })
    .push(Block::subheader("Investment Highlights"))
    .push(Block::markdown(highlights(investment)))
    .push(Block::subheader(
        "AI Healthcare Market Revenue Forecast (2023 vs. 2030)",
    ))
    .push(Block::chart(forecast_chart(&forecasts)))
    .push(Block::Toggle {
        key: "forecast".to_string(),
        label: "Show Forecast Table".to_string(),
        open: toggles.forecast,
        heading: None,
        table: forecast_table(&forecasts),
    })
    .push(Block::subheader("Top Growth Markets (2024–2030)"))
    .push(Block::markdown(format!(
        "Here are the top {} countries by projected growth rate:",
        top.len()
    )));

    let mut growth_table = TableView::new(vec![
        "Country".to_string(),
        "Growth Rate (2024-2030)".to_string(),
    ]);
    for market in &top {
        growth_table = growth_table.with_row(vec![
            market.country.clone(),
            market.growth_rate.label().to_string(),
        ]);
    }
    view.push(Block::Table {
        table: growth_table,
    });

    let market_chart = ChartSpec::new(
        ChartKind::Area {
            series: vec![
                XySeries::from_years("Current", &split.current).with_color("green"),
                XySeries::from_years("Projected", &split.projected)
                    .with_color("orange")
                    .dashed(),
            ],
        },
        "Year",
        "Market Size (USD Millions)",
    )
    .with_title("Global AI Healthcare Market Size (2016–2030)")
    .with_legend_title("Data Type");

    view.push(Block::subheader("Global AI Healthcare Market Growth"))
        .push(Block::chart(market_chart));

    Ok(view)
}

fn investment_chart(investment: &InvestmentTable) -> ChartSpec {
    let series = Region::all()
        .iter()
        .map(|region| XySeries::from_years(region.label(), &investment.series(*region)))
        .collect();

    ChartSpec::new(
        ChartKind::Line {
            series,
            markers: true,
        },
        "Year",
        "Investment (USD Billion)",
    )
    .with_title("Annual Private AI Investment in Healthcare by Region")
    .with_legend_title("Region")
}

/// Peak values per region; the year is reported for World and US only.
fn highlights(investment: &InvestmentTable) -> String {
    let line = |label: &str, peak: Option<Peak>, with_year: bool| match peak {
        Some(peak) if with_year => format!(
            "- **Peak {} investment:** ${:.1} billion in {}\n",
            label, peak.value, peak.year
        ),
        Some(peak) => format!("- **Peak {} investment:** ${:.1} billion\n", label, peak.value),
        None => format!("- **Peak {} investment:** no data\n", label),
    };

    [
        line("global", investment.peak(Region::World), true),
        line("US", investment.peak(Region::UnitedStates), true),
        line("EU+UK", investment.peak(Region::EuropeanUnionUk), false),
        line("China", investment.peak(Region::China), false),
    ]
    .concat()
}

fn forecast_chart(forecasts: &[CountryForecast]) -> ChartSpec {
    let categories = forecasts.iter().map(|f| f.country.clone()).collect();
    let revenue = forecasts.iter().map(|f| f.revenue_2023).collect();
    let forecast = forecasts.iter().map(|f| f.forecast_2030).collect();

    ChartSpec::new(
        ChartKind::Bar {
            categories,
            series: vec![
                BarSeries::new("Revenue 2023 (USD Billion)", revenue),
                BarSeries::new("Forecast 2030 (USD Billion)", forecast),
            ],
            orientation: Orientation::Vertical,
            color_by_category: false,
        },
        "Country",
        "USD Billion",
    )
    .with_title("AI Healthcare Revenue Forecast by Country")
    .with_legend_title("Year")
}

fn forecast_table(forecasts: &[CountryForecast]) -> TableView {
    let mut table = TableView::new(vec![
        "Country".to_string(),
        "Revenue 2023 (USD Billion)".to_string(),
        "Forecast 2030 (USD Billion)".to_string(),
        "Growth Rate (2024-2030)".to_string(),
    ]);
    for f in forecasts {
        table = table.with_row(vec![
            f.country.clone(),
            format_value(f.revenue_2023),
            format_value(f.forecast_2030),
            f.growth_rate.clone(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::datasets::InvestmentRow;

    fn investment() -> InvestmentTable {
        InvestmentTable::new(vec![
            InvestmentRow {
                year: 2020,
                world: 9.46,
                united_states: 5.1,
                eu_uk: 1.04,
                china: 2.73,
            },
            InvestmentRow {
                year: 2021,
                world: 12.74,
                united_states: 8.04,
                eu_uk: 1.96,
                china: 1.61,
            },
        ])
    }

    fn build_default(toggles: Toggles) -> PageView {
        build(&investment(), &RawTable::default(), toggles, 5).unwrap()
    }

    #[test]
    fn highlights_format_one_decimal_with_year() {
        let text = highlights(&investment());
        assert!(text.contains("- **Peak global investment:** $12.7 billion in 2021"));
        assert!(text.contains("- **Peak US investment:** $8.0 billion in 2021"));
        assert!(text.contains("- **Peak EU+UK investment:** $2.0 billion\n"));
        assert!(text.contains("- **Peak China investment:** $2.7 billion\n"));
    }

    #[test]
    fn highlights_handle_empty_table() {
        let text = highlights(&InvestmentTable::new(vec![]));
        assert!(text.contains("Peak global investment:** no data"));
    }

    #[test]
    fn page_charts_in_order() {
        let view = build_default(Toggles::default());
        let kinds: Vec<_> = view
            .charts()
            .map(|c| match c.kind {
                ChartKind::Line { .. } => "line",
                ChartKind::Bar { .. } => "bar",
                ChartKind::Area { .. } => "area",
                ChartKind::Heatmap { .. } => "heatmap",
            })
            .collect();
        assert_eq!(kinds, vec!["line", "bar", "area"]);
    }

    #[test]
    fn toggles_follow_request() {
        let view = build_default(Toggles {
            raw: true,
            forecast: false,
            tasks: false,
        });
        let states: Vec<_> = view
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Toggle { key, open, .. } => Some((key.as_str(), *open)),
                _ => None,
            })
            .collect();
        assert_eq!(states, vec![("raw", true), ("forecast", false)]);
    }

    #[test]
    fn raw_toggle_is_headed_and_titled() {
        let view = build_default(Toggles::default());
        assert_eq!(view.title, "AI Healthcare Market");
        let headings: Vec<_> = view
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Toggle { key, heading, .. } => Some((key.as_str(), heading.as_deref())),
                _ => None,
            })
            .collect();
        assert_eq!(
            headings,
            vec![("raw", Some("Raw Investment Data")), ("forecast", None)]
        );
    }

    #[test]
    fn top_growth_table_respects_limit() {
        let view = build(&investment(), &RawTable::default(), Toggles::default(), 3).unwrap();
        let table = view
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Table { table } => Some(table.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0], vec!["China".to_string(), "42.5%".to_string()]);
        assert!(view.blocks.contains(&Block::markdown(
            "Here are the top 3 countries by projected growth rate:"
        )));
    }

    #[test]
    fn market_area_splits_current_and_projected() {
        let view = build_default(Toggles::default());
        let area = view.charts().last().unwrap();
        match &area.kind {
            ChartKind::Area { series } => {
                assert_eq!(series[0].name, "Current");
                assert!(!series[0].dashed);
                assert_eq!(series[1].name, "Projected");
                assert!(series[1].dashed);
                assert_eq!(series[0].points.last(), series[1].points.first());
            }
            other => panic!("expected area chart, got {:?}", other),
        }
    }
}
