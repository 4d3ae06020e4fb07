use crate::domain::catalog::{cagr_by_segment, key_metrics};
use crate::domain::foundation::Page;

use super::blocks::{Block, MetricView, PageView};
use super::chart::{BarSeries, ChartKind, ChartSpec, Orientation};

const PROJECT_SCOPE: &str = "\
This healthcare market research project analyzes:
- **Industry Trends**: Emerging technologies, spending patterns, and market dynamics
- **AI Healthcare Market**: Insights on growth, investment, and future forecasts of AI in healthcare
- **Impact of AI**: AI Capabilities, Adoption analysis
- **AI Use Cases**: Adoption of AI in various healthcare applications

Use the navigation panel on the left to explore specific areas of analysis.
";

const GROWTH_NOTES: &str = "\
- **Rapid Growth**: The AI in healthcare market is experiencing a high CAGR — estimated to reach ~60% by 2030. This reflects rapid adoption of AI technologies for diagnostics, personalized medicine, robotic surgery, and patient care.
- **Market Value Surge**: Due to this strong CAGR, the global AI in healthcare market is projected to grow from ~$25 billion in 2023 to over $215 billion by 2030, showcasing its transformative potential in revolutionizing healthcare delivery.
";

/// Headline metrics, project scope and CAGR per technology segment.
pub fn build() -> PageView {
    let mut view = PageView::new(Page::Overview);
    view.push(Block::header("Market Research Overview"))
        .push(Block::Metrics {
            metrics: key_metrics().iter().map(MetricView::from).collect(),
        })
        .push(Block::subheader("Project Scope"))
        .push(Block::markdown(PROJECT_SCOPE))
        .push(Block::subheader(
            "📈 CAGR (Compound Annual Growth Rate) from 2018 to 2025",
        ))
        .push(Block::chart(cagr_chart()))
        .push(Block::markdown(GROWTH_NOTES));
    view
}

fn cagr_chart() -> ChartSpec {
    let (categories, values): (Vec<_>, Vec<_>) = cagr_by_segment()
        .into_iter()
        .map(|entry| (entry.trend, entry.cagr_percent))
        .unzip();

    ChartSpec::new(
        ChartKind::Bar {
            categories,
            series: vec![BarSeries::new("CAGR (%)", values)],
            orientation: Orientation::Vertical,
            color_by_category: true,
        },
        "Trend",
        "CAGR (%)",
    )
    .with_title("CAGR (2018–2025) by Technology Segment")
    .with_legend_title("Trend")
}

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;
