//! AI capability by specialty and use-case adoption.

use crate::domain::analysis::{capability_heatmap, sort_use_cases_ascending};
use crate::domain::catalog::{capability_matrix, use_case_shares, CapabilityMatrix};
use crate::domain::foundation::Page;

use super::blocks::{Block, PageView, TableView, Toggles};
use super::chart::{BarSeries, ChartKind, ChartSpec, Orientation};

const INSIGHTS: &str = "\
- **Pathology** leads in AI capability across almost all medical tasks, with the highest average score (59%).
- **Radiology** and **Surgical Specialties** have similar average scores (42%), while **Psychiatry** shows lower capability in tasks involving physical interaction.
- Highest capability across all specialties is in **establishing prognoses (72%)** and **reaching diagnoses (69%)**.
- Tasks requiring human empathy or interaction, like **providing emphatic care**, show the lowest AI capability (average 9%).
- Overall, AI shows strongest potential in analytical and documentation tasks across specialties.
";

const USE_CASE_COLOR: &str = "#1f77b4";

pub fn build(toggles: Toggles) -> PageView {
    let matrix = capability_matrix();
    let grid = capability_heatmap(&matrix);

    let heatmap = ChartSpec::new(
        ChartKind::Heatmap {
            rows: grid.row_labels,
            columns: grid.column_labels,
            z: grid.z,
            show_values: true,
            color_label: "% Capability".to_string(),
        },
        "Task",
        "Specialty",
    )
    .with_title("AI Capability (%) Across Medical Tasks and Specialties");

    let mut view = PageView::new(Page::ImpactOfAi);
    view.push(Block::chart(heatmap))
        .push(Block::Toggle {
            key: "tasks".to_string(),
            label: "Show AI Task Data".to_string(),
            open: toggles.tasks,
            heading: None,
            table: task_table(&matrix),
        })
        .push(Block::subheader("Key Insights from AI Task Capabilities"))
        .push(Block::markdown(INSIGHTS))
        .push(Block::title("AI Use Case Adoption in Healthcare"))
        .push(Block::chart(use_case_chart()));
    view
}

fn task_table(matrix: &CapabilityMatrix) -> TableView {
    let mut headers = vec!["Task".to_string()];
    headers.extend(matrix.specialties.iter().cloned());
    let mut table = TableView::new(headers);
    for (task, values) in matrix.tasks.iter().zip(&matrix.values) {
        let mut row = vec![task.clone()];
        row.extend(values.iter().map(|v| v.to_string()));
        table = table.with_row(row);
    }
    table
}

fn use_case_chart() -> ChartSpec {
    let (categories, values): (Vec<_>, Vec<_>) = sort_use_cases_ascending(use_case_shares())
        .into_iter()
        .map(|c| (c.use_case, c.share_percent))
        .unzip();

    ChartSpec::new(
        ChartKind::Bar {
            categories,
            series: vec![
                BarSeries::new("Share of Respondents (%)", values).with_color(USE_CASE_COLOR)
            ],
            orientation: Orientation::Horizontal,
            color_by_category: false,
        },
        "Percentage of Respondents",
        "AI Use Case",
    )
    .with_title("AI Use Cases in Healthcare (by Share of Respondents)")
}
