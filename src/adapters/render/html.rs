//! HTML document rendering for dashboard pages.
//!
//! Every page shares the same chrome: application title and intro, a
//! sidebar listing the five pages, and a footer with the dataset load time.
//! Interactive widgets degrade to plain links and GET forms so the
//! dashboard needs no client-side script.

use chrono::{DateTime, Utc};
use http::StatusCode;
use pulldown_cmark::{html, Options, Parser};

use crate::config::DashboardConfig;
use crate::domain::catalog::DeltaDirection;
use crate::domain::dashboard::{Block, MetricView, PageView, TableView};
use crate::domain::foundation::Page;

use super::escape;
use super::svg::render_chart;

const INTRO: &str = "This dashboard presents comprehensive analytics on healthcare industry trends and Impact of AI on transforming the healthcare landscape.";

/// Application-wide framing shared by every rendered page.
#[derive(Debug, Clone, PartialEq)]
pub struct Chrome {
    pub title: String,
    pub icon: String,
    /// When the datasets were read, shown in the footer.
    pub loaded_at: Option<DateTime<Utc>>,
}

impl Chrome {
    pub fn new(title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
            loaded_at: None,
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.title.clone(), config.icon.clone())
    }

    pub fn with_loaded_at(mut self, loaded_at: DateTime<Utc>) -> Self {
        self.loaded_at = Some(loaded_at);
        self
    }
}

/// Render a page view as a complete HTML document.
pub fn render_page(view: &PageView, chrome: &Chrome) -> String {
    let state = QueryState::from_view(view);
    let mut main = String::new();
    for block in &view.blocks {
        main.push_str(&render_block(block, view.page, &state));
        main.push('\n');
    }
    document(chrome, Some(view.page), view.page.display_name(), &main)
}

/// Render an error page that keeps the sidebar usable.
pub fn render_error(status: StatusCode, message: &str, chrome: &Chrome) -> String {
    let heading = status.canonical_reason().unwrap_or("Error");
    let main = format!(
        r#"<section class="error"><h2>{code} {heading}</h2><p>{message}</p><p><a href="{home}">Back to {home_name}</a></p></section>"#,
        code = status.as_u16(),
        heading = escape(heading),
        message = escape(message),
        home = Page::Overview.path(),
        home_name = Page::Overview.display_name(),
    );
    document(chrome, None, heading, &main)
}

// ════════════════════════════════════════════════════════════════════════════════
// Document shell
// ════════════════════════════════════════════════════════════════════════════════

fn document(chrome: &Chrome, current: Option<Page>, page_title: &str, main: &str) -> String {
    let footer = chrome
        .loaded_at
        .map(|at| {
            format!(
                "<footer>Data loaded {}</footer>",
                at.format("%Y-%m-%d %H:%M:%S UTC")
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{page_title} | {title}</title>
    <link rel="icon" href="data:image/svg+xml,&lt;svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22&gt;&lt;text y=%22.9em%22 font-size=%2290%22&gt;{icon}&lt;/text&gt;&lt;/svg&gt;">
    <style>
{css}
    </style>
</head>
<body>
<div class="layout">
{sidebar}
<main>
    <header class="app-header">
        <h1>{icon} {title}</h1>
        <p class="intro">{intro}</p>
    </header>
{main}
{footer}
</main>
</div>
</body>
</html>"#,
        page_title = escape(page_title),
        title = escape(&chrome.title),
        icon = escape(&chrome.icon),
        css = PAGE_CSS,
        sidebar = sidebar(current),
        intro = INTRO,
        main = main,
        footer = footer,
    )
}

fn sidebar(current: Option<Page>) -> String {
    let mut items = String::new();
    for page in Page::all() {
        let selected = current == Some(*page);
        items.push_str(&format!(
            r#"<li><a href="{href}"{attrs}><span class="radio">{mark}</span>{name}</a></li>"#,
            href = page.path(),
            attrs = if selected {
                r#" class="current" aria-current="page""#
            } else {
                ""
            },
            mark = if selected { "◉" } else { "○" },
            name = escape(page.display_name()),
        ));
    }
    format!(
        r#"<nav class="sidebar"><h2>Navigation</h2><p class="nav-label">Select a Page</p><ul>{}</ul></nav>"#,
        items
    )
}

// ════════════════════════════════════════════════════════════════════════════════
// Query state
// ════════════════════════════════════════════════════════════════════════════════

/// Selections already present on the page, carried through links and forms.
#[derive(Debug, Default)]
struct QueryState {
    year: Option<(String, i32)>,
    open: Vec<String>,
}

impl QueryState {
    fn from_view(view: &PageView) -> Self {
        let mut state = Self::default();
        for block in &view.blocks {
            match block {
                Block::YearSelect {
                    param, selected, ..
                } => state.year = Some((param.clone(), *selected)),
                Block::Toggle { key, open: true, .. } => state.open.push(key.clone()),
                _ => {}
            }
        }
        state
    }

    /// Link to `page` with `toggle` flipped and everything else kept.
    fn toggle_href(&self, page: Page, toggle: &str) -> String {
        let mut open: Vec<&str> = self
            .open
            .iter()
            .map(String::as_str)
            .filter(|k| *k != toggle)
            .collect();
        if !self.open.iter().any(|k| k == toggle) {
            open.push(toggle);
        }

        let mut params: Vec<String> = Vec::new();
        if let Some((param, year)) = &self.year {
            params.push(format!("{}={}", param, year));
        }
        params.extend(open.iter().map(|k| format!("{}=true", k)));

        if params.is_empty() {
            page.path()
        } else {
            format!("{}?{}", page.path(), params.join("&"))
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Blocks
// ════════════════════════════════════════════════════════════════════════════════

fn render_block(block: &Block, page: Page, state: &QueryState) -> String {
    match block {
        Block::Title { text } => format!(r#"<h1 class="page-title">{}</h1>"#, escape(text)),
        Block::Header { text } => format!("<h2>{}</h2>", escape(text)),
        Block::Subheader { text } => format!("<h3>{}</h3>", escape(text)),
        Block::Markdown { text } => {
            format!(r#"<div class="markdown">{}</div>"#, markdown_to_html(text))
        }
        Block::Metrics { metrics } => render_metrics(metrics),
        Block::Chart { chart } => format!(
            r#"<figure class="chart-container">{}</figure>"#,
            render_chart(chart)
        ),
        Block::Table { table } => render_table(table),
        Block::Toggle {
            key,
            label,
            open,
            heading,
            table,
        } => format!(
            r#"<details class="toggle"{open}><summary><a href="{href}">{mark} {label}</a></summary>{body}</details>"#,
            open = if *open { " open" } else { "" },
            href = escape(&state.toggle_href(page, key)),
            mark = if *open { "☑" } else { "☐" },
            label = escape(label),
            body = match (*open, heading) {
                (false, _) => String::new(),
                (true, Some(heading)) => {
                    format!("<h3>{}</h3>{}", escape(heading), render_table(table))
                }
                (true, None) => render_table(table),
            },
        ),
        Block::YearSelect {
            label,
            param,
            years,
            selected,
        } => {
            let options: String = years
                .iter()
                .map(|y| {
                    format!(
                        r#"<option value="{y}"{sel}>{y}</option>"#,
                        y = y,
                        sel = if y == selected { " selected" } else { "" }
                    )
                })
                .collect();
            let hidden: String = state
                .open
                .iter()
                .map(|k| {
                    format!(
                        r#"<input type="hidden" name="{}" value="true">"#,
                        escape(k)
                    )
                })
                .collect();
            format!(
                r#"<form class="year-select" method="get" action="{action}"><label>{label} <select name="{param}">{options}</select></label>{hidden}<button type="submit">Show</button></form>"#,
                action = page.path(),
                label = escape(label),
                param = escape(param),
                options = options,
                hidden = hidden,
            )
        }
        Block::Image {
            src,
            caption,
            available,
        } => {
            if *available {
                format!(
                    r#"<figure class="image"><img src="{src}" alt="{caption}"><figcaption>{caption}</figcaption></figure>"#,
                    src = escape(src),
                    caption = escape(caption),
                )
            } else {
                let name = src.rsplit('/').next().unwrap_or(src);
                format!(
                    r#"<figure class="image missing"><div class="placeholder">Image not available: {name}</div><figcaption>{caption}</figcaption></figure>"#,
                    name = escape(name),
                    caption = escape(caption),
                )
            }
        }
    }
}

fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

fn render_metrics(metrics: &[MetricView]) -> String {
    let cards: String = metrics
        .iter()
        .map(|m| {
            let (class, arrow) = match m.direction {
                DeltaDirection::Up => ("up", "↑"),
                DeltaDirection::Down => ("down", "↓"),
                DeltaDirection::Flat => ("flat", ""),
            };
            format!(
                r#"<div class="metric"><div class="metric-label">{label}</div><div class="metric-value">{value}</div><div class="metric-delta {class}">{arrow} {delta}</div></div>"#,
                label = escape(&m.label),
                value = escape(&m.value),
                class = class,
                arrow = arrow,
                delta = escape(&m.delta),
            )
        })
        .collect();
    format!(r#"<div class="metrics">{}</div>"#, cards)
}

fn render_table(table: &TableView) -> String {
    let head: String = table
        .headers
        .iter()
        .map(|h| format!("<th>{}</th>", escape(h)))
        .collect();
    let body: String = table
        .rows
        .iter()
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|c| format!("<td>{}</td>", escape(c)))
                .collect();
            format!("<tr>{}</tr>", cells)
        })
        .collect();
    format!(
        r#"<div class="table-wrap"><table><thead><tr>{}</tr></thead><tbody>{}</tbody></table></div>"#,
        head, body
    )
}

/// Embedded stylesheet for every page.
const PAGE_CSS: &str = r#"
:root {
    --primary-color: #ff4b4b;
    --text-color: #262730;
    --muted-color: #6b7280;
    --border-color: #e5e7eb;
    --bg-color: #ffffff;
    --sidebar-bg: #f0f2f6;
    --up-color: #09ab3b;
    --down-color: #ff2b2b;
}

* {
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    font-size: 16px;
    line-height: 1.6;
    color: var(--text-color);
    background-color: var(--bg-color);
    margin: 0;
}

.layout {
    display: grid;
    grid-template-columns: 260px 1fr;
    min-height: 100vh;
}

.sidebar {
    background-color: var(--sidebar-bg);
    padding: 2rem 1.25rem;
}

.sidebar ul {
    list-style: none;
    padding: 0;
    margin: 0;
}

.sidebar li a {
    display: block;
    padding: 0.35rem 0.5rem;
    color: var(--text-color);
    text-decoration: none;
    border-radius: 0.25rem;
}

.sidebar li a.current {
    font-weight: 600;
    color: var(--primary-color);
}

.sidebar .radio {
    display: inline-block;
    width: 1.5em;
}

.nav-label {
    color: var(--muted-color);
    font-size: 0.875rem;
}

main {
    padding: 2rem 3rem;
    max-width: 1100px;
}

h1, h2, h3 {
    margin-top: 1.5em;
    margin-bottom: 0.5em;
    font-weight: 600;
    line-height: 1.25;
}

.app-header h1 {
    margin-top: 0;
    font-size: 2.25rem;
}

.intro {
    color: var(--muted-color);
}

.metrics {
    display: flex;
    gap: 1.5rem;
    flex-wrap: wrap;
}

.metric {
    flex: 1 1 200px;
    padding: 1rem;
    border: 1px solid var(--border-color);
    border-radius: 0.5rem;
}

.metric-label {
    font-size: 0.875rem;
    color: var(--muted-color);
}

.metric-value {
    font-size: 2rem;
}

.metric-delta.up {
    color: var(--up-color);
}

.metric-delta.down {
    color: var(--down-color);
}

figure {
    margin: 1em 0;
}

svg.chart {
    width: 100%;
    height: auto;
    font-size: 12px;
}

svg.chart .chart-title {
    font-size: 16px;
    font-weight: 600;
}

svg.chart .axis-title,
svg.chart .legend-title {
    font-size: 13px;
    font-weight: 600;
}

svg.chart .grid {
    stroke: var(--border-color);
}

svg.chart .axis {
    stroke: var(--muted-color);
}

svg.chart .tick {
    fill: var(--muted-color);
    font-size: 11px;
}

svg.chart .cell {
    font-size: 11px;
}

table {
    width: 100%;
    border-collapse: collapse;
    margin: 1em 0;
}

th, td {
    padding: 0.5rem;
    text-align: left;
    border: 1px solid var(--border-color);
}

th {
    background-color: var(--sidebar-bg);
    font-weight: 600;
}

details.toggle summary {
    list-style: none;
    cursor: pointer;
}

details.toggle summary a {
    color: var(--text-color);
    text-decoration: none;
}

.year-select {
    margin: 1em 0;
}

.year-select select {
    margin: 0 0.5rem;
}

figure.image {
    text-align: center;
}

figure.image img {
    max-width: 100%;
}

.placeholder {
    padding: 3rem;
    border: 2px dashed var(--border-color);
    color: var(--muted-color);
}

figcaption {
    color: var(--muted-color);
    font-size: 0.875rem;
}

.error {
    padding: 1rem 1.5rem;
    border-left: 4px solid var(--primary-color);
}

footer {
    margin-top: 3rem;
    color: var(--muted-color);
    font-size: 0.75rem;
}
"#;
