//! Inline SVG chart rendering.
//!
//! Produces self-contained `<svg>` elements so rendered pages work offline
//! without a charting script. Layout is fixed-size and scaled by the
//! browser through `viewBox`.

use crate::domain::dashboard::{BarSeries, ChartKind, ChartSpec, Orientation, XySeries};

use super::escape;

const WIDTH: f64 = 960.0;
const HEIGHT: f64 = 440.0;
const LEGEND_WIDTH: f64 = 210.0;

/// Qualitative palette for series and categories.
const PALETTE: [&str; 10] = [
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
    "#ff97ff", "#fecb52",
];

/// Sequential scale for heatmaps, low to high.
const HEAT_STOPS: [(f64, (u8, u8, u8)); 5] = [
    (0.0, (13, 8, 135)),
    (0.25, (126, 3, 168)),
    (0.5, (204, 71, 120)),
    (0.75, (248, 149, 64)),
    (1.0, (240, 249, 33)),
];

const MAX_LABEL_CHARS: usize = 34;

/// Renders a chart specification as an `<svg>` element.
pub fn render_chart(spec: &ChartSpec) -> String {
    let body = match &spec.kind {
        ChartKind::Bar {
            categories,
            series,
            orientation: Orientation::Vertical,
            color_by_category,
        } => vertical_bars(spec, categories, series, *color_by_category),
        ChartKind::Bar {
            categories,
            series,
            orientation: Orientation::Horizontal,
            color_by_category,
        } => horizontal_bars(spec, categories, series, *color_by_category),
        ChartKind::Line { series, markers } => xy_chart(spec, series, *markers, false),
        ChartKind::Area { series } => xy_chart(spec, series, true, true),
        ChartKind::Heatmap {
            rows,
            columns,
            z,
            show_values,
            color_label,
        } => heatmap(spec, rows, columns, z, *show_values, color_label),
    };

    let label = spec.title.as_deref().unwrap_or(&spec.y_title);
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="chart" viewBox="0 0 {w} {h}" role="img" aria-label="{label}">{title}{body}</svg>"#,
        w = WIDTH,
        h = HEIGHT,
        label = escape(label),
        title = spec
            .title
            .as_deref()
            .map(|t| format!(
                r#"<text class="chart-title" x="20" y="28">{}</text>"#,
                escape(t)
            ))
            .unwrap_or_default(),
        body = body,
    )
}

// ════════════════════════════════════════════════════════════════════════════════
// Geometry
// ════════════════════════════════════════════════════════════════════════════════

/// Plot area inside the SVG.
#[derive(Debug, Clone, Copy)]
struct Frame {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl Frame {
    fn new(left: f64, top: f64, right_margin: f64, bottom_margin: f64) -> Self {
        Self {
            left,
            top,
            right: WIDTH - right_margin,
            bottom: HEIGHT - bottom_margin,
        }
    }

    fn width(&self) -> f64 {
        self.right - self.left
    }

    fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Linear map from data space to pixels.
#[derive(Debug, Clone, Copy)]
struct Scale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl Scale {
    fn map(&self, v: f64) -> f64 {
        if (self.d1 - self.d0).abs() < f64::EPSILON {
            return (self.r0 + self.r1) / 2.0;
        }
        self.r0 + (v - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }
}

/// Axis bounds rounded outward to a "nice" step, with the tick values.
fn nice_axis(min: f64, max: f64) -> (f64, f64, Vec<f64>) {
    let (mut lo, mut hi) = if min.is_finite() && max.is_finite() {
        (min, max)
    } else {
        (0.0, 1.0)
    };
    if (hi - lo).abs() < f64::EPSILON {
        hi = lo + 1.0;
        if lo > 0.0 {
            lo = 0.0;
        }
    }
    let step = nice_step(hi - lo, 5);
    let start = (lo / step).floor() * step;
    let end = (hi / step).ceil() * step;

    let mut ticks = Vec::new();
    let mut k = 0.0;
    while start + k * step <= end + step * 1e-9 {
        ticks.push(start + k * step);
        k += 1.0;
    }
    (start, end, ticks)
}

fn nice_step(range: f64, target: usize) -> f64 {
    let raw = range / target.max(1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 2.5 {
        2.5
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Compact tick label: `200k`, `45`, `2.5`.
fn format_tick(v: f64) -> String {
    let v = if v.abs() < 1e-9 { 0.0 } else { v };
    if v.abs() >= 1000.0 && (v / 1000.0).fract().abs() < 1e-9 {
        format!("{}k", (v / 1000.0) as i64)
    } else if v.fract().abs() < 1e-9 {
        format!("{}", v as i64)
    } else {
        let s = format!("{:.2}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn finite_range<I: IntoIterator<Item = f64>>(values: I) -> (f64, f64) {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        })
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_CHARS {
        label.to_string()
    } else {
        let cut: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
        format!("{}…", cut.trim_end())
    }
}

fn series_color(explicit: Option<&str>, index: usize) -> String {
    explicit
        .map(str::to_string)
        .unwrap_or_else(|| PALETTE[index % PALETTE.len()].to_string())
}

// ════════════════════════════════════════════════════════════════════════════════
// Shared pieces
// ════════════════════════════════════════════════════════════════════════════════

fn value_gridlines_horizontal(frame: &Frame, scale: &Scale, ticks: &[f64]) -> String {
    let mut out = String::new();
    for tick in ticks {
        let y = scale.map(*tick);
        out.push_str(&format!(
            r#"<line class="grid" x1="{x1:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}"/><text class="tick" x="{tx:.1}" y="{ty:.1}" text-anchor="end">{label}</text>"#,
            x1 = frame.left,
            x2 = frame.right,
            y = y,
            tx = frame.left - 8.0,
            ty = y + 4.0,
            label = format_tick(*tick),
        ));
    }
    out
}

fn value_gridlines_vertical(frame: &Frame, scale: &Scale, ticks: &[f64]) -> String {
    let mut out = String::new();
    for tick in ticks {
        let x = scale.map(*tick);
        out.push_str(&format!(
            r#"<line class="grid" x1="{x:.1}" y1="{y1:.1}" x2="{x:.1}" y2="{y2:.1}"/><text class="tick" x="{x:.1}" y="{ty:.1}" text-anchor="middle">{label}</text>"#,
            x = x,
            y1 = frame.top,
            y2 = frame.bottom,
            ty = frame.bottom + 18.0,
            label = format_tick(*tick),
        ));
    }
    out
}

fn axis_titles(frame: &Frame, x_title: &str, y_title: &str, x_offset: f64) -> String {
    let cx = frame.left + frame.width() / 2.0;
    let cy = frame.top + frame.height() / 2.0;
    format!(
        r#"<text class="axis-title" x="{cx:.1}" y="{xy:.1}" text-anchor="middle">{x}</text><text class="axis-title" transform="translate({yx:.1},{cy:.1}) rotate(-90)" text-anchor="middle">{y}</text>"#,
        cx = cx,
        xy = frame.bottom + x_offset,
        x = escape(x_title),
        yx = 18.0,
        cy = cy,
        y = escape(y_title),
    )
}

fn legend(title: Option<&str>, entries: &[(String, String, bool)], top: f64) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let x = WIDTH - LEGEND_WIDTH + 16.0;
    let mut y = top;
    let mut out = String::from(r#"<g class="legend">"#);
    if let Some(title) = title {
        out.push_str(&format!(
            r#"<text class="legend-title" x="{x:.1}" y="{y:.1}">{t}</text>"#,
            x = x,
            y = y,
            t = escape(title)
        ));
        y += 20.0;
    }
    for (name, color, dashed) in entries {
        let dash = if *dashed { r#" stroke-dasharray="6 4""# } else { "" };
        out.push_str(&format!(
            r#"<line x1="{x:.1}" y1="{ly:.1}" x2="{x2:.1}" y2="{ly:.1}" stroke="{c}" stroke-width="4"{dash}/><text class="legend-entry" x="{tx:.1}" y="{ty:.1}">{n}<title>{full}</title></text>"#,
            x = x,
            x2 = x + 22.0,
            ly = y - 4.0,
            c = escape(color),
            dash = dash,
            tx = x + 30.0,
            ty = y,
            n = escape(&truncate_label(name)),
            full = escape(name),
        ));
        y += 20.0;
    }
    out.push_str("</g>");
    out
}

// ════════════════════════════════════════════════════════════════════════════════
// Bar charts
// ════════════════════════════════════════════════════════════════════════════════

fn bar_colors(series: &[BarSeries], categories: usize, by_category: bool) -> Vec<Vec<String>> {
    series
        .iter()
        .enumerate()
        .map(|(s_idx, s)| {
            (0..categories)
                .map(|c_idx| {
                    if by_category && series.len() == 1 && s.color.is_none() {
                        series_color(None, c_idx)
                    } else {
                        series_color(s.color.as_deref(), s_idx)
                    }
                })
                .collect()
        })
        .collect()
}

fn bar_legend(spec: &ChartSpec, colors: &[Vec<String>], by_category: bool) -> String {
    let entries: Vec<(String, String, bool)> = if by_category && colors.len() == 1 {
        spec.legend_entries()
            .into_iter()
            .zip(colors[0].iter().cloned())
            .map(|(n, c)| (n, c, false))
            .collect()
    } else if colors.len() > 1 {
        spec.legend_entries()
            .into_iter()
            .zip(colors.iter().map(|c| c.first().cloned().unwrap_or_default()))
            .map(|(n, c)| (n, c, false))
            .collect()
    } else {
        Vec::new()
    };
    legend(spec.legend_title.as_deref(), &entries, 60.0)
}

fn vertical_bars(
    spec: &ChartSpec,
    categories: &[String],
    series: &[BarSeries],
    by_category: bool,
) -> String {
    let frame = Frame::new(80.0, 50.0, LEGEND_WIDTH, 120.0);
    let (lo, hi) = finite_range(series.iter().flat_map(|s| s.values.iter().copied()));
    let (d0, d1, ticks) = nice_axis(lo.min(0.0), hi.max(0.0));
    let y = Scale {
        d0,
        d1,
        r0: frame.bottom,
        r1: frame.top,
    };
    let colors = bar_colors(series, categories.len(), by_category);

    let mut out = value_gridlines_horizontal(&frame, &y, &ticks);
    let band = frame.width() / categories.len().max(1) as f64;
    let bar_w = band * 0.8 / series.len().max(1) as f64;
    let base = y.map(0.0);

    for (c_idx, category) in categories.iter().enumerate() {
        let band_x = frame.left + band * c_idx as f64;
        for (s_idx, s) in series.iter().enumerate() {
            let Some(value) = s.values.get(c_idx).copied().filter(|v| v.is_finite()) else {
                continue;
            };
            let top = y.map(value);
            out.push_str(&format!(
                r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" fill="{c}"><title>{cat}, {name}: {v}</title></rect>"#,
                x = band_x + band * 0.1 + bar_w * s_idx as f64,
                y = top.min(base),
                w = bar_w,
                h = (base - top).abs(),
                c = escape(&colors[s_idx][c_idx]),
                cat = escape(category),
                name = escape(&s.name),
                v = value,
            ));
        }
        let lx = band_x + band / 2.0;
        let ly = frame.bottom + 14.0;
        out.push_str(&format!(
            r#"<text class="tick" transform="translate({lx:.1},{ly:.1}) rotate(-30)" text-anchor="end">{label}</text>"#,
            lx = lx,
            ly = ly,
            label = escape(&truncate_label(category)),
        ));
    }

    out.push_str(&format!(
        r#"<line class="axis" x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}"/>"#,
        frame.left, base, frame.right, base
    ));
    out.push_str(&axis_titles(&frame, &spec.x_title, &spec.y_title, 108.0));
    out.push_str(&bar_legend(spec, &colors, by_category));
    out
}

/// Horizontal bars; the first category is drawn at the bottom.
fn horizontal_bars(
    spec: &ChartSpec,
    categories: &[String],
    series: &[BarSeries],
    by_category: bool,
) -> String {
    let frame = Frame::new(300.0, 50.0, LEGEND_WIDTH, 60.0);
    let (lo, hi) = finite_range(series.iter().flat_map(|s| s.values.iter().copied()));
    let (d0, d1, ticks) = nice_axis(lo.min(0.0), hi.max(0.0));
    let x = Scale {
        d0,
        d1,
        r0: frame.left,
        r1: frame.right,
    };
    let colors = bar_colors(series, categories.len(), by_category);

    let mut out = value_gridlines_vertical(&frame, &x, &ticks);
    let band = frame.height() / categories.len().max(1) as f64;
    let bar_h = band * 0.8 / series.len().max(1) as f64;
    let base = x.map(0.0);

    for (c_idx, category) in categories.iter().enumerate() {
        let band_y = frame.bottom - band * (c_idx + 1) as f64;
        for (s_idx, s) in series.iter().enumerate() {
            let Some(value) = s.values.get(c_idx).copied().filter(|v| v.is_finite()) else {
                continue;
            };
            let end = x.map(value);
            out.push_str(&format!(
                r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" fill="{c}"><title>{cat}: {v}</title></rect>"#,
                x = end.min(base),
                y = band_y + band * 0.1 + bar_h * s_idx as f64,
                w = (end - base).abs(),
                h = bar_h,
                c = escape(&colors[s_idx][c_idx]),
                cat = escape(category),
                v = value,
            ));
        }
        out.push_str(&format!(
            r#"<text class="tick" x="{x:.1}" y="{y:.1}" text-anchor="end">{label}<title>{full}</title></text>"#,
            x = frame.left - 8.0,
            y = band_y + band / 2.0 + 4.0,
            label = escape(&truncate_label(category)),
            full = escape(category),
        ));
    }

    out.push_str(&format!(
        r#"<line class="axis" x1="{b:.1}" y1="{:.1}" x2="{b:.1}" y2="{:.1}"/>"#,
        frame.top,
        frame.bottom,
        b = base
    ));
    let cx = frame.left + frame.width() / 2.0;
    out.push_str(&format!(
        r#"<text class="axis-title" x="{cx:.1}" y="{y:.1}" text-anchor="middle">{t}</text><text class="axis-title" x="20" y="{ty:.1}">{yt}</text>"#,
        cx = cx,
        y = frame.bottom + 42.0,
        t = escape(&spec.x_title),
        ty = frame.top - 10.0,
        yt = escape(&spec.y_title),
    ));
    out.push_str(&bar_legend(spec, &colors, by_category));
    out
}

// ════════════════════════════════════════════════════════════════════════════════
// Line and area charts
// ════════════════════════════════════════════════════════════════════════════════

/// Splits a series into runs of finite points so gaps break the line.
fn finite_runs(points: &[(f64, f64)]) -> Vec<Vec<(f64, f64)>> {
    let mut runs = vec![Vec::new()];
    for (x, y) in points {
        if x.is_finite() && y.is_finite() {
            if let Some(run) = runs.last_mut() {
                run.push((*x, *y));
            }
        } else if runs.last().map_or(false, |r| !r.is_empty()) {
            runs.push(Vec::new());
        }
    }
    runs.retain(|r| !r.is_empty());
    runs
}

fn xy_chart(spec: &ChartSpec, series: &[XySeries], markers: bool, fill: bool) -> String {
    let frame = Frame::new(80.0, 50.0, LEGEND_WIDTH, 70.0);
    let (x_lo, x_hi) = finite_range(series.iter().flat_map(|s| s.points.iter().map(|p| p.0)));
    let (y_lo, y_hi) = finite_range(series.iter().flat_map(|s| s.points.iter().map(|p| p.1)));
    let y_lo = if fill { y_lo.min(0.0) } else { y_lo };
    let (yd0, yd1, y_ticks) = nice_axis(y_lo, y_hi);

    // Integer x (years) over a short span gets one tick per value.
    let integral_x = series
        .iter()
        .flat_map(|s| s.points.iter())
        .all(|p| !p.0.is_finite() || p.0.fract() == 0.0);
    let (xd0, xd1, x_ticks) = if integral_x && x_lo.is_finite() && x_hi - x_lo <= 20.0 {
        let ticks = (x_lo as i64..=x_hi as i64).map(|v| v as f64).collect();
        (x_lo, x_hi, ticks)
    } else {
        nice_axis(x_lo, x_hi)
    };

    let x = Scale {
        d0: xd0,
        d1: xd1,
        r0: frame.left + 10.0,
        r1: frame.right - 10.0,
    };
    let y = Scale {
        d0: yd0,
        d1: yd1,
        r0: frame.bottom,
        r1: frame.top,
    };

    let mut out = value_gridlines_horizontal(&frame, &y, &y_ticks);
    for tick in &x_ticks {
        out.push_str(&format!(
            r#"<text class="tick" x="{x:.1}" y="{y:.1}" text-anchor="middle">{label}</text>"#,
            x = x.map(*tick),
            y = frame.bottom + 18.0,
            label = format_tick(*tick),
        ));
    }
    out.push_str(&format!(
        r#"<line class="axis" x1="{:.1}" y1="{b:.1}" x2="{:.1}" y2="{b:.1}"/>"#,
        frame.left,
        frame.right,
        b = frame.bottom
    ));

    let baseline = y.map(0.0_f64.max(yd0));
    let mut entries = Vec::new();
    for (idx, s) in series.iter().enumerate() {
        let color = series_color(s.color.as_deref(), idx);
        let dash = if s.dashed { r#" stroke-dasharray="6 4""# } else { "" };
        for run in finite_runs(&s.points) {
            let coords: Vec<String> = run
                .iter()
                .map(|(px, py)| format!("{:.1},{:.1}", x.map(*px), y.map(*py)))
                .collect();
            if fill {
                let first_x = x.map(run[0].0);
                let last_x = x.map(run[run.len() - 1].0);
                out.push_str(&format!(
                    r#"<polygon points="{first:.1},{b:.1} {pts} {last:.1},{b:.1}" fill="{c}" fill-opacity="0.25" stroke="none"/>"#,
                    first = first_x,
                    last = last_x,
                    b = baseline,
                    pts = coords.join(" "),
                    c = escape(&color),
                ));
            }
            out.push_str(&format!(
                r#"<polyline points="{pts}" fill="none" stroke="{c}" stroke-width="2.5"{dash}/>"#,
                pts = coords.join(" "),
                c = escape(&color),
                dash = dash,
            ));
            if markers {
                for (px, py) in &run {
                    out.push_str(&format!(
                        r#"<circle cx="{cx:.1}" cy="{cy:.1}" r="4" fill="{c}"><title>{name} {xv}: {yv}</title></circle>"#,
                        cx = x.map(*px),
                        cy = y.map(*py),
                        c = escape(&color),
                        name = escape(&s.name),
                        xv = format_tick(*px),
                        yv = py,
                    ));
                }
            }
        }
        entries.push((s.name.clone(), color, s.dashed));
    }

    out.push_str(&axis_titles(&frame, &spec.x_title, &spec.y_title, 46.0));
    out.push_str(&legend(spec.legend_title.as_deref(), &entries, 60.0));
    out
}

// ════════════════════════════════════════════════════════════════════════════════
// Heatmap
// ════════════════════════════════════════════════════════════════════════════════

fn heat_color(t: f64) -> (u8, u8, u8) {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    for pair in HEAT_STOPS.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            let f = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };
            let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * f).round() as u8;
            return (lerp(c0.0, c1.0), lerp(c0.1, c1.1), lerp(c0.2, c1.2));
        }
    }
    HEAT_STOPS[HEAT_STOPS.len() - 1].1
}

fn heatmap(
    spec: &ChartSpec,
    rows: &[String],
    columns: &[String],
    z: &[Vec<f64>],
    show_values: bool,
    color_label: &str,
) -> String {
    let frame = Frame::new(170.0, 50.0, 120.0, 190.0);
    let (lo, hi) = finite_range(z.iter().flat_map(|r| r.iter().copied()));
    let span = if hi > lo { hi - lo } else { 1.0 };
    let cell_w = frame.width() / columns.len().max(1) as f64;
    let cell_h = frame.height() / rows.len().max(1) as f64;

    let mut out = String::new();
    for (r_idx, row) in rows.iter().enumerate() {
        let cy = frame.top + cell_h * r_idx as f64;
        for (c_idx, column) in columns.iter().enumerate() {
            let value = z
                .get(r_idx)
                .and_then(|r| r.get(c_idx))
                .copied()
                .unwrap_or(f64::NAN);
            let cx = frame.left + cell_w * c_idx as f64;
            let (fill, text_color) = if value.is_finite() {
                let (r, g, b) = heat_color((value - lo) / span);
                let luminance = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
                (
                    format!("rgb({},{},{})", r, g, b),
                    if luminance > 150.0 { "#222" } else { "#fff" },
                )
            } else {
                ("#eee".to_string(), "#222")
            };
            out.push_str(&format!(
                r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" fill="{fill}"><title>{row} / {col}: {v}</title></rect>"#,
                x = cx,
                y = cy,
                w = cell_w,
                h = cell_h,
                fill = fill,
                row = escape(row),
                col = escape(column),
                v = format_tick(value),
            ));
            if show_values && value.is_finite() {
                out.push_str(&format!(
                    r#"<text class="cell" x="{x:.1}" y="{y:.1}" text-anchor="middle" fill="{c}">{v}</text>"#,
                    x = cx + cell_w / 2.0,
                    y = cy + cell_h / 2.0 + 4.0,
                    c = text_color,
                    v = format_tick(value),
                ));
            }
        }
        out.push_str(&format!(
            r#"<text class="tick" x="{x:.1}" y="{y:.1}" text-anchor="end">{label}</text>"#,
            x = frame.left - 8.0,
            y = cy + cell_h / 2.0 + 4.0,
            label = escape(&truncate_label(row)),
        ));
    }

    for (c_idx, column) in columns.iter().enumerate() {
        let lx = frame.left + cell_w * (c_idx as f64 + 0.5);
        out.push_str(&format!(
            r#"<text class="tick" transform="translate({lx:.1},{ly:.1}) rotate(-40)" text-anchor="end">{label}<title>{full}</title></text>"#,
            lx = lx,
            ly = frame.bottom + 14.0,
            label = escape(&truncate_label(column)),
            full = escape(column),
        ));
    }

    // Color bar
    let bar_x = frame.right + 30.0;
    let steps = 20;
    let step_h = frame.height() / steps as f64;
    for i in 0..steps {
        let t = 1.0 - (i as f64 + 0.5) / steps as f64;
        let (r, g, b) = heat_color(t);
        out.push_str(&format!(
            r#"<rect x="{x:.1}" y="{y:.1}" width="16" height="{h:.1}" fill="rgb({r},{g},{b})"/>"#,
            x = bar_x,
            y = frame.top + step_h * i as f64,
            h = step_h + 0.5,
            r = r,
            g = g,
            b = b,
        ));
    }
    out.push_str(&format!(
        r#"<text class="tick" x="{x:.1}" y="{top:.1}">{hi}</text><text class="tick" x="{x:.1}" y="{bottom:.1}">{lo}</text><text class="legend-title" x="{lx:.1}" y="{ly:.1}">{label}</text>"#,
        x = bar_x + 22.0,
        top = frame.top + 10.0,
        bottom = frame.bottom,
        hi = format_tick(if hi.is_finite() { hi } else { 0.0 }),
        lo = format_tick(if lo.is_finite() { lo } else { 0.0 }),
        lx = bar_x - 10.0,
        ly = frame.top - 12.0,
        label = escape(color_label),
    ));

    out.push_str(&format!(
        r#"<text class="axis-title" x="{x:.1}" y="{y:.1}" text-anchor="middle">{t}</text>"#,
        x = frame.left + frame.width() / 2.0,
        y = HEIGHT - 8.0,
        t = escape(&spec.x_title),
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_axis_rounds_outward() {
        let (lo, hi, ticks) = nice_axis(0.0, 50.2);
        assert_eq!(lo, 0.0);
        assert_eq!(hi, 60.0);
        assert_eq!(ticks, vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
    }

    #[test]
    fn nice_axis_handles_flat_and_empty_ranges() {
        let (lo, hi, _) = nice_axis(5.0, 5.0);
        assert!(lo <= 5.0 && hi > 5.0);
        let (lo, hi, _) = nice_axis(f64::INFINITY, f64::NEG_INFINITY);
        assert_eq!((lo, hi), (0.0, 1.0));
    }

    #[test]
    fn format_tick_is_compact() {
        assert_eq!(format_tick(200000.0), "200k");
        assert_eq!(format_tick(45.0), "45");
        assert_eq!(format_tick(2.5), "2.5");
        assert_eq!(format_tick(0.25), "0.25");
        assert_eq!(format_tick(-0.0), "0");
    }

    #[test]
    fn finite_runs_break_on_gaps() {
        let runs = finite_runs(&[(1.0, 1.0), (2.0, f64::NAN), (3.0, 3.0), (4.0, 4.0)]);
        assert_eq!(runs, vec![vec![(1.0, 1.0)], vec![(3.0, 3.0), (4.0, 4.0)]]);
    }

    #[test]
    fn heat_color_spans_scale() {
        assert_eq!(heat_color(0.0), (13, 8, 135));
        assert_eq!(heat_color(1.0), (240, 249, 33));
        assert_eq!(heat_color(f64::NAN), (13, 8, 135));
    }

    #[test]
    fn long_labels_are_truncated() {
        let label = "Formulate personalized medication and/or treatment plans";
        let short = truncate_label(label);
        assert!(short.chars().count() <= MAX_LABEL_CHARS);
        assert!(short.ends_with('…'));
        assert_eq!(truncate_label("Telemedicine"), "Telemedicine");
    }

    #[test]
    fn vertical_bar_chart_draws_one_rect_per_value() {
        let spec = ChartSpec::new(
            ChartKind::Bar {
                categories: vec!["A".to_string(), "B & C".to_string()],
                series: vec![BarSeries::new("CAGR (%)", vec![10.0, 20.0])],
                orientation: Orientation::Vertical,
                color_by_category: true,
            },
            "Trend",
            "CAGR (%)",
        )
        .with_title("Growth <by> segment");
        let svg = render_chart(&spec);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<rect").count(), 2);
        assert!(svg.contains("Growth &lt;by&gt; segment"));
        assert!(svg.contains("B &amp; C"));
        assert!(svg.contains(PALETTE[1]));
    }

    #[test]
    fn area_chart_fills_and_dashes() {
        let spec = ChartSpec::new(
            ChartKind::Area {
                series: vec![
                    XySeries::from_years("Current", &[(2024, 1.0), (2025, 2.0)]).with_color("green"),
                    XySeries::from_years("Projected", &[(2025, 2.0), (2026, 3.0)])
                        .with_color("orange")
                        .dashed(),
                ],
            },
            "Year",
            "Market Size (USD Millions)",
        );
        let svg = render_chart(&spec);
        assert_eq!(svg.matches("<polygon").count(), 2);
        assert!(svg.contains(r#"stroke="orange" stroke-width="2.5" stroke-dasharray="6 4""#));
        assert_eq!(svg.matches("<circle").count(), 4);
    }

    #[test]
    fn heatmap_annotates_cells() {
        let spec = ChartSpec::new(
            ChartKind::Heatmap {
                rows: vec!["Psychiatry".to_string()],
                columns: vec!["Task A".to_string(), "Task B".to_string()],
                z: vec![vec![9.0, 72.0]],
                show_values: true,
                color_label: "% Capability".to_string(),
            },
            "Task",
            "Specialty",
        );
        let svg = render_chart(&spec);
        assert!(svg.contains(r#"class="cell""#));
        assert!(svg.contains(">72</text>"));
        assert!(svg.contains("% Capability"));
    }
}
