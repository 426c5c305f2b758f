//! Card widgets: data table, scatter plot, tip distribution, bar chart.
//!
//! Each card turns one chart specification into ratatui widgets. Specs are
//! built by the caller from the derived view.

use crate::charts::bar::PLACEHOLDER_MESSAGE;
use crate::charts::{BarChartSpec, DistributionSpec, ScatterSpec, TABLE_COLUMNS};
use crate::ui::theme::{
    series_color, ACCENT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, TREND,
};
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset as Series, GraphType, Paragraph,
    Row, Table, Wrap,
};
use ratatui::Frame;

pub fn card(title: String, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn placeholder(frame: &mut Frame<'_>, area: Rect, block: Block<'static>, message: &str) {
    let widget = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(MUTED_TEXT),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(block);
    frame.render_widget(widget, area);
}

// ============================================================================
// Data table
// ============================================================================

pub fn render_table(
    frame: &mut Frame<'_>,
    area: Rect,
    rows: Vec<[String; 7]>,
    offset: usize,
    focused: bool,
) {
    let total = rows.len();
    let block = card(format!("Tips table ({total} rows)"), focused);
    if rows.is_empty() {
        placeholder(frame, area, block, PLACEHOLDER_MESSAGE);
        return;
    }

    // Borders and header take three lines.
    let visible = area.height.saturating_sub(3) as usize;
    let body: Vec<Row> = rows
        .into_iter()
        .skip(offset)
        .take(visible)
        .map(|cells| Row::new(cells).style(Style::default().fg(HEADER_TEXT)))
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(6),
        Constraint::Length(7),
        Constraint::Length(6),
        Constraint::Length(5),
        Constraint::Length(7),
        Constraint::Length(4),
    ];
    let header = Row::new(TABLE_COLUMNS).style(
        Style::default()
            .fg(ACCENT)
            .add_modifier(Modifier::BOLD),
    );
    let table = Table::new(body, widths)
        .header(header)
        .column_spacing(1)
        .block(block);
    frame.render_widget(table, area);
}

// ============================================================================
// Scatter plot
// ============================================================================

/// Markers standing in for point size: small, medium and large parties.
const SIZE_MARKERS: [Marker; 3] = [Marker::Braille, Marker::Dot, Marker::Block];

fn size_bucket(size: Option<u32>) -> usize {
    match size {
        None | Some(0..=2) => 0,
        Some(3..=4) => 1,
        Some(_) => 2,
    }
}

pub fn render_scatter(frame: &mut Frame<'_>, area: Rect, spec: &ScatterSpec, focused: bool) {
    let mut title = "Total bill vs tip".to_string();
    if let Some(split) = spec.color_by.split() {
        title.push_str(&format!(" by {}", split.column()));
    }
    let block = card(title, focused);

    let (Some(x_bounds), Some(y_bounds)) = (spec.x_bounds(), spec.y_bounds()) else {
        placeholder(frame, area, block, PLACEHOLDER_MESSAGE);
        return;
    };

    // Point buffers must outlive the chart datasets that borrow them.
    let mut buckets: Vec<(usize, usize, Vec<(f64, f64)>)> = Vec::new();
    for (group_idx, group) in spec.groups.iter().enumerate() {
        let mut by_size: [Vec<(f64, f64)>; 3] = Default::default();
        for point in &group.points {
            by_size[size_bucket(point.size)].push((point.bill, point.tip));
        }
        for (bucket, points) in by_size.into_iter().enumerate() {
            if !points.is_empty() {
                buckets.push((group_idx, bucket, points));
            }
        }
    }

    let mut datasets = Vec::new();
    let mut named = vec![false; spec.groups.len()];
    for (group_idx, bucket, points) in &buckets {
        let group = &spec.groups[*group_idx];
        let mut series = Series::default()
            .marker(SIZE_MARKERS[*bucket])
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(series_color(*group_idx)))
            .data(points);
        if let Some(label) = group.label {
            if !named[*group_idx] {
                series = series.name(label);
                named[*group_idx] = true;
            }
        }
        datasets.push(series);
    }
    for (group_idx, group) in spec.groups.iter().enumerate() {
        let color = if group.label.is_some() {
            series_color(group_idx)
        } else {
            TREND
        };
        datasets.push(
            Series::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(&group.trend),
        );
    }

    let x_bounds = padded(x_bounds);
    let y_bounds = padded(y_bounds);
    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(axis("total_bill", x_bounds))
        .y_axis(axis("tip", y_bounds));
    frame.render_widget(chart, area);
}

// ============================================================================
// Tip percentage distribution
// ============================================================================

/// Each series is drawn on its own baseline, scaled so the tallest peak
/// nearly reaches the next baseline.
pub fn render_distribution(
    frame: &mut Frame<'_>,
    area: Rect,
    spec: &DistributionSpec,
    focused: bool,
) {
    let block = card(format!("Tip percentage by {}", spec.split_by.column()), focused);
    if spec.series.is_empty() {
        placeholder(frame, area, block, PLACEHOLDER_MESSAGE);
        return;
    }

    let peak = spec
        .series
        .iter()
        .map(|s| s.peak())
        .fold(0.0, f64::max)
        .max(f64::MIN_POSITIVE);
    let curves: Vec<Vec<(f64, f64)>> = spec
        .series
        .iter()
        .enumerate()
        .map(|(idx, series)| {
            series
                .curve
                .iter()
                .map(|(x, density)| (x * 100.0, idx as f64 + 0.9 * density / peak))
                .collect()
        })
        .collect();

    let datasets: Vec<Series> = spec
        .series
        .iter()
        .zip(&curves)
        .enumerate()
        .map(|(idx, (series, curve))| {
            Series::default()
                .name(format!("{} (n={})", series.label, series.samples))
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(series_color(idx)))
                .data(curve)
        })
        .collect();

    let x_bounds = curves
        .iter()
        .flatten()
        .fold([f64::INFINITY, f64::NEG_INFINITY], |[lo, hi], (x, _)| {
            [lo.min(*x), hi.max(*x)]
        });
    let y_labels: Vec<String> = spec.series.iter().map(|s| s.label.to_string()).collect();
    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(axis("tip %", x_bounds))
        .y_axis(
            Axis::default()
                .style(Style::default().fg(MUTED_TEXT))
                .bounds([0.0, spec.series.len() as f64])
                .labels(y_labels),
        );
    frame.render_widget(chart, area);
}

// ============================================================================
// Bars by day
// ============================================================================

pub fn render_bars(frame: &mut Frame<'_>, area: Rect, spec: &BarChartSpec, focused: bool) {
    let bars = match spec {
        BarChartSpec::Placeholder { message } => {
            placeholder(frame, area, card("Tips by day of week".to_string(), focused), message);
            return;
        }
        BarChartSpec::Bars(bars) => bars,
    };

    let block = card(format!("{} ({})", bars.title, bars.y_title), focused);
    let items: Vec<Bar> = bars
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let label = match row.visits {
                Some(visits) => format!("{} ({visits})", row.day),
                None => row.day.to_string(),
            };
            Bar::default()
                // Bar heights are integers; keep two decimals of resolution.
                .value((row.value * 100.0).round().max(0.0) as u64)
                .text_value(bars.metric.format(row.value))
                .label(Line::from(label))
                .style(Style::default().fg(series_color(idx)))
        })
        .collect();

    let count = items.len().max(1) as u16;
    let inner_width = area.width.saturating_sub(2);
    let gap = 2;
    let bar_width = (inner_width.saturating_sub(gap * count) / count).max(3);
    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(gap)
        .value_style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD))
        .data(BarGroup::default().bars(&items));
    frame.render_widget(chart, area);
}

fn padded([lo, hi]: [f64; 2]) -> [f64; 2] {
    let pad = ((hi - lo) * 0.05).max(0.5);
    [lo - pad, hi + pad]
}

fn axis(title: &'static str, bounds: [f64; 2]) -> Axis<'static> {
    let labels = vec![
        format!("{:.0}", bounds[0]),
        format!("{:.0}", (bounds[0] + bounds[1]) / 2.0),
        format!("{:.0}", bounds[1]),
    ];
    Axis::default()
        .title(Span::styled(title, Style::default().fg(MUTED_TEXT)))
        .style(Style::default().fg(MUTED_TEXT))
        .bounds(bounds)
        .labels(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_buckets() {
        assert_eq!(size_bucket(None), 0);
        assert_eq!(size_bucket(Some(2)), 0);
        assert_eq!(size_bucket(Some(4)), 1);
        assert_eq!(size_bucket(Some(6)), 2);
    }

    #[test]
    fn padding_widens_degenerate_bounds() {
        assert_eq!(padded([2.0, 2.0]), [1.5, 2.5]);
    }
}
