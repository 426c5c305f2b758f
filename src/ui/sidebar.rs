use crate::data::{Day, MealTime};
use crate::ui::options::DisplayOptions;
use crate::ui::theme::{ACCENT, CHECKED, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, UNCHECKED};
use crate::view::{BillRange, FilterState};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Filter controls and display options.
pub struct Sidebar<'a> {
    filters: &'a FilterState,
    options: &'a DisplayOptions,
}

impl<'a> Sidebar<'a> {
    pub fn new(filters: &'a FilterState, options: &'a DisplayOptions) -> Self {
        Self { filters, options }
    }

    pub fn widget(&self, width: u16) -> Paragraph<'static> {
        let track_width = width.saturating_sub(4) as usize;
        let range = self.filters.bill_range;
        let mut lines = vec![
            section("Bill amount"),
            Line::from(format!("  €{:.2} - €{:.2}", range.min(), range.max())),
            Line::from(Span::styled(
                format!("  {}", slider_track(range, self.filters.bounds, track_width)),
                Style::default().fg(ACCENT),
            )),
            hint("  ←/→ min  [/] max"),
            Line::from(""),
            section("Food service"),
        ];

        let times: Vec<Span> = MealTime::ALL
            .into_iter()
            .zip(['l', 'd'])
            .flat_map(|(time, key)| {
                checkbox(self.filters.times.contains(&time), format!("{time} ({key})"))
            })
            .collect();
        lines.push(Line::from(times));
        lines.push(Line::from(""));

        lines.push(section("Day of week"));
        for (idx, day) in Day::ALL.into_iter().enumerate() {
            lines.push(Line::from(checkbox(
                self.filters.days.contains(&day),
                format!("{day} ({})", idx + 1),
            )));
        }
        lines.push(Line::from(""));

        let on_off = |flag: bool| if flag { "on" } else { "off" };
        lines.push(section("Display"));
        lines.push(option_line("Color", self.options.scatter_color.column(), 'c'));
        lines.push(option_line("Size", on_off(self.options.show_size), 's'));
        lines.push(option_line("Split", self.options.split_by.column(), 'p'));
        lines.push(option_line("Metric", self.options.bar_metric.label(), 'm'));
        lines.push(option_line("Visits", on_off(self.options.show_day_count), 'v'));
        lines.push(Line::from(""));
        lines.push(hint("  r: Reset filter"));

        Paragraph::new(lines).block(
            Block::default()
                .title(Span::styled("Filters", Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

/// Text slider: `━` over the selected part of `bounds`, `─` elsewhere.
pub fn slider_track(range: BillRange, bounds: BillRange, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let span = bounds.max() - bounds.min();
    let position = |value: f64| -> usize {
        if span <= 0.0 || !span.is_finite() {
            return 0;
        }
        let fraction = ((value - bounds.min()) / span).clamp(0.0, 1.0);
        ((fraction * (width - 1) as f64).round() as usize).min(width - 1)
    };
    let (start, end) = if span <= 0.0 || !span.is_finite() {
        (0, width - 1)
    } else {
        (position(range.min()), position(range.max()))
    };
    (0..width)
        .map(|i| if (start..=end).contains(&i) { '━' } else { '─' })
        .collect()
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    ))
}

fn hint(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(MUTED_TEXT)))
}

fn checkbox(checked: bool, label: String) -> Vec<Span<'static>> {
    let (mark, color) = if checked { ("[x]", CHECKED) } else { ("[ ]", UNCHECKED) };
    vec![
        Span::raw("  "),
        Span::styled(mark, Style::default().fg(color)),
        Span::styled(format!(" {label}"), Style::default().fg(HEADER_TEXT)),
    ]
}

fn option_line(name: &'static str, value: &'static str, key: char) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {name}: "), Style::default().fg(MUTED_TEXT)),
        Span::styled(value, Style::default().fg(HEADER_TEXT)),
        Span::styled(format!(" ({key})"), Style::default().fg(MUTED_TEXT)),
    ])
}
