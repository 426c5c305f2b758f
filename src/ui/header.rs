use crate::stats::SummaryStats;
use crate::ui::layout::value_box_columns;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Row of four value boxes with the summary statistics.
pub struct ValueBoxes {
    boxes: [(&'static str, Option<String>); 4],
}

impl ValueBoxes {
    pub fn new(stats: &SummaryStats) -> Self {
        Self {
            boxes: [
                ("Total tippers", stats.format_count()),
                ("Average tip", stats.format_tip_percent()),
                ("Average bill", stats.format_bill()),
                ("Average party size", stats.format_size()),
            ],
        }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let columns = value_box_columns(area, self.boxes.len() as u16);
        for ((title, value), rect) in self.boxes.iter().zip(columns) {
            frame.render_widget(Self::widget(*title, value.as_deref()), rect);
        }
    }

    fn widget(title: &'static str, value: Option<&str>) -> Paragraph<'static> {
        // Blank when the view is empty.
        let value = value.unwrap_or_default().to_string();
        let line = Line::from(Span::styled(
            value,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ));
        Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .title(Span::styled(title, Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
