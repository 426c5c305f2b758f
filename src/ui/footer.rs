use crate::ui::app::Panel;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, MUTED_TEXT};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Bottom bar: key hints for the focused card on the left, row count and
/// version on the right.
pub struct Footer {
    focus: Panel,
    maximized: bool,
    rows: usize,
}

impl Footer {
    pub fn new(focus: Panel, maximized: bool, rows: usize) -> Self {
        Self {
            focus,
            maximized,
            rows,
        }
    }

    pub fn hints(&self) -> Vec<&'static str> {
        let mut hints = vec!["Tab: Card", if self.maximized { "Enter: Grid" } else { "Enter: Zoom" }];
        if self.focus == Panel::Table {
            hints.push("↑↓ PgUp/PgDn: Scroll");
        }
        hints.extend(["r: Reset", "q: Quit"]);
        hints
    }

    pub fn status(&self) -> String {
        let noun = if self.rows == 1 { "row" } else { "rows" };
        format!("{} {noun} │ tipboard v{}", self.rows, env!("CARGO_PKG_VERSION"))
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let status = self.status();
        let [left, right] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(status.chars().count() as u16 + 1),
        ])
        .areas(inner);

        let hints = Line::from(Span::styled(
            format!(" {}", self.hints().join(" │ ")),
            Style::default().fg(MUTED_TEXT),
        ));
        frame.render_widget(Paragraph::new(hints), left);
        frame.render_widget(
            Paragraph::new(Span::styled(status, Style::default().fg(ACCENT)))
                .alignment(Alignment::Right),
            right,
        );
    }
}
