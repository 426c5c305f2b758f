use ratatui::layout::{Constraint, Direction, Layout, Rect};

const SIDEBAR_WIDTH: u16 = 30;
const VALUE_BOX_HEIGHT: u16 = 4;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(VALUE_BOX_HEIGHT);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into the filter sidebar and the card area.
pub fn body_regions(body: Rect) -> (Rect, Rect) {
    let sidebar_width = SIDEBAR_WIDTH.min(body.width / 2);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(body);
    (chunks[0], chunks[1])
}

/// Four equal cells in reading order: top-left, top-right, bottom-left,
/// bottom-right.
pub fn card_grid(area: Rect) -> [Rect; 4] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let split_row = |row: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row)
    };
    let top = split_row(rows[0]);
    let bottom = split_row(rows[1]);
    [top[0], top[1], bottom[0], bottom[1]]
}

/// Equal-width columns for the value boxes.
pub fn value_box_columns(area: Rect, count: u16) -> Vec<Rect> {
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count.into())).collect();
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_screen() {
        let area = Rect::new(0, 0, 120, 40);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height + body.height + footer.height, 40);
        assert_eq!(body.y, header.height);
    }

    #[test]
    fn tiny_screen_does_not_underflow() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 10, 2));
        assert_eq!(header.height, 2);
        assert_eq!(body.height, 0);
        assert_eq!(footer.height, 0);
    }

    #[test]
    fn sidebar_never_takes_more_than_half() {
        let (sidebar, cards) = body_regions(Rect::new(0, 0, 40, 20));
        assert_eq!(sidebar.width, 20);
        assert_eq!(cards.width, 20);
    }

    #[test]
    fn grid_has_four_cells() {
        let cells = card_grid(Rect::new(0, 0, 100, 40));
        assert_eq!(cells[0].width + cells[1].width, 100);
        assert_eq!(cells[0].height + cells[2].height, 40);
    }
}
