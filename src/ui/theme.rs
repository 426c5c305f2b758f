use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x2c, 0x7f, 0xb8);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOCUS_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const CHECKED: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const UNCHECKED: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const TREND: Color = Color::Rgb(0xf5, 0x9e, 0x0b);

/// Colors assigned to groups in order of first appearance (viridis-like).
pub const SERIES: [Color; 5] = [
    Color::Rgb(0x44, 0x01, 0x54),
    Color::Rgb(0x3b, 0x52, 0x8b),
    Color::Rgb(0x21, 0x90, 0x8c),
    Color::Rgb(0x5d, 0xc8, 0x63),
    Color::Rgb(0xfd, 0xe7, 0x25),
];

pub fn series_color(index: usize) -> Color {
    SERIES[index % SERIES.len()]
}
