use ratatui::style::{Color, Modifier, Style};

// Catppuccin Mocha-inspired palette
pub const BASE: Color = Color::Rgb(30, 30, 46);
pub const SURFACE0: Color = Color::Rgb(49, 50, 68);
pub const SURFACE1: Color = Color::Rgb(69, 71, 90);
pub const TEXT: Color = Color::Rgb(205, 214, 244);
pub const SUBTEXT: Color = Color::Rgb(166, 173, 200);
pub const BLUE: Color = Color::Rgb(137, 180, 250);
pub const GREEN: Color = Color::Rgb(166, 227, 161);
pub const RED: Color = Color::Rgb(243, 139, 168);
pub const YELLOW: Color = Color::Rgb(249, 226, 175);
pub const MAUVE: Color = Color::Rgb(203, 166, 247);

pub fn title_style() -> Style {
    Style::default().fg(BLUE).add_modifier(Modifier::BOLD)
}

pub fn header_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE0)
}

pub fn footer_style() -> Style {
    Style::default().fg(SUBTEXT).bg(SURFACE0)
}

pub fn key_hint_style() -> Style {
    Style::default().fg(BLUE)
}

pub fn label_style() -> Style {
    Style::default().fg(SUBTEXT)
}

pub fn value_style() -> Style {
    Style::default().fg(TEXT)
}

pub fn border_style() -> Style {
    Style::default().fg(SURFACE1)
}

pub fn focused_border_style() -> Style {
    Style::default().fg(BLUE)
}

/// Row under the cursor.
pub fn highlight_style() -> Style {
    Style::default().fg(BASE).bg(BLUE)
}

/// Checked rows, mirroring the highlighted left edge of a selected row.
pub fn selected_row_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE1)
}

pub fn selected_marker_style() -> Style {
    Style::default().fg(MAUVE).add_modifier(Modifier::BOLD)
}

/// Sortable header cell; sortable headers behave like buttons.
pub fn sortable_header_style() -> Style {
    Style::default()
        .fg(BLUE)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

pub fn plain_header_style() -> Style {
    Style::default().fg(SUBTEXT).add_modifier(Modifier::BOLD)
}

pub fn focused_header_style() -> Style {
    Style::default()
        .fg(BASE)
        .bg(BLUE)
        .add_modifier(Modifier::BOLD)
}

pub fn sort_indicator_style() -> Style {
    Style::default().fg(GREEN).add_modifier(Modifier::BOLD)
}

pub fn status_style() -> Style {
    Style::default().fg(YELLOW)
}

pub fn error_style() -> Style {
    Style::default().fg(RED)
}
