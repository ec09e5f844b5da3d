use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::theme;

pub fn render(frame: &mut Frame, area: Rect) {
    let lines = vec![
        header_line("Focus"),
        key_line("Tab / Shift+Tab", "Switch between header and rows"),
        key_line("Esc", "Leave the header row"),
        Line::raw(""),
        header_line("Header"),
        key_line("h / l / Left / Right", "Move between sortable columns"),
        key_line("Enter / Space", "Sort: ascending, descending, off"),
        key_line("Click", "Same as Enter on that column"),
        Line::raw(""),
        header_line("Rows"),
        key_line("j / k / Down / Up", "Move the cursor"),
        key_line("g / G", "First / last row"),
        key_line("PgDn / PgUp", "Page down / page up"),
        key_line("Enter / Space", "Toggle the row's checkbox"),
        key_line("a", "Select all / clear selection"),
        Line::raw(""),
        header_line("General"),
        key_line("r", "Reload the file (sort is kept)"),
        key_line("?", "Toggle this help"),
        key_line("q / Ctrl+C", "Quit"),
    ];

    let popup = centered_rect(60, lines.len() as u16 + 2, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(Line::styled(" Help ", theme::title_style()))
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .style(ratatui::style::Style::default().bg(theme::BASE));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup);
}

fn header_line(text: &str) -> Line<'_> {
    Line::from(Span::styled(format!("  {text}"), theme::title_style()))
}

fn key_line<'a>(key: &'a str, desc: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("    {key:<24}"), theme::key_hint_style()),
        Span::styled(desc, theme::label_style()),
    ])
}

fn centered_rect(width_pct: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .flex(Flex::Center)
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_pct) / 2),
            Constraint::Percentage(width_pct),
            Constraint::Percentage((100 - width_pct) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
