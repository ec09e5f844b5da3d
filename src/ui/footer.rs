use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::theme;
use crate::app::{App, Focus};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let mut hints = vec![
        Span::styled(" q", theme::key_hint_style()),
        Span::styled(" quit  ", theme::label_style()),
        Span::styled("?", theme::key_hint_style()),
        Span::styled(" help  ", theme::label_style()),
        Span::styled("Tab", theme::key_hint_style()),
        Span::styled(" focus  ", theme::label_style()),
        Span::styled("r", theme::key_hint_style()),
        Span::styled(" reload  ", theme::label_style()),
    ];

    match app.focus {
        Focus::Header => {
            hints.extend([
                Span::styled("h/l", theme::key_hint_style()),
                Span::styled(" column  ", theme::label_style()),
                Span::styled("Enter/Space", theme::key_hint_style()),
                Span::styled(" sort", theme::label_style()),
            ]);
        }
        Focus::Rows => {
            hints.extend([
                Span::styled("j/k", theme::key_hint_style()),
                Span::styled(" move", theme::label_style()),
            ]);
            // Space sorts while a header has focus
            if app.table.is_selectable() {
                hints.extend([
                    Span::styled("  Space", theme::key_hint_style()),
                    Span::styled(" select  ", theme::label_style()),
                    Span::styled("a", theme::key_hint_style()),
                    Span::styled(" all", theme::label_style()),
                ]);
            }
        }
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(18)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(hints)).style(theme::footer_style()),
        chunks[0],
    );

    let right = if app.is_loading() {
        Line::from(Span::styled("loading ", theme::status_style()))
    } else if app.table.is_selectable() {
        Line::from(vec![
            Span::styled(
                format!("{} ", app.table.selection().len()),
                theme::value_style(),
            ),
            Span::styled("selected ", theme::label_style()),
        ])
    } else {
        Line::from(vec![
            Span::styled(format!("{} ", app.table.len()), theme::value_style()),
            Span::styled("rows ", theme::label_style()),
        ])
    };
    frame.render_widget(
        Paragraph::new(right)
            .alignment(Alignment::Right)
            .style(theme::footer_style()),
        chunks[1],
    );
}
