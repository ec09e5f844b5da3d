use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::theme;
use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let source = app
        .source
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "sample users".to_string());

    let mut spans = vec![
        Span::styled(" datatable ", theme::title_style()),
        Span::styled(format!("  {source}"), theme::value_style()),
        Span::styled(
            format!(
                "  {} rows  {} columns",
                app.table.len(),
                app.table.columns().len()
            ),
            theme::label_style(),
        ),
    ];
    if let Some(active) = app.table.sort_state().active() {
        spans.push(Span::styled(
            format!("  sorted by {} {}", active.key, active.direction.arrow()),
            theme::label_style(),
        ));
    }
    if let Some(status) = &app.status {
        spans.push(Span::styled(format!("  {status}"), theme::error_style()));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(theme::header_style()),
        area,
    );
}
