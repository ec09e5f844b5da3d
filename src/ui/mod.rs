pub mod footer;
pub mod header;
pub mod help;
pub mod hit_area;
pub mod theme;
pub mod widgets;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::app::{App, Focus};
use widgets::data_table::{self, TableFocus};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title line
            Constraint::Min(5),    // table
            Constraint::Length(1), // key hints
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let app_layout = compute_layout(area);

    header::render(frame, app_layout.header, app);

    let focus = match app.focus {
        Focus::Header => TableFocus {
            header: Some(app.header_focus),
            cursor: None,
        },
        Focus::Rows => TableFocus {
            header: None,
            cursor: (!app.table.is_empty()).then_some(app.cursor),
        },
    };
    let model = app.table.model();
    app.hit_areas.clear();
    data_table::render(
        frame,
        app_layout.body,
        &model,
        focus,
        &mut app.table_state,
        &mut app.hit_areas,
    );

    footer::render(frame, app_layout.footer, app);

    if app.show_help {
        help::render(frame, area);
    }
}
