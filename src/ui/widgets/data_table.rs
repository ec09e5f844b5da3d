use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::table::{GridModel, HeaderModel, StatusModel, TableModel};
use crate::ui::hit_area::{ClickAction, HitAreaRegistry};
use crate::ui::theme;

const CHECKBOX_WIDTH: u16 = 3;
const MAX_COLUMN_WIDTH: usize = 40;
const COLUMN_SPACING: u16 = 1;

/// Focus and cursor as the renderer sees them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableFocus {
    /// Column index of the focused header cell.
    pub header: Option<usize>,
    /// Display position of the row cursor.
    pub cursor: Option<usize>,
}

pub fn checkbox_text(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Draw the table model into `area` and register its clickable regions.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    model: &TableModel,
    focus: TableFocus,
    state: &mut TableState,
    hits: &mut HitAreaRegistry,
) {
    match model {
        TableModel::Loading(status) | TableModel::Empty(status) => {
            render_status(frame, area, status)
        }
        TableModel::Populated(grid) => render_grid(frame, area, grid, focus, state, hits),
    }
}

fn render_status(frame: &mut Frame, area: Rect, status: &StatusModel) {
    let block = Block::default()
        .title(Line::styled(format!(" {} ", status.label), theme::title_style()))
        .borders(Borders::ALL)
        .border_style(theme::border_style());

    let mut message = vec![Line::styled(status.message, theme::status_style())];
    if let Some(hint) = status.hint {
        message.push(Line::styled(hint, theme::label_style()));
    }

    // Vertically center inside the borders
    let inner_height = area.height.saturating_sub(2) as usize;
    let pad = inner_height.saturating_sub(message.len()) / 2;
    let mut lines: Vec<Line> = (0..pad).map(|_| Line::raw("")).collect();
    lines.extend(message);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn render_grid(
    frame: &mut Frame,
    area: Rect,
    grid: &GridModel,
    focus: TableFocus,
    state: &mut TableState,
    hits: &mut HitAreaRegistry,
) {
    let selectable = grid.select_all.is_some();
    let widths = column_widths(grid);

    let mut header_cells: Vec<Cell> = Vec::with_capacity(widths.len());
    if let Some(select_all) = &grid.select_all {
        header_cells.push(
            Cell::from(checkbox_text(select_all.checked)).style(theme::selected_marker_style()),
        );
    }
    for (i, header) in grid.headers.iter().enumerate() {
        header_cells.push(header_cell(header, focus.header == Some(i)));
    }
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = grid
        .rows
        .iter()
        .map(|row| {
            let mut cells: Vec<Cell> = Vec::with_capacity(row.cells.len() + 1);
            if let Some(checkbox) = &row.checkbox {
                cells.push(
                    Cell::from(checkbox_text(checkbox.checked))
                        .style(theme::selected_marker_style()),
                );
            }
            cells.extend(row.cells.iter().map(|text| Cell::from(text.as_str())));
            let line = Row::new(cells);
            if row.selected {
                line.style(theme::selected_row_style())
            } else {
                line
            }
        })
        .collect();

    let title = if selectable {
        let selected = grid.rows.iter().filter(|r| r.selected).count();
        format!(
            " {} ({} rows, {} selected) ",
            grid.label,
            grid.rows.len(),
            selected
        )
    } else {
        format!(" {} ({} rows) ", grid.label, grid.rows.len())
    };
    let block = Block::default()
        .title(Line::styled(title, theme::title_style()))
        .borders(Borders::ALL)
        .border_style(if focus.header.is_some() || focus.cursor.is_some() {
            theme::focused_border_style()
        } else {
            theme::border_style()
        });
    let inner = block.inner(area);

    let table = Table::new(rows, widths.clone())
        .header(header)
        .block(block)
        .column_spacing(COLUMN_SPACING)
        .flex(Flex::Legacy)
        .row_highlight_style(theme::highlight_style());

    state.select(focus.cursor);
    frame.render_stateful_widget(table, area, state);

    // Same split the table uses for its columns
    let columns = Layout::horizontal(widths)
        .flex(Flex::Legacy)
        .spacing(COLUMN_SPACING)
        .split(Rect::new(inner.x, inner.y, inner.width, 1));
    let first_data_column = usize::from(selectable);

    if selectable {
        hits.register(columns[0], ClickAction::ToggleSelectAll);
    }
    for (i, header) in grid.headers.iter().enumerate() {
        if !header.sortable {
            continue;
        }
        if let Some(rect) = columns.get(i + first_data_column) {
            hits.register(*rect, ClickAction::ActivateHeader(header.key.clone()));
        }
    }

    let body_height = inner.height.saturating_sub(1);
    for line in 0..body_height {
        let position = state.offset() + line as usize;
        if position >= grid.rows.len() {
            break;
        }
        let y = inner.y + 1 + line;
        hits.register(
            Rect::new(inner.x, y, inner.width, 1),
            ClickAction::FocusRow(position),
        );
        if selectable {
            let checkbox = columns[0];
            hits.register(
                Rect::new(checkbox.x, y, checkbox.width, 1),
                ClickAction::ToggleRow(position),
            );
        }
    }
}

fn header_cell(header: &HeaderModel, focused: bool) -> Cell<'static> {
    let style = if focused {
        theme::focused_header_style()
    } else if header.sortable {
        theme::sortable_header_style()
    } else {
        theme::plain_header_style()
    };
    let mut spans = vec![Span::styled(header.title.clone(), style)];
    if let Some(direction) = header.sort {
        spans.push(Span::styled(
            format!(" {}", direction.arrow()),
            theme::sort_indicator_style(),
        ));
    }
    Cell::from(Line::from(spans))
}

fn column_widths(grid: &GridModel) -> Vec<Constraint> {
    let mut widths = Vec::with_capacity(grid.headers.len() + 1);
    if grid.select_all.is_some() {
        widths.push(Constraint::Length(CHECKBOX_WIDTH));
    }
    let last = grid.headers.len().saturating_sub(1);
    for (i, header) in grid.headers.iter().enumerate() {
        let content = grid
            .rows
            .iter()
            .filter_map(|row| row.cells.get(i))
            .map(|text| Span::raw(text.as_str()).width())
            .max()
            .unwrap_or(0);
        // Leave room for the sort arrow so columns don't shift when sorting
        let title = Span::raw(header.title.as_str()).width() + 2;
        let width = content.max(title).min(MAX_COLUMN_WIDTH) as u16;
        widths.push(if i == last {
            Constraint::Min(width)
        } else {
            Constraint::Length(width)
        });
    }
    widths
}
