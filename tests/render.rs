use clap::Parser;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::TableState;
use ratatui::Terminal;

use datatable::app::{App, Focus};
use datatable::config::Config;
use datatable::dataset::sample_users;
use datatable::table::{StatusModel, TableModel};
use datatable::ui;
use datatable::ui::hit_area::{ClickAction, HitAreaRegistry};
use datatable::ui::widgets::data_table::{self, TableFocus};

fn config(args: &[&str]) -> Config {
    Config::parse_from(std::iter::once("datatable").chain(args.iter().copied()))
}

fn screen(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn draw_app(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    screen(terminal.backend().buffer())
}

#[test]
fn loading_state_hides_the_table() {
    let mut app = App::with_records(sample_users(), &config(&["--loading-ms", "5000"]));
    assert!(app.is_loading());

    let text = draw_app(&mut app, 100, 16);
    assert!(text.contains("Loading..."));
    assert!(!text.contains("John Doe"));
    assert!(app.hit_areas.is_empty());
}

#[test]
fn empty_state_shows_message_and_hint() {
    let mut app = App::with_records(Vec::new(), &config(&[]));
    let text = draw_app(&mut app, 100, 16);
    assert!(text.contains("No data available"));
    assert!(text.contains("Try adjusting your search or filters"));
}

#[test]
fn populated_table_shows_rows_and_sort_arrow() {
    let mut app = App::with_records(sample_users(), &config(&["--sort", "name", "--descending"]));
    let text = draw_app(&mut app, 120, 16);
    assert!(text.contains("Name ↓"));
    assert!(text.contains("Data table (5 rows)"));

    let john = text.find("John Doe").unwrap();
    let bob = text.find("Bob Johnson").unwrap();
    assert!(john < bob);
}

#[test]
fn selectable_table_draws_checkboxes() {
    let mut app = App::with_records(sample_users(), &config(&["--selectable"]));
    app.table.on_row_toggle("row-1");
    let text = draw_app(&mut app, 120, 16);
    assert!(text.contains("5 rows, 1 selected"));
    assert_eq!(text.matches("[x]").count(), 1);
    assert_eq!(text.matches("[ ]").count(), 5);
}

#[test]
fn rendering_registers_click_targets() {
    let mut app = App::with_records(sample_users(), &config(&["--selectable"]));
    draw_app(&mut app, 120, 16);

    // First body cell, inside the border, on the header row
    assert_eq!(
        app.hit_areas.hit_test(1, 2),
        Some(&ClickAction::ToggleSelectAll)
    );
    assert_eq!(
        app.hit_areas.hit_test(1, 3),
        Some(&ClickAction::ToggleRow(0))
    );
    assert_eq!(
        app.hit_areas.hit_test(60, 4),
        Some(&ClickAction::FocusRow(1))
    );
}

#[test]
fn status_model_renders_centered_message() {
    let mut terminal = Terminal::new(TestBackend::new(40, 7)).unwrap();
    let mut state = TableState::default();
    let mut hits = HitAreaRegistry::new();
    terminal
        .draw(|frame| {
            data_table::render(
                frame,
                Rect::new(0, 0, 40, 7),
                &TableModel::Loading(StatusModel::loading()),
                TableFocus::default(),
                &mut state,
                &mut hits,
            )
        })
        .unwrap();
    let text = screen(terminal.backend().buffer());
    assert!(text.contains("Loading data"));
    assert!(text.lines().nth(3).is_some_and(|line| line.contains("Loading...")));
    assert!(hits.is_empty());
}

#[test]
fn help_overlay_lists_sort_keys() {
    let mut app = App::with_records(sample_users(), &config(&[]));
    app.show_help = true;
    let text = draw_app(&mut app, 120, 30);
    assert!(text.contains("Sort: ascending, descending, off"));
}

#[test]
fn selection_hints_follow_row_focus() {
    let mut app = App::with_records(sample_users(), &config(&["--selectable"]));
    let rows = draw_app(&mut app, 160, 16);
    let footer = rows.lines().last().unwrap_or_default().to_string();
    assert!(footer.contains("select"));

    app.focus = Focus::Header;
    let header = draw_app(&mut app, 160, 16);
    let footer = header.lines().last().unwrap_or_default().to_string();
    assert!(footer.contains("sort"));
    assert!(!footer.contains(" select "));
}
