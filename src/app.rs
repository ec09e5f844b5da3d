use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use log::{info, warn};
use ratatui::widgets::TableState;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::dataset::{self, JsonRecord, LoadError};
use crate::event::{self, AppEvent};
use crate::table::{CommandOutcome, DataTable, SortDirection, SortState};
use crate::ui::hit_area::{ClickAction, HitAreaRegistry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Header,
    Rows,
}

struct PendingLoad {
    ready_at: Instant,
    records: Vec<JsonRecord>,
}

pub struct App {
    pub running: bool,
    pub table: DataTable<JsonRecord>,
    pub source: Option<PathBuf>,
    pub focus: Focus,
    /// Column index of the focused header cell.
    pub header_focus: usize,
    /// Display position of the row cursor.
    pub cursor: usize,
    pub show_help: bool,
    pub status: Option<String>,
    pub viewport_height: usize,
    pub table_state: TableState,
    pub hit_areas: HitAreaRegistry,
    loading_delay: Duration,
    pending: Option<PendingLoad>,
    column_filter: Option<Vec<String>>,
    fixed_columns: Vec<String>,
}

impl App {
    /// Read the configured source and build the app.
    pub fn load(config: &Config) -> Result<Self, LoadError> {
        let records = read_source(config.file.as_deref())?;
        Ok(Self::with_records(records, config))
    }

    pub fn with_records(records: Vec<JsonRecord>, config: &Config) -> Self {
        let columns =
            dataset::infer_columns(&records, config.columns.as_deref(), &config.fixed);

        let mut table = DataTable::new(Vec::new(), columns)
            .selectable(config.selectable)
            .on_row_select(|rows: &[&JsonRecord]| {
                info!("selection changed: {} rows selected", rows.len());
            });
        if let Some(key) = &config.sort {
            let direction = if config.descending {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            table = table.with_sort(SortState::by(key.clone(), direction));
        }

        let mut app = Self {
            running: true,
            table,
            source: config.file.clone(),
            focus: Focus::Rows,
            header_focus: 0,
            cursor: 0,
            show_help: false,
            status: None,
            viewport_height: 20,
            table_state: TableState::default(),
            hit_areas: HitAreaRegistry::new(),
            loading_delay: Duration::from_millis(config.loading_ms),
            pending: None,
            column_filter: config.columns.clone(),
            fixed_columns: config.fixed.clone(),
        };
        app.header_focus = app.sortable_columns().first().copied().unwrap_or(0);
        app.begin_load(records);
        app.poll_loading(Instant::now());
        app
    }

    pub fn run(
        &mut self,
        terminal: &mut ratatui::Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>,
    ) -> color_eyre::Result<()> {
        let poll_timeout = Duration::from_millis(100);

        while self.running {
            terminal.draw(|frame| {
                let area = frame.area();
                // body = total height - 1 (title) - 1 (footer) - 2 (borders) - 1 (header row)
                self.viewport_height = area.height.saturating_sub(5).max(1) as usize;
                crate::ui::render(frame, self);
            })?;

            match event::poll_event(poll_timeout)? {
                AppEvent::Key(key) => self.handle_key(key),
                AppEvent::Mouse(mouse) => self.handle_mouse(mouse),
                AppEvent::Resize(..) | AppEvent::Tick => {}
            }

            self.poll_loading(Instant::now());
        }

        Ok(())
    }

    pub fn is_loading(&self) -> bool {
        self.table.is_loading()
    }

    /// Show the loading state until `records` are released by `poll_loading`.
    pub fn begin_load(&mut self, records: Vec<JsonRecord>) {
        self.table.set_loading(true);
        self.pending = Some(PendingLoad {
            ready_at: Instant::now() + self.loading_delay,
            records,
        });
    }

    /// Hand pending records to the table once the loading delay has passed.
    pub fn poll_loading(&mut self, now: Instant) {
        let ready = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.ready_at <= now);
        if !ready {
            return;
        }
        let Some(pending) = self.pending.take() else {
            return;
        };
        self.finish_load(pending.records);
    }

    fn finish_load(&mut self, records: Vec<JsonRecord>) {
        // A reloaded file may have gained or lost fields
        if self.column_filter.is_none() {
            let fields = dataset::field_names(&records);
            let current: Vec<&str> = self.table.columns().iter().map(|c| c.key.as_str()).collect();
            if !records.is_empty() && fields != current {
                self.table.set_columns(dataset::infer_columns(
                    &records,
                    None,
                    &self.fixed_columns,
                ));
            }
        }

        info!("loaded {} records", records.len());
        self.table.set_data(records);
        self.table.set_loading(false);
        self.cursor = self.cursor.min(self.table.len().saturating_sub(1));
        if self.header_focus >= self.table.columns().len() {
            self.header_focus = self.sortable_columns().first().copied().unwrap_or(0);
        }
    }

    /// Re-read the source. The current sort survives the reload.
    pub fn reload(&mut self) {
        match read_source(self.source.as_deref()) {
            Ok(records) => {
                self.status = None;
                self.begin_load(records);
            }
            Err(err) => {
                warn!("reload failed: {err}");
                self.status = Some(format!("reload failed: {err}"));
            }
        }
    }

    /// Indices of columns whose header can take focus.
    pub fn sortable_columns(&self) -> Vec<usize> {
        self.table
            .columns()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.sortable)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Help overlay
        if self.show_help {
            self.show_help = false;
            return;
        }

        // Global keys
        match key.code {
            KeyCode::Char('q') => {
                self.running = false;
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
                return;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
                return;
            }
            KeyCode::Char('r') => {
                self.reload();
                return;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_focus();
                return;
            }
            _ => {}
        }

        // Sort and selection are frozen while loading
        if self.is_loading() {
            return;
        }

        match self.focus {
            Focus::Header => self.handle_header_key(key),
            Focus::Rows => self.handle_rows_key(key),
        }
    }

    fn handle_header_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('h') | KeyCode::Left => self.move_header_focus(-1),
            KeyCode::Char('l') | KeyCode::Right => self.move_header_focus(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_focused_header(),
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Esc => self.focus = Focus::Rows,
            KeyCode::Char('a') => self.toggle_select_all(),
            _ => {}
        }
    }

    fn handle_rows_key(&mut self, key: KeyEvent) {
        let count = self.table.len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if count > 0 {
                    self.cursor = (self.cursor + 1).min(count - 1);
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if self.cursor == 0 {
                    self.focus_header();
                } else {
                    self.cursor -= 1;
                }
            }
            KeyCode::Char('g') | KeyCode::Home => self.cursor = 0,
            KeyCode::Char('G') | KeyCode::End => self.cursor = count.saturating_sub(1),
            KeyCode::PageDown => {
                self.cursor = (self.cursor + self.viewport_height).min(count.saturating_sub(1));
            }
            KeyCode::PageUp => {
                self.cursor = self.cursor.saturating_sub(self.viewport_height);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_row(self.cursor),
            KeyCode::Char('a') => self.toggle_select_all(),
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        match self.focus {
            Focus::Header => self.focus = Focus::Rows,
            Focus::Rows => self.focus_header(),
        }
    }

    fn focus_header(&mut self) {
        if !self.sortable_columns().is_empty() {
            self.focus = Focus::Header;
        }
    }

    fn move_header_focus(&mut self, step: isize) {
        let sortable = self.sortable_columns();
        let Some(current) = sortable.iter().position(|&i| i == self.header_focus) else {
            if let Some(&first) = sortable.first() {
                self.header_focus = first;
            }
            return;
        };
        let next = current.saturating_add_signed(step).min(sortable.len() - 1);
        self.header_focus = sortable[next];
    }

    fn activate_focused_header(&mut self) {
        let Some(key) = self
            .table
            .columns()
            .get(self.header_focus)
            .map(|c| c.key.clone())
        else {
            return;
        };
        self.activate_header(&key);
    }

    fn activate_header(&mut self, key: &str) {
        if let CommandOutcome::Sorted(state) = self.table.on_header_activate(key) {
            match state.active() {
                Some(active) => info!("sorted by {} {}", active.key, active.direction.label()),
                None => info!("sort cleared"),
            }
        }
    }

    fn toggle_row(&mut self, position: usize) {
        if let Some(id) = self.table.row_id(position) {
            self.table.on_row_toggle(&id);
        }
    }

    fn toggle_select_all(&mut self) {
        self.table.on_select_all_toggle();
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.show_help {
            if matches!(mouse.kind, MouseEventKind::Down(_)) {
                self.show_help = false;
            }
            return;
        }
        if self.is_loading() {
            return;
        }

        match mouse.kind {
            MouseEventKind::ScrollUp => {
                self.cursor = self.cursor.saturating_sub(3);
            }
            MouseEventKind::ScrollDown => {
                let count = self.table.len();
                if count > 0 {
                    self.cursor = (self.cursor + 3).min(count - 1);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(action) = self.hit_areas.hit_test(mouse.column, mouse.row).cloned() else {
                    return;
                };
                self.handle_click(action);
            }
            _ => {}
        }
    }

    pub fn handle_click(&mut self, action: ClickAction) {
        match action {
            ClickAction::ToggleSelectAll => self.toggle_select_all(),
            ClickAction::ActivateHeader(key) => {
                if let Some(index) = self.table.columns().iter().position(|c| c.key == key) {
                    self.header_focus = index;
                    self.focus = Focus::Header;
                }
                self.activate_header(&key);
            }
            ClickAction::ToggleRow(position) => {
                self.cursor = position;
                self.focus = Focus::Rows;
                self.toggle_row(position);
            }
            ClickAction::FocusRow(position) => {
                self.cursor = position;
                self.focus = Focus::Rows;
            }
        }
    }
}

fn read_source(path: Option<&Path>) -> Result<Vec<JsonRecord>, LoadError> {
    match path {
        Some(path) => dataset::load_file(path),
        None => Ok(dataset::sample_users()),
    }
}
