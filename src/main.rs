use std::fs::File;
use std::io;

use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use simplelog::WriteLogger;

use datatable::app::App;
use datatable::config::Config;

fn main() -> Result<()> {
    color_eyre::install()?;
    let config = Config::parse();

    init_logging(&config)?;
    log::info!("starting datatable v{}", env!("CARGO_PKG_VERSION"));

    // Load before touching the terminal so parse errors print normally.
    let mut app = App::load(&config)
        .wrap_err_with(|| format!("failed to load {}", describe_source(&config)))?;

    setup_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = app.run(&mut terminal);

    restore_terminal(&mut terminal)?;
    log::info!("exiting");
    result
}

fn init_logging(config: &Config) -> Result<()> {
    let file = File::create(&config.log_file)
        .wrap_err_with(|| format!("cannot create log file {}", config.log_file.display()))?;
    WriteLogger::init(
        config.log_level.into(),
        simplelog::Config::default(),
        file,
    )
    .map_err(|e| eyre!("cannot install logger: {e}"))
}

fn describe_source(config: &Config) -> String {
    config
        .file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "sample data".to_string())
}

/// Restores the terminal before the panic report is printed.
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}
