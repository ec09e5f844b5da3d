use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};
use std::time::Duration;

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

/// Wait up to `timeout` for the next terminal event.
pub fn poll_event(timeout: Duration) -> color_eyre::Result<AppEvent> {
    if !event::poll(timeout)? {
        return Ok(AppEvent::Tick);
    }
    let app_event = match event::read()? {
        // Only presses: a release would toggle a checkbox twice on some terminals
        Event::Key(key) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
        Event::Mouse(mouse) => AppEvent::Mouse(mouse),
        Event::Resize(width, height) => AppEvent::Resize(width, height),
        _ => AppEvent::Tick,
    };
    Ok(app_event)
}
