use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::terminal::DashboardTerminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Run the dashboard until the user quits.
///
/// Every event, ticks and resizes included, is followed by a redraw.
pub fn run(mut app: App, tick_rate: Duration) -> io::Result<()> {
    let mut terminal = DashboardTerminal::enter()?;
    let events = EventHandler::new(tick_rate);
    tracing::info!(records = app.dataset().len(), "Dashboard started");

    loop {
        terminal.draw(&mut app)?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Resize | AppEvent::Tick) | Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(terminal);
    tracing::info!(
        view_recomputations = app.view_recomputations(),
        "Dashboard stopped"
    );
    Ok(())
}
