//! Full-screen terminal session for the dashboard.

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Once;

use crate::ui::app::App;
use crate::ui::render::draw;

static RESTORE_ON_PANIC: Once = Once::new();

/// Raw mode on the alternate screen for as long as the value lives.
///
/// The screen is restored when the session is dropped, and also from the
/// panic hook so a crash in a reducer or renderer leaves a usable shell.
pub struct DashboardTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl DashboardTerminal {
    pub fn enter() -> io::Result<Self> {
        RESTORE_ON_PANIC.call_once(|| {
            let default_hook = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                restore();
                default_hook(info);
            }));
        });

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, Hide) {
            restore();
            return Err(err);
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout)).inspect_err(|_| restore())?;
        Ok(Self { terminal })
    }

    pub fn draw(&mut self, app: &mut App) -> io::Result<()> {
        self.terminal.draw(|frame| draw(frame, app))?;
        Ok(())
    }
}

impl Drop for DashboardTerminal {
    fn drop(&mut self) {
        restore();
    }
}

/// Leave raw mode and the alternate screen. Safe to call more than once.
fn restore() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}
