use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, warn};

pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

pub const WINDOW_TITLE: &str = "Enhanced Quiz App";

pub fn init() -> io::Result<AppTerminal> {
    setup_panic_hook();
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    apply_theme_or_default();

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    io::stdout().execute(crossterm::cursor::Show)?;
    Ok(())
}

/// Applies the window chrome. Failing here only costs looks.
fn apply_theme_or_default() {
    match apply_theme() {
        Ok(()) => debug!("theme applied"),
        Err(e) => warn!(error = %e, "could not apply theme, using terminal defaults"),
    }
}

fn apply_theme() -> io::Result<()> {
    io::stdout().execute(SetTitle(WINDOW_TITLE))?;
    Ok(())
}

fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}
