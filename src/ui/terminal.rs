//! Raw-mode setup and teardown for the real terminal

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};

/// Enter raw mode, the alternate screen and mouse capture
pub fn enter<W: Write>(writer: &mut W) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(writer, EnterAlternateScreen, EnableMouseCapture)
}

/// Undo [`enter`]
pub fn restore<W: Write>(writer: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(writer, LeaveAlternateScreen, DisableMouseCapture)
}

/// Restore the terminal before the default panic message is printed
///
/// Without this a panic leaves the shell in raw mode on the alternate screen.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore(&mut io::stdout());
        default_hook(info);
    }));
}
