// tictactoe-tty: time-travel tic-tac-toe in the terminal

use std::fs::File;
use std::io;
use std::sync::Arc;

use clap::Parser;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tictactoe_tty::config::{Cli, Config};
use tictactoe_tty::errors::AppError;
use tictactoe_tty::ui::{App, terminal};

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = Config::try_from(&cli)?;

    // Log to a file so output does not interfere with the TUI
    let log_file = File::create(&cli.log_file).map_err(|source| AppError::LogFile {
        path: cli.log_file.clone(),
        source,
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(x = %config.x_glyph, o = %config.o_glyph, "starting tictactoe-tty");

    // Set up terminal
    terminal::install_panic_hook();
    let mut stdout = io::stdout();
    terminal::enter(&mut stdout)?;
    let backend = CrosstermBackend::new(stdout);
    let mut tui = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = app.run(&mut tui);

    // Restore terminal
    terminal::restore(tui.backend_mut())?;
    tui.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "event loop failed");
        return Err(err.into());
    }

    info!(moves = app.game.history().last_step(), "exiting");
    Ok(())
}
