//! Tic Tac Toe - terminal client
//!
//! Two players share one keyboard (or mouse) and take turns on a 3x3 board.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod palette;
mod reflector;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::Cli;
use config::TuiConfig;
use crossterm::event;
use ratatui::{Terminal, backend::CrosstermBackend};
use reflector::TitleReflector;
use std::io::{self, Stdout};
use terminal::TerminalGuard;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::from_cli(&cli)?;
    init_tracing(&config)?;

    info!("Starting Tic Tac Toe");

    // Restores the terminal on every exit from here on, including `?`.
    let mut guard = TerminalGuard::enter(*config.mouse())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(TitleReflector::new(io::stdout()));
    let res = run_app(&mut terminal, &mut app);
    guard.restore();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(theme = ?app.session().observer().reflected(), "Exiting");
    res
}

/// Logs go to a file so they never draw over the board.
fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

/// Draw, wait for one event, handle it, repeat.
#[instrument(skip_all)]
fn run_app(terminal: &mut Tui, app: &mut App<TitleReflector<Stdout>>) -> Result<()> {
    loop {
        let view = app.session().view();
        let theme = app.session().theme();
        let cursor = app.cursor();
        let area = terminal
            .draw(|f| ui::draw(f, &view, cursor, theme))?
            .area;

        if app.should_quit() {
            return Ok(());
        }

        let event = event::read()?;
        app.handle_event(event, area);
    }
}
