//! Rewind - terminal tic-tac-toe with a jumpable move history.

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod input;
mod replay;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Mutex;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

use app::{App, Palette};
use cli::{Cli, Command};
use config::{Config, LoggingConfig};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_tracing(config.logging())?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(&config),
        Command::Replay { cells, jump } => replay::run(&cells, jump, &mut io::stdout().lock()),
    }
}

/// Picks the `RUST_LOG` filter when it parses, the configured one otherwise.
///
/// The second value explains why a set `RUST_LOG` was passed over.
fn select_filter(env: Option<&str>, configured: &str) -> Result<(EnvFilter, Option<String>)> {
    let rejected = match env {
        Some(directives) => match EnvFilter::try_new(directives) {
            Ok(filter) => return Ok((filter, None)),
            Err(e) => Some(format!(
                "Ignoring invalid {} '{}' ({}); using '{}'",
                EnvFilter::DEFAULT_ENV,
                directives,
                e,
                configured
            )),
        },
        None => None,
    };

    let filter = EnvFilter::try_new(configured)
        .with_context(|| format!("Invalid log filter '{}'", configured))?;
    Ok((filter, rejected))
}

/// Sends logs to the configured file, or discards them.
///
/// `RUST_LOG` takes precedence over the configured filter.
fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (filter, rejected) = select_filter(env.as_deref(), logging.filter())?;

    match logging.file() {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::sink)
                .init();
        }
    }

    if let Some(reason) = rejected {
        eprintln!("{}", reason);
        warn!("{}", reason);
    }
    Ok(())
}

/// Runs the interactive terminal UI until the user quits.
#[instrument(skip_all)]
fn run_tui(config: &Config) -> Result<()> {
    let palette = Palette::from_config(config.display())?;
    info!("Starting Rewind TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(palette);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    info!(moves = app.engine().len() - 1, "Exiting");
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while app.is_running() {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }
    Ok(())
}
