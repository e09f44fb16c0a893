//! Chores TUI - interactive two-list chores board.
//!
//! # Commands
//!
//! - `chores-tui run`: start the interactive board
//! - `chores-tui sample`: print the built-in sample board as JSON, usable
//!   as a seed file template
//!
//! # Environment Variables
//!
//! See the [`config`](chores_tui::config) module for available options.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use chores_tui::board::Board;
use chores_tui::config::Config;
use chores_tui::seed;
use chores_tui::tui::{install_panic_hook, App, Tui};

/// Log file name inside the configured log directory.
const LOG_FILE: &str = "chores-tui.log";

/// Chores TUI - interactive two-list chores board.
///
/// Move chores between the active and finished lists with their switch
/// control or by grabbing and dropping them across the panes.
#[derive(Parser, Debug)]
#[command(name = "chores-tui")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
ENVIRONMENT VARIABLES:
    CHORES_BOARD     Path to a JSON board seed file (default: built-in sample)
    CHORES_LOG_DIR   Log directory (default: ~/.chores)
    CHORES_TICK_MS   Event-loop tick interval in ms (default: 60)

EXAMPLES:
    # Start with the built-in sample board
    chores-tui run

    # Write a seed template, edit it, then use it
    chores-tui sample > board.json
    CHORES_BOARD=board.json chores-tui run
")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// CLI subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Start the interactive board.
    Run,

    /// Print the built-in sample board as JSON.
    ///
    /// Redirect the output to a file and point CHORES_BOARD at it to start
    /// from your own chores.
    Sample,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Sample => run_sample(),
        Command::Run => {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .context("Failed to create tokio runtime")?;

            runtime.block_on(run_board())
        }
    }
}

/// Prints the built-in sample seed to stdout.
fn run_sample() -> Result<()> {
    println!("{}", seed::sample_json().context("Failed to render sample board")?);
    Ok(())
}

/// Runs the interactive board.
async fn run_board() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // The TUI owns the terminal, so logs go to a file.
    let _log_guard = init_logging(&config)?;

    info!("Starting chores TUI");

    let board = load_board(&config)?;
    info!(chores = board.len(), "board seeded");

    // Install the panic hook before touching the terminal so a panic
    // during initialization still restores it.
    install_panic_hook();
    let mut tui = Tui::new().context("Failed to initialize terminal")?;

    let app = App::new(board, config.tick_ms);
    let result = app.run(&mut tui).await;

    tui.restore().context("Failed to restore terminal")?;
    result.context("TUI exited with an error")?;

    info!("Chores TUI stopped");
    Ok(())
}

/// Loads the board from the configured seed file, or the built-in sample.
fn load_board(config: &Config) -> Result<Board> {
    match &config.board_path {
        Some(path) => seed::load_board(path)
            .with_context(|| format!("Failed to load board from {}", path.display())),
        None => seed::board_from_chores(seed::sample_chores())
            .context("Failed to build the sample board"),
    }
}

/// Initializes file logging under the configured log directory.
///
/// Returns the non-blocking writer guard, which must stay alive for the
/// duration of the program.
fn init_logging(config: &Config) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    std::fs::create_dir_all(&config.log_dir).with_context(|| {
        format!("Failed to create log directory {}", config.log_dir.display())
    })?;

    let appender = tracing_appender::rolling::never(&config.log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
