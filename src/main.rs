//! Pomotick CLI - a tick-driven Pomodoro timer for the terminal
//!
//! Runs the Pomodoro Technique cycle:
//! - 25 minutes of focused work
//! - 5 minutes of short break
//! - 15 minutes of long break after 4 pomodoros

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tokio::sync::mpsc;

use pomotick::cli::{Cli, Commands, Display, RunArgs};
use pomotick::driver::{DriverOptions, TickDriver};
use pomotick::engine::PomodoroEngine;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse();

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Run(args)) => run_timer(args).await?,
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Builds the engine and drives it until the session budget is reached or
/// the user interrupts.
async fn run_timer(args: RunArgs) -> Result<()> {
    let config = args.to_config()?;
    tracing::debug!(?config, "starting timer");

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let engine = PomodoroEngine::new(config, event_tx);
    let options = DriverOptions {
        restart_phases: !args.once,
        max_work_sessions: args.sessions,
    };
    let mut driver = TickDriver::new(engine, options);

    let mut display = Display::new(args.json);
    let printer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            display.show_event(&event);
        }
    });

    driver.run().await?;
    let total = driver.total_work_sessions();

    // Dropping the driver closes the event channel and ends the printer.
    drop(driver);
    printer.await?;

    if !args.json {
        println!("Completed {} work session(s)", total);
    }
    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
