//! Command definitions for the pomotick CLI.
//!
//! Uses clap derive macro for argument parsing.

use clap::{Args, Parser, Subcommand};

use crate::engine::EngineError;
use crate::types::TimerConfig;

// ============================================================================
// CLI Structure
// ============================================================================

/// Pomotick - a tick-driven Pomodoro timer for the terminal
#[derive(Parser, Debug)]
#[command(
    name = "pomotick",
    version,
    about = "Tick-driven Pomodoro timer for the terminal",
    long_about = "Runs a Pomodoro cycle in the terminal: focused work sessions\n\
                  separated by short breaks, with a long break after a configurable\n\
                  number of completed sessions.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the Pomodoro timer
    Run(RunArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Run Command Arguments
// ============================================================================

/// Arguments for the run command
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Work duration in minutes (1-120)
    #[arg(
        short,
        long,
        default_value = "25",
        value_parser = clap::value_parser!(u32).range(1..=120)
    )]
    pub work: u32,

    /// Short break duration in minutes (1-60)
    #[arg(
        short,
        long,
        default_value = "5",
        value_parser = clap::value_parser!(u32).range(1..=60)
    )]
    pub short_break: u32,

    /// Long break duration in minutes (1-60)
    #[arg(
        short,
        long,
        default_value = "15",
        value_parser = clap::value_parser!(u32).range(1..=60)
    )]
    pub long_break: u32,

    /// Work sessions between long breaks
    #[arg(
        short,
        long,
        default_value = "4",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub interval: u32,

    /// Stop after this many completed work sessions (runs until Ctrl+C
    /// otherwise)
    #[arg(long)]
    pub sessions: Option<u32>,

    /// Exit at the first phase boundary instead of starting the next phase
    #[arg(long)]
    pub once: bool,

    /// Interpret durations as seconds instead of minutes
    #[arg(long)]
    pub seconds: bool,

    /// Print timer events as JSON lines instead of human-readable output
    #[arg(long)]
    pub json: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            work: 25,
            short_break: 5,
            long_break: 15,
            interval: 4,
            sessions: None,
            once: false,
            seconds: false,
            json: false,
        }
    }
}

impl RunArgs {
    /// Builds the engine configuration from the parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] if any resulting value
    /// is zero. Unreachable through clap's value parsers, which already
    /// enforce positive ranges.
    pub fn to_config(&self) -> Result<TimerConfig, EngineError> {
        let unit: u32 = if self.seconds { 1 } else { 60 };
        TimerConfig::new(
            self.work * unit,
            self.short_break * unit,
            self.long_break * unit,
            self.interval,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
