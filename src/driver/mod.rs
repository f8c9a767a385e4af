//! Tick driver for the Pomodoro engine.
//!
//! The engine keeps no clock of its own; this module supplies the external
//! one-second caller:
//! - Countdown scheduling with `tokio::time::interval`
//! - Restart policy at phase boundaries (the engine stops itself there)
//! - Graceful shutdown on Ctrl+C

use anyhow::{Context, Result};
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::engine::PomodoroEngine;
use crate::types::TimerPhase;

// ============================================================================
// DriverOptions
// ============================================================================

/// Policy knobs for the tick driver.
#[derive(Debug, Clone)]
pub struct DriverOptions {
    /// Start the next phase automatically at each boundary. When false the
    /// driver returns after the first phase change.
    pub restart_phases: bool,
    /// Stop after this many completed work sessions. `None` runs until
    /// interrupted.
    pub max_work_sessions: Option<u32>,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            restart_phases: true,
            max_work_sessions: None,
        }
    }
}

// ============================================================================
// TickDriver
// ============================================================================

/// Owns the engine and forwards one tick per second while it is running.
///
/// Missed ticks are skipped rather than replayed: drift and catch-up are a
/// host concern and the engine only ever sees single-second advancement.
pub struct TickDriver {
    engine: PomodoroEngine,
    options: DriverOptions,
    /// Work sessions finished under this driver. Unlike the engine's
    /// session count this never resets at a long break.
    total_work_sessions: u32,
}

impl TickDriver {
    /// Creates a driver around an engine.
    pub fn new(engine: PomodoroEngine, options: DriverOptions) -> Self {
        Self {
            engine,
            options,
            total_work_sessions: 0,
        }
    }

    /// Returns a reference to the driven engine.
    pub fn engine(&self) -> &PomodoroEngine {
        &self.engine
    }

    /// Returns how many work sessions have finished since the driver was
    /// created.
    pub fn total_work_sessions(&self) -> u32 {
        self.total_work_sessions
    }

    /// Runs the tick loop until the session budget is exhausted, a phase
    /// boundary is reached with restarts disabled, or Ctrl+C arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if the Ctrl+C handler cannot be installed.
    pub async fn run(&mut self) -> Result<()> {
        let mut ticker = interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.engine.start();

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if !self.engine.state().running {
                        continue;
                    }

                    let Some(transition) = self.engine.tick() else {
                        continue;
                    };

                    if transition.from == TimerPhase::Work {
                        self.total_work_sessions += 1;
                        if let Some(max) = self.options.max_work_sessions {
                            if self.total_work_sessions >= max {
                                break;
                            }
                        }
                    }

                    if !self.options.restart_phases {
                        break;
                    }
                    self.engine.start();
                }
                result = tokio::signal::ctrl_c() => {
                    result.context("failed to listen for Ctrl+C")?;
                    self.engine.pause();
                    break;
                }
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
