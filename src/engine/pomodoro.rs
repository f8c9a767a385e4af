//! Pomodoro engine: the phase-cycling state machine.
//!
//! The engine owns the timer state and exposes operations to start, pause,
//! reset, skip, advance by one tick, and reconfigure durations. It performs
//! no I/O and keeps no internal clock: a host driver calls [`tick`] once
//! per second while the timer is running.
//!
//! [`tick`]: PomodoroEngine::tick

use tokio::sync::mpsc;

use crate::types::{TimerConfig, TimerPhase, TimerState, Transition};

use super::error::EngineError;
use super::events::TimerEvent;

// ============================================================================
// PomodoroEngine
// ============================================================================

/// The Pomodoro timer state machine.
///
/// State cycles through `Work -> ShortBreak -> Work -> ... -> LongBreak`
/// with a long break after every `long_break_interval` completed work
/// sessions. The engine stops itself at every phase boundary; the caller
/// decides when to start the next phase.
pub struct PomodoroEngine {
    /// Configured durations and long break interval
    config: TimerConfig,
    /// Current timer state
    state: TimerState,
    /// Event sender channel for observers
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl PomodoroEngine {
    /// Creates a new engine at the start of a work session, not running.
    pub fn new(config: TimerConfig, event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        let state = TimerState::new(&config);
        Self {
            config,
            state,
            event_tx,
        }
    }

    /// Returns a reference to the current timer state.
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Returns a reference to the current configuration.
    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Starts (or resumes) the countdown.
    ///
    /// Idempotent: calling this while already running changes nothing.
    /// Elapsed time cannot be double-counted because ticks are driven
    /// externally.
    pub fn start(&mut self) {
        self.state.running = true;
        self.emit(TimerEvent::Started {
            phase: self.state.phase,
            remaining_seconds: self.state.remaining_seconds,
        });
    }

    /// Pauses the countdown. Idempotent.
    pub fn pause(&mut self) {
        self.state.running = false;
        self.emit(TimerEvent::Paused {
            remaining_seconds: self.state.remaining_seconds,
        });
    }

    /// Stops the countdown and restores the current phase's full duration
    /// under the configuration now in force.
    ///
    /// Neither the phase nor the completed session count changes.
    pub fn reset(&mut self) {
        self.state.running = false;
        self.state.remaining_seconds = self.config.duration_of(self.state.phase);
        self.emit(TimerEvent::Reset {
            phase: self.state.phase,
            remaining_seconds: self.state.remaining_seconds,
        });
    }

    /// Advances the countdown by one second.
    ///
    /// With more than one second left this just decrements. At the boundary
    /// the phase ends: the next phase is computed, its configured duration
    /// loaded, and the engine stops itself; the caller must call
    /// [`start`](Self::start) again to run the new phase.
    ///
    /// Ticks are applied regardless of the `running` flag. The flag is
    /// advisory state for the driver, which is expected to only forward
    /// ticks while running; guarding here as well would make a missed
    /// driver check silently lose time.
    ///
    /// Returns the transition if a phase boundary was crossed.
    pub fn tick(&mut self) -> Option<Transition> {
        if self.state.remaining_seconds > 1 {
            self.state.remaining_seconds -= 1;
            self.emit(TimerEvent::Tick {
                remaining_seconds: self.state.remaining_seconds,
            });
            return None;
        }

        let transition = self.advance_phase();
        self.emit(TimerEvent::PhaseEnded {
            phase: transition.from,
            completed_sessions: transition.completed_sessions,
        });
        self.emit(TimerEvent::PhaseStarted {
            phase: transition.to,
            remaining_seconds: self.state.remaining_seconds,
        });
        Some(transition)
    }

    /// Jumps to the next phase as if the countdown had expired.
    ///
    /// Shares the transition computation with [`tick`](Self::tick), so the
    /// session-count bookkeeping is identical whether a phase expired or
    /// was skipped. Always leaves the engine stopped.
    pub fn skip(&mut self) -> Transition {
        let transition = self.advance_phase();
        self.emit(TimerEvent::Skipped {
            from: transition.from,
            to: transition.to,
        });
        transition
    }

    /// Replaces the configured durations and interval.
    ///
    /// If no time has elapsed in the current phase, its countdown is
    /// re-based to the new duration immediately; otherwise the in-flight
    /// countdown is left untouched and the new durations take effect at the
    /// next phase change.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] if any value is zero,
    /// leaving the previous configuration and state unchanged.
    pub fn set_durations(
        &mut self,
        work_seconds: u32,
        short_break_seconds: u32,
        long_break_seconds: u32,
        long_break_interval: u32,
    ) -> Result<(), EngineError> {
        let config = match TimerConfig::new(
            work_seconds,
            short_break_seconds,
            long_break_seconds,
            long_break_interval,
        ) {
            Ok(config) => config,
            Err(err) => {
                self.emit(TimerEvent::ConfigurationRejected {
                    message: err.to_string(),
                });
                return Err(err);
            }
        };

        let untouched = self.state.is_untouched(&self.config);
        self.config = config;
        if untouched {
            self.state.remaining_seconds = self.config.duration_of(self.state.phase);
        }

        self.emit(TimerEvent::SettingsUpdated {
            config: self.config.clone(),
        });
        Ok(())
    }

    /// Computes and applies the phase transition shared by `tick` and
    /// `skip`.
    ///
    /// From Work: bump the session count, then long break when the count is
    /// a multiple of the interval, short break otherwise. From either
    /// break: back to Work, zeroing the count when leaving a long break.
    fn advance_phase(&mut self) -> Transition {
        let from = self.state.phase;
        let to = match from {
            TimerPhase::Work => {
                self.state.completed_sessions += 1;
                if self.state.completed_sessions % self.config.long_break_interval == 0 {
                    TimerPhase::LongBreak
                } else {
                    TimerPhase::ShortBreak
                }
            }
            TimerPhase::ShortBreak => TimerPhase::Work,
            TimerPhase::LongBreak => {
                self.state.completed_sessions = 0;
                TimerPhase::Work
            }
        };

        self.state.phase = to;
        self.state.remaining_seconds = self.config.duration_of(to);
        self.state.running = false;

        Transition {
            from,
            to,
            completed_sessions: self.state.completed_sessions,
        }
    }

    /// Sends an event to the observer channel.
    ///
    /// A closed channel means the receiver is gone and nobody is listening;
    /// notification delivery must not make the engine's operations fallible.
    fn emit(&self, event: TimerEvent) {
        let _ = self.event_tx.send(event);
    }
}

// ============================================================================
// Tests
// ============================================================================
