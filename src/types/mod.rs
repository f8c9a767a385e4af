//! Core data types for the Pomodoro engine.
//!
//! This module defines the data structures used for:
//! - The phase enumeration driving the state machine
//! - Timer configuration with validation
//! - The mutable timer state owned by the engine

use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

// ============================================================================
// TimerPhase
// ============================================================================

/// Represents the current phase of the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    /// A focused work session
    Work,
    /// A short break between work sessions
    ShortBreak,
    /// A long break after every `long_break_interval` work sessions
    LongBreak,
}

impl TimerPhase {
    /// Returns the string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerPhase::Work => "work",
            TimerPhase::ShortBreak => "short_break",
            TimerPhase::LongBreak => "long_break",
        }
    }

    /// Returns the human-readable label for the phase.
    pub fn label(&self) -> &'static str {
        match self {
            TimerPhase::Work => "Work",
            TimerPhase::ShortBreak => "Short Break",
            TimerPhase::LongBreak => "Long Break",
        }
    }

    /// Returns true if the phase is a break of either length.
    pub fn is_break(&self) -> bool {
        matches!(self, TimerPhase::ShortBreak | TimerPhase::LongBreak)
    }
}

impl Default for TimerPhase {
    fn default() -> Self {
        TimerPhase::Work
    }
}

// ============================================================================
// TimerConfig
// ============================================================================

/// Configuration for the Pomodoro timer.
///
/// All durations are in seconds and must be positive; the interval is the
/// number of completed work sessions between long breaks. The configuration
/// only changes through explicit reconfiguration, never as a side effect of
/// running the timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Work session duration in seconds
    pub work_seconds: u32,
    /// Short break duration in seconds
    pub short_break_seconds: u32,
    /// Long break duration in seconds
    pub long_break_seconds: u32,
    /// Number of work sessions before a long break
    pub long_break_interval: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_seconds: 25 * 60,
            short_break_seconds: 5 * 60,
            long_break_seconds: 15 * 60,
            long_break_interval: 4,
        }
    }
}

impl TimerConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] if any value is zero.
    pub fn new(
        work_seconds: u32,
        short_break_seconds: u32,
        long_break_seconds: u32,
        long_break_interval: u32,
    ) -> Result<Self, EngineError> {
        let config = Self {
            work_seconds,
            short_break_seconds,
            long_break_seconds,
            long_break_interval,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] naming the first
    /// offending field.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.work_seconds == 0 {
            return Err(EngineError::InvalidConfiguration {
                field: "work_seconds",
            });
        }
        if self.short_break_seconds == 0 {
            return Err(EngineError::InvalidConfiguration {
                field: "short_break_seconds",
            });
        }
        if self.long_break_seconds == 0 {
            return Err(EngineError::InvalidConfiguration {
                field: "long_break_seconds",
            });
        }
        if self.long_break_interval == 0 {
            return Err(EngineError::InvalidConfiguration {
                field: "long_break_interval",
            });
        }
        Ok(())
    }

    /// Returns the configured duration for the given phase, in seconds.
    pub fn duration_of(&self, phase: TimerPhase) -> u32 {
        match phase {
            TimerPhase::Work => self.work_seconds,
            TimerPhase::ShortBreak => self.short_break_seconds,
            TimerPhase::LongBreak => self.long_break_seconds,
        }
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// The mutable state owned exclusively by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// Current phase of the timer
    pub phase: TimerPhase,
    /// Remaining seconds in the current phase
    pub remaining_seconds: u32,
    /// Whether ticks are being consumed
    pub running: bool,
    /// Work sessions finished since the last long break
    pub completed_sessions: u32,
}

impl TimerState {
    /// Creates the initial state: a full work session, not running.
    pub fn new(config: &TimerConfig) -> Self {
        Self {
            phase: TimerPhase::Work,
            remaining_seconds: config.work_seconds,
            running: false,
            completed_sessions: 0,
        }
    }

    /// Returns true if no time has elapsed in the current phase under the
    /// given configuration.
    pub fn is_untouched(&self, config: &TimerConfig) -> bool {
        self.remaining_seconds == config.duration_of(self.phase)
    }
}

// ============================================================================
// Transition
// ============================================================================

/// A completed phase change, as reported by `tick()` and `skip()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The phase that just ended
    pub from: TimerPhase,
    /// The phase that just started
    pub to: TimerPhase,
    /// The session count after the transition was applied
    pub completed_sessions: u32,
}

// ============================================================================
// Tests
// ============================================================================
