//! Timer events for observers of the engine.
//!
//! Every state-changing operation emits a description of what changed so a
//! caller can surface it as user feedback. Events are serializable for
//! hosts that forward them as JSON.

use serde::{Deserialize, Serialize};

use crate::types::{TimerConfig, TimerPhase};

/// Timer events emitted on the engine's notification channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TimerEvent {
    /// The timer started (or was re-started after a phase boundary)
    Started {
        /// Phase being counted down
        phase: TimerPhase,
        /// Seconds left in the phase
        remaining_seconds: u32,
    },
    /// The timer was paused
    Paused {
        /// Seconds left in the phase
        remaining_seconds: u32,
    },
    /// The current phase was reset to its full configured duration
    Reset {
        /// Phase that was reset
        phase: TimerPhase,
        /// Seconds restored to the countdown
        remaining_seconds: u32,
    },
    /// One second elapsed without a phase change
    Tick {
        /// Seconds left in the phase
        remaining_seconds: u32,
    },
    /// A phase ran down to its boundary
    PhaseEnded {
        /// The phase that ended
        phase: TimerPhase,
        /// Work sessions completed since the last long break
        completed_sessions: u32,
    },
    /// A new phase was loaded after a boundary
    PhaseStarted {
        /// The phase that started
        phase: TimerPhase,
        /// Full duration of the new phase
        remaining_seconds: u32,
    },
    /// The user skipped to the next phase
    Skipped {
        /// The phase that was abandoned
        from: TimerPhase,
        /// The phase that was loaded
        to: TimerPhase,
    },
    /// A new configuration took effect
    SettingsUpdated {
        /// The configuration now in force
        config: TimerConfig,
    },
    /// A configuration update was rejected
    ConfigurationRejected {
        /// Why the update was rejected
        message: String,
    },
}
