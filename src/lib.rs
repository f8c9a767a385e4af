//! Pomotick - a tick-driven Pomodoro timer engine
//!
//! This library provides the core functionality for the pomotick CLI:
//! - A Pomodoro state machine cycling Work, Short Break and Long Break
//!   phases, advanced one second at a time by an external caller
//! - An observer channel reporting every state change as a [`TimerEvent`]
//! - A tokio-based tick driver supplying the one-second cadence
//! - CLI command parsing and display utilities
//!
//! The engine performs no I/O and keeps no clock; hosts embed it by owning
//! a [`PomodoroEngine`] and forwarding ticks, or by running a
//! [`TickDriver`] which does both.

pub mod cli;
pub mod driver;
pub mod engine;
pub mod types;

// Re-export commonly used types for convenience
pub use driver::{DriverOptions, TickDriver};
pub use engine::{EngineError, PomodoroEngine, TimerEvent};
pub use types::{TimerConfig, TimerPhase, TimerState, Transition};
