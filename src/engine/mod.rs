//! Engine module for the Pomodoro timer.
//!
//! This module contains the core state machine:
//! - `pomodoro`: the engine with its operations and transition logic
//! - `events`: notifications emitted to observers
//! - `error`: the engine's recoverable error type

pub mod error;
pub mod events;
pub mod pomodoro;

pub use error::EngineError;
pub use events::TimerEvent;
pub use pomodoro::PomodoroEngine;
