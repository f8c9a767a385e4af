//! CLI module for pomotick.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `display`: Output formatting for timer events

pub mod commands;
pub mod display;

pub use commands::{Cli, Commands, RunArgs};
pub use display::Display;
