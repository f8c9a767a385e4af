//! Display utilities for the pomotick CLI.
//!
//! This module renders engine events as terminal output:
//! - Human-readable progress with an in-place countdown line
//! - JSON lines mode for scripting

use std::io::Write;

use crate::engine::TimerEvent;
use crate::types::TimerPhase;

// ============================================================================
// Display
// ============================================================================

/// Renders timer events to stdout.
pub struct Display {
    /// Emit JSON lines instead of human-readable output
    json: bool,
    /// Whether the countdown line is mid-update (written with `\r`)
    mid_line: bool,
}

impl Display {
    /// Creates a display in human or JSON mode.
    pub fn new(json: bool) -> Self {
        Self {
            json,
            mid_line: false,
        }
    }

    /// Renders one timer event.
    pub fn show_event(&mut self, event: &TimerEvent) {
        if self.json {
            // Events are plain data; serialization cannot fail.
            if let Ok(line) = serde_json::to_string(event) {
                println!("{}", line);
            }
            return;
        }

        match event {
            TimerEvent::Started {
                phase,
                remaining_seconds,
            } => {
                self.finish_line();
                println!(
                    "> {} started  {}",
                    phase.label(),
                    Self::format_time(*remaining_seconds)
                );
            }
            TimerEvent::Paused { remaining_seconds } => {
                self.finish_line();
                println!("|| Paused at {}", Self::format_time(*remaining_seconds));
            }
            TimerEvent::Reset {
                phase,
                remaining_seconds,
            } => {
                self.finish_line();
                println!(
                    "[] {} reset to {}",
                    phase.label(),
                    Self::format_time(*remaining_seconds)
                );
            }
            TimerEvent::Tick { remaining_seconds } => {
                print!("\r  {}  ", Self::format_time(*remaining_seconds));
                let _ = std::io::stdout().flush();
                self.mid_line = true;
            }
            TimerEvent::PhaseEnded {
                phase,
                completed_sessions,
            } => {
                self.finish_line();
                if *phase == TimerPhase::Work {
                    println!("* {} session ended (pomodoro #{})", phase.label(), completed_sessions);
                } else {
                    println!("* {} ended", phase.label());
                }
            }
            TimerEvent::PhaseStarted {
                phase,
                remaining_seconds,
            } => {
                println!(
                    "  next: {} ({})",
                    phase.label(),
                    Self::format_time(*remaining_seconds)
                );
            }
            TimerEvent::Skipped { from, to } => {
                self.finish_line();
                println!(">> Skipped {} -> {}", from.label(), to.label());
            }
            TimerEvent::SettingsUpdated { .. } => {
                self.finish_line();
                println!("* Settings updated");
            }
            TimerEvent::ConfigurationRejected { message } => {
                self.finish_line();
                eprintln!("Error: {}", message);
            }
        }
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("Error: {}", message);
    }

    /// Terminates a pending countdown line before printing a full line.
    fn finish_line(&mut self) {
        if self.mid_line {
            println!();
            self.mid_line = false;
        }
    }

    /// Formats remaining seconds as `m:ss`.
    fn format_time(total_seconds: u32) -> String {
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        format!("{}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(Display::format_time(0), "0:00");
        assert_eq!(Display::format_time(59), "0:59");
        assert_eq!(Display::format_time(60), "1:00");
        assert_eq!(Display::format_time(1500), "25:00");
        assert_eq!(Display::format_time(899), "14:59");
    }
}
