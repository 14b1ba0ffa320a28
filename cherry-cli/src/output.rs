//! # Output Helpers
//!
//! Status messages for the user go to stderr so stdout carries nothing but
//! the resolved pull request lines.

use owo_colors::OwoColorize;

/// Print a success message to stderr
pub fn print_success(message: &str) {
  eprintln!("{} {}", "✓".green().bold(), message);
}

/// Print a warning message to stderr
pub fn print_warning(message: &str) {
  eprintln!("{} {}", "⚠".yellow().bold(), message);
}
