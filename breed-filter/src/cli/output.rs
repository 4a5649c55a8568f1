//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::io::{self, Write};

use colored::Colorize;

/// Print error line (red) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}", msg.to_string().red());
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Write a complete block of plain output to stdout in one write.
pub fn block(msg: &(impl std::fmt::Display + ?Sized)) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(format!("{msg}\n").as_bytes())?;
    stdout.flush()
}
