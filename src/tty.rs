//! Terminal I/O utilities for CLI.
//!
//! stdout is reserved for the JSON response envelope; human-facing status
//! goes to stderr, and only when stderr is a terminal.

use std::io::{self, IsTerminal};

/// Print status message to stderr if running in a terminal.
pub fn status(message: &str) {
    if io::stderr().is_terminal() {
        eprintln!("{}", message);
    }
}

// log_status! macro is defined in lib.rs (#[macro_export]) and available crate-wide.
