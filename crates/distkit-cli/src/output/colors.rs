//! Terminal color detection and ANSI formatting.
//!
//! Honors the NO_COLOR convention and disables colors when either stream
//! is not a terminal.

use std::env;
use std::io::{self, IsTerminal};

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Color palette with automatic enable/disable
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Detect color support from the environment
    pub fn detect() -> Self {
        let enabled = env::var_os("NO_COLOR").is_none()
            && io::stdout().is_terminal()
            && io::stderr().is_terminal();
        Self { enabled }
    }

    /// A palette that never emits escape codes
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", code, text, RESET)
        } else {
            text.to_string()
        }
    }

    pub fn green(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    pub fn yellow(&self, text: &str) -> String {
        self.paint(YELLOW, text)
    }

    pub fn red(&self, text: &str) -> String {
        self.paint(RED, text)
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }
}
