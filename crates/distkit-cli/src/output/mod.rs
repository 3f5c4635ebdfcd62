//! Terminal output formatting.
//!
//! Consistent, color-aware output across all commands.

pub mod colors;
pub mod errors;

use colors::Palette;

/// Output handler for consistent terminal formatting
pub struct OutputHandler {
    palette: Palette,
}

impl OutputHandler {
    /// Create a new output handler with auto-detected color support
    pub fn new() -> Self {
        Self {
            palette: Palette::detect(),
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        println!("{}", message);
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", self.palette.green("✓"), message);
    }

    /// Print a warning message to stderr, keeping piped stdout clean
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", self.palette.yellow("warning:"), message);
    }

    /// Print a labeled metadata field
    pub fn field(&self, label: &str, value: &str) {
        // Pad before coloring so escape codes don't skew the column
        let padded = format!("{:<18}", label);
        println!("{}{}", self.palette.dim(&padded), value);
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::new()
    }
}
