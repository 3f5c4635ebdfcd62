//! Error message formatting with actionable suggestions.

use super::colors::Palette;
use distkit_core::error::DistError;
use std::error::Error;

/// Error formatter with suggestions and source chains
pub struct ErrorFormatter {
    palette: Palette,
}

impl ErrorFormatter {
    /// Create a new error formatter
    pub fn new() -> Self {
        Self {
            palette: Palette::detect(),
        }
    }

    /// Format an error with its suggestion and source chain
    pub fn format_error(&self, error: &DistError) -> String {
        let mut output = String::new();

        output.push_str(&self.palette.red("error"));
        output.push_str(": ");
        output.push_str(&error.to_string());

        if let Some(suggestion) = error.suggestion() {
            output.push('\n');
            output.push_str(&self.palette.dim("help"));
            output.push_str(": ");
            output.push_str(suggestion);
        }

        let mut source = error.source();
        while let Some(err) = source {
            output.push('\n');
            output.push_str(&self.palette.dim("caused by"));
            output.push_str(": ");
            output.push_str(&err.to_string());
            source = err.source();
        }

        output
    }
}

impl Default for ErrorFormatter {
    fn default() -> Self {
        Self::new()
    }
}
