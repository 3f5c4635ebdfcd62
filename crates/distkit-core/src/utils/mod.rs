//! Utility functions and helpers.
//!
//! Path safety checks and strict UTF-8 file reads used by manifest
//! resolution.

pub mod fs;
pub mod path;

// Re-export commonly used utilities
pub use fs::file_contents;
pub use path::{is_safe_path, safe_join};
