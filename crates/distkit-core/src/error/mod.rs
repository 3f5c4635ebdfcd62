//! Error types and result aliases for distkit operations.
//!
//! Provides a unified error type that covers all error conditions across
//! the distkit crates with actionable error messages.

use thiserror::Error;

/// Unified error type for all distkit operations
#[derive(Error, Debug)]
pub enum DistError {
    // Manifest errors
    #[error("Failed to parse dist.toml: {message}")]
    TomlParse { message: String },

    #[error("Manifest field '{field}' is invalid: {reason}")]
    ManifestValidation { field: String, reason: String },

    // Long description / file errors
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("File is not valid UTF-8: {path}")]
    NonUtf8 { path: String },

    #[error("Path escapes the manifest directory: {path}")]
    PathEscape { path: String },

    // Emission errors
    #[error("Failed to emit metadata document: {message}")]
    Emit { message: String },

    // IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for distkit operations
pub type DistResult<T> = Result<T, DistError>;

impl DistError {
    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Create a manifest validation error
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ManifestValidation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            DistError::TomlParse { .. } => {
                Some("Check the manifest syntax; run 'distkit check' after each edit")
            },
            DistError::ManifestValidation { .. } => {
                Some("Fix the named field in dist.toml and run 'distkit check' again")
            },
            DistError::FileNotFound { .. } => {
                Some("Make sure the file exists next to dist.toml and the 'readme' path is correct")
            },
            DistError::NonUtf8 { .. } => {
                Some("Re-encode the file as UTF-8; the long description is read verbatim")
            },
            DistError::PathEscape { .. } => {
                Some("Use a path relative to the manifest directory without '..' components")
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_constructor() {
        let err = DistError::validation("name", "must not be empty");
        assert!(err.to_string().contains("name"));
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_suggestions() {
        let err = DistError::NonUtf8 {
            path: "README.rst".to_string(),
        };
        assert!(err.suggestion().is_some());

        let io = DistError::io(
            "read failed".to_string(),
            std::io::Error::new(std::io::ErrorKind::Other, "boom"),
        );
        assert!(io.suggestion().is_none());
    }
}
