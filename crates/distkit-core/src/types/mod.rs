//! Core data types for distribution metadata.
//!
//! This module provides the fundamental types used throughout distkit:
//! - Version and specifier types for release constraints
//! - Requirement specifications for dependencies
//! - The resolved package-metadata record
//! - Classifier validation

pub mod classifier;
pub mod metadata;
pub mod requirement;
pub mod version;

// Re-export all public types
pub use metadata::PackageMetadata;
pub use requirement::{Requirement, RequirementError};
pub use version::{Op, Specifier, SpecifierSet, Version, VersionError};
