//! # distkit-core
//!
//! Core types and utilities shared across all distkit crates.
//!
//! This crate provides:
//! - Version, Specifier, and Requirement types for dependency declarations
//! - The PackageMetadata record consumed by metadata emission
//! - DistError enum for unified error handling
//! - Path and file utilities for manifest-relative reads
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Core data types (Version, PackageMetadata, etc.)
//! - `error`: Error types and result aliases
//! - `utils`: Path safety checks and strict UTF-8 file reads

pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{DistError, DistResult};
pub use types::{PackageMetadata, Requirement, Specifier, SpecifierSet, Version};
