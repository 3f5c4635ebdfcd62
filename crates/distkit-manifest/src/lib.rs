//! Manifest handling for distkit
//!
//! This crate parses and validates `dist.toml` manifests, resolves them
//! into complete metadata records (inlining the long description from the
//! readme file), applies environment and CLI overrides, and emits the
//! metadata document a packaging tool consumes.

pub mod emit;
pub mod overrides;
pub mod resolve;
pub mod toml;

// Re-export main types
pub use emit::emit_metadata_json;
pub use overrides::Overrides;
pub use resolve::resolve_metadata;
pub use toml::{find_manifest, load_from_file, parse_dist_toml, DistToml, PackageSection};

use distkit_core::error::DistError;

/// Result type for manifest operations
pub type ManifestResult<T> = Result<T, DistError>;

/// File name of the declarative manifest
pub const MANIFEST_FILE: &str = "dist.toml";
