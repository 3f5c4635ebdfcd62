//! Environment and CLI overrides for loaded manifests.
//!
//! Build pipelines commonly stamp the release version from the outside;
//! overrides let them do that without editing dist.toml. CLI flags beat
//! environment variables, which beat the manifest itself.

use crate::toml::{validate_manifest, DistToml};
use crate::ManifestResult;
use distkit_core::error::DistError;

/// Environment variable overriding the package name
pub const ENV_NAME: &str = "DISTKIT_PACKAGE_NAME";
/// Environment variable overriding the package version
pub const ENV_VERSION: &str = "DISTKIT_PACKAGE_VERSION";
/// Environment variable overriding the one-line summary
pub const ENV_SUMMARY: &str = "DISTKIT_PACKAGE_SUMMARY";

/// Metadata fields that may be overridden from outside the manifest
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub name: Option<String>,
    pub version: Option<String>,
    pub summary: Option<String>,
}

impl Overrides {
    /// Collect overrides from DISTKIT_* environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            name: lookup(ENV_NAME),
            version: lookup(ENV_VERSION),
            summary: lookup(ENV_SUMMARY),
        }
    }

    /// Check if no override is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.version.is_none() && self.summary.is_none()
    }

    /// Layer another set of overrides on top of this one; `higher` wins
    pub fn layered_under(self, higher: Overrides) -> Self {
        Self {
            name: higher.name.or(self.name),
            version: higher.version.or(self.version),
            summary: higher.summary.or(self.summary),
        }
    }

    /// Apply the overrides to a manifest and re-validate it
    pub fn apply(&self, manifest: &mut DistToml) -> ManifestResult<()> {
        if let Some(name) = &self.name {
            manifest.package.name = name.clone();
        }

        if let Some(version) = &self.version {
            manifest.package.version = version.parse().map_err(|e| {
                DistError::validation(
                    "package.version",
                    format!("invalid version override '{}': {}", version, e),
                )
            })?;
        }

        if let Some(summary) = &self.summary {
            manifest.package.summary = Some(summary.clone());
        }

        // An override can introduce an invalid name; check the whole
        // manifest again before it is used.
        validate_manifest(manifest)
    }
}
