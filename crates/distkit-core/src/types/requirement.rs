//! Dependency requirement types.
//!
//! A requirement names a distribution and constrains its version, parsed
//! from strings like `schema>=0.3.1` or `click>=4.0.0,<9`.

use super::metadata::PackageMetadata;
use super::version::{SpecifierSet, VersionError};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named dependency with a version constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub name: String,
    pub specifiers: SpecifierSet,
}

/// Requirement parsing errors
#[derive(Error, Debug)]
pub enum RequirementError {
    #[error("Requirement is empty")]
    Empty,

    #[error("Invalid distribution name: {name}")]
    InvalidName { name: String },

    #[error(transparent)]
    Specifier(#[from] VersionError),
}

impl Requirement {
    /// Create a requirement from a validated name and specifier set
    pub fn new(name: impl Into<String>, specifiers: SpecifierSet) -> Result<Self, RequirementError> {
        let name = name.into();
        if !PackageMetadata::is_valid_name(&name) {
            return Err(RequirementError::InvalidName { name });
        }
        Ok(Self { name, specifiers })
    }

    /// Check if the requirement places no version constraint
    pub fn is_unconstrained(&self) -> bool {
        self.specifiers.is_any()
    }
}

impl FromStr for Requirement {
    type Err = RequirementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(RequirementError::Empty);
        }

        // The name runs until the first operator character
        let split_at = input
            .find(|c| matches!(c, '>' | '<' | '=' | '!' | '~' | '*'))
            .unwrap_or(input.len());
        let name = input[..split_at].trim();
        let specifiers = SpecifierSet::parse(&input[split_at..])?;

        Self::new(name, specifiers)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.specifiers)
    }
}

impl Serialize for Requirement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Requirement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
