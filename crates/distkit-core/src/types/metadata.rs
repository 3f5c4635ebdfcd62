//! The resolved package-metadata record.
//!
//! A flat record of everything a packaging tool needs to describe one
//! distribution. It is constructed once, from a validated manifest, and
//! consumed by metadata emission; nothing mutates it afterwards.

use super::requirement::Requirement;
use super::version::Version;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Resolved distribution metadata, ready for emission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageMetadata {
    /// Distribution name (required)
    pub name: String,

    /// Release version (required)
    pub version: Version,

    /// One-line summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Full long description, read verbatim from the readme file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,

    /// Author name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Author contact address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,

    /// Project homepage URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,

    /// License identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// Mandatory runtime requirements, in declaration order
    #[serde(default)]
    pub requires: Vec<Requirement>,

    /// Optional-feature groups, each with its own requirements
    #[serde(default)]
    pub extras: IndexMap<String, Vec<Requirement>>,

    /// Trove-style classifier strings
    #[serde(default)]
    pub classifiers: Vec<String>,

    /// Importable modules shipped by the distribution
    #[serde(default)]
    pub modules: Vec<String>,

    /// Installable command-line scripts
    #[serde(default)]
    pub scripts: Vec<String>,
}

impl PackageMetadata {
    /// Create metadata with the required fields only
    pub fn new(name: String, version: Version) -> Self {
        Self {
            name,
            version,
            summary: None,
            long_description: None,
            author: None,
            author_email: None,
            homepage: None,
            license: None,
            requires: Vec::new(),
            extras: IndexMap::new(),
            classifiers: Vec::new(),
            modules: Vec::new(),
            scripts: Vec::new(),
        }
    }

    /// Check if a distribution name is well-formed
    ///
    /// Names are ASCII letters, digits, `-`, `_`, and `.`, and must start
    /// and end with a letter or digit.
    pub fn is_valid_name(name: &str) -> bool {
        let first_ok = name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric());
        let last_ok = name
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_alphanumeric());

        first_ok
            && last_ok
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    }

    /// Look up the requirements of a named extra
    pub fn extra(&self, name: &str) -> Option<&[Requirement]> {
        self.extras.get(name).map(Vec::as_slice)
    }

    /// Check if the metadata carries a specific classifier
    pub fn has_classifier(&self, classifier: &str) -> bool {
        self.classifiers.iter().any(|c| c == classifier)
    }
}
