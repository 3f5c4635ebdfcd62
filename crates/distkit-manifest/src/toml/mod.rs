//! dist.toml manifest parsing, validation, and serialization

use crate::ManifestResult;
use distkit_core::error::DistError;
use distkit_core::types::{classifier, PackageMetadata, SpecifierSet, Version};
use distkit_core::utils::path::is_safe_path;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete dist.toml manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistToml {
    /// Package metadata section
    pub package: PackageSection,

    /// Mandatory runtime dependencies, name to specifier string
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,

    /// Optional-feature groups, group name to its own dependency table
    #[serde(default)]
    pub extras: IndexMap<String, IndexMap<String, String>>,
}

/// Package metadata section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageSection {
    /// Distribution name (required)
    pub name: String,

    /// Release version (required)
    pub version: Version,

    /// One-line summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Readme file whose text becomes the long description,
    /// relative to the manifest directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readme: Option<String>,

    /// Author name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Author contact address
    #[serde(skip_serializing_if = "Option::is_none", rename = "author-email")]
    pub author_email: Option<String>,

    /// Project homepage URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,

    /// License identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

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

/// Parse TOML text into a validated manifest
pub fn parse_dist_toml(content: &str) -> ManifestResult<DistToml> {
    // toml_edit first, for syntax errors with locations
    content
        .parse::<toml_edit::DocumentMut>()
        .map_err(|e| DistError::TomlParse {
            message: format!("TOML syntax error: {}", e),
        })?;

    // Then serde for typed deserialization
    let manifest: DistToml = toml::from_str(content).map_err(|e| DistError::TomlParse {
        message: format!("TOML parsing error: {}", e),
    })?;

    validate_manifest(&manifest)?;

    Ok(manifest)
}

/// Serialize a manifest back to TOML text
pub fn serialize_dist_toml(manifest: &DistToml) -> ManifestResult<String> {
    toml::to_string_pretty(manifest).map_err(|e| DistError::TomlParse {
        message: format!("TOML serialization error: {}", e),
    })
}

/// Load and parse a dist.toml from a file path
pub async fn load_from_file(path: &camino::Utf8Path) -> ManifestResult<DistToml> {
    tracing::debug!(path = %path, "loading manifest");

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| DistError::io(format!("Failed to read {}", path), e))?;

    parse_dist_toml(&content).map_err(|e| match e {
        DistError::TomlParse { message } => DistError::TomlParse {
            message: format!("In file {}: {}", path, message),
        },
        DistError::ManifestValidation { field, reason } => DistError::ManifestValidation {
            field,
            reason: format!("In file {}: {}", path, reason),
        },
        other => other,
    })
}

/// Find the nearest dist.toml, walking up from `cwd`
pub fn find_manifest(cwd: &camino::Utf8Path) -> Option<camino::Utf8PathBuf> {
    let mut current = cwd;

    loop {
        let candidate = current.join(crate::MANIFEST_FILE);
        if candidate.exists() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
}

/// Validate every manifest field
pub fn validate_manifest(manifest: &DistToml) -> ManifestResult<()> {
    let package = &manifest.package;

    if !PackageMetadata::is_valid_name(&package.name) {
        return Err(DistError::validation(
            "package.name",
            format!(
                "invalid distribution name '{}': names are letters, digits, '-', '_', '.' and \
                 must start and end with a letter or digit",
                package.name
            ),
        ));
    }

    if let Some(email) = &package.author_email {
        if !is_plausible_email(email) {
            return Err(DistError::validation(
                "package.author-email",
                format!("'{}' does not look like an email address", email),
            ));
        }
    }

    if let Some(homepage) = &package.homepage {
        url::Url::parse(homepage).map_err(|e| {
            DistError::validation("package.homepage", format!("invalid URL '{}': {}", homepage, e))
        })?;
    }

    if let Some(readme) = &package.readme {
        let path = Path::new(readme);
        if path.is_absolute() || !is_safe_path(path) {
            return Err(DistError::validation(
                "package.readme",
                format!("'{}' must be a relative path inside the manifest directory", readme),
            ));
        }
    }

    for entry in &package.classifiers {
        if !classifier::is_valid(entry) {
            return Err(DistError::validation(
                "package.classifiers",
                format!("unknown or malformed classifier '{}'", entry),
            ));
        }
    }

    for (field, values) in [("package.modules", &package.modules), ("package.scripts", &package.scripts)] {
        if values.iter().any(|v| v.trim().is_empty()) {
            return Err(DistError::validation(field, "entries must not be empty"));
        }
    }

    validate_dependency_table("dependencies", &manifest.dependencies)?;

    for (group, table) in &manifest.extras {
        if !is_valid_extra_name(group) {
            return Err(DistError::validation(
                "extras",
                format!("invalid extra group name '{}'", group),
            ));
        }
        validate_dependency_table(&format!("extras.{}", group), table)?;
    }

    Ok(())
}

/// Validate one dependency table: names and specifier strings
fn validate_dependency_table(
    field: &str,
    table: &IndexMap<String, String>,
) -> ManifestResult<()> {
    for (name, spec) in table {
        if !PackageMetadata::is_valid_name(name) {
            return Err(DistError::validation(
                field,
                format!("invalid dependency name '{}'", name),
            ));
        }
        SpecifierSet::parse(spec).map_err(|e| {
            DistError::validation(field, format!("dependency '{}': {}", name, e))
        })?;
    }
    Ok(())
}

/// Extra group names are short identifiers: letters, digits, '-', '_'
fn is_valid_extra_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
}

/// A minimal shape check, not full address validation
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !email.chars().any(char::is_whitespace)
        },
        None => false,
    }
}
