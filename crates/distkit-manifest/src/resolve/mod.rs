//! Manifest resolution into a complete metadata record.
//!
//! Resolution is the step that turns a validated `DistToml` plus its
//! directory into the flat `PackageMetadata` a packaging tool consumes:
//! specifier strings become typed requirements and the readme file is
//! inlined verbatim as the long description.

use crate::toml::DistToml;
use crate::ManifestResult;
use distkit_core::error::DistError;
use distkit_core::types::{PackageMetadata, Requirement, SpecifierSet};
use distkit_core::utils::fs::file_contents;
use indexmap::IndexMap;

/// Resolve a manifest into metadata, reading the readme from `manifest_dir`
pub fn resolve_metadata(
    manifest: &DistToml,
    manifest_dir: &camino::Utf8Path,
) -> ManifestResult<PackageMetadata> {
    let package = &manifest.package;

    let requires = requirements_from_table("dependencies", &manifest.dependencies)?;

    let mut extras = IndexMap::new();
    for (group, table) in &manifest.extras {
        let field = format!("extras.{}", group);
        extras.insert(group.clone(), requirements_from_table(&field, table)?);
    }

    // The long description is the readme's exact text; a missing or
    // non-UTF-8 file aborts resolution.
    let long_description = match &package.readme {
        Some(readme) => Some(file_contents(manifest_dir.as_std_path(), &[readme.as_str()])?),
        None => None,
    };

    let mut metadata = PackageMetadata::new(package.name.clone(), package.version.clone());
    metadata.summary = package.summary.clone();
    metadata.long_description = long_description;
    metadata.author = package.author.clone();
    metadata.author_email = package.author_email.clone();
    metadata.homepage = package.homepage.clone();
    metadata.license = package.license.clone();
    metadata.requires = requires;
    metadata.extras = extras;
    metadata.classifiers = package.classifiers.clone();
    metadata.modules = package.modules.clone();
    metadata.scripts = package.scripts.clone();

    tracing::debug!(
        name = %metadata.name,
        requires = metadata.requires.len(),
        extras = metadata.extras.len(),
        "resolved manifest"
    );

    Ok(metadata)
}

/// Turn one name-to-specifier table into ordered requirements
fn requirements_from_table(
    field: &str,
    table: &IndexMap<String, String>,
) -> ManifestResult<Vec<Requirement>> {
    let mut requirements = Vec::with_capacity(table.len());

    for (name, spec) in table {
        let specifiers = SpecifierSet::parse(spec).map_err(|e| {
            DistError::validation(field, format!("dependency '{}': {}", name, e))
        })?;
        let requirement = Requirement::new(name.clone(), specifiers).map_err(|e| {
            DistError::validation(field, e.to_string())
        })?;
        requirements.push(requirement);
    }

    Ok(requirements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toml::parse_dist_toml;
    use camino::Utf8PathBuf;
    use std::io::Write;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"
[package]
name = "intheam"
version = "0.1"
summary = "Wrapper around the inthe.am API"
readme = "README.rst"
author = "Adrián Pérez de Castro"
author-email = "adrian@perezdecastro.org"
license = "MIT"

[dependencies]
schema = ">=0.3.1"
aiohttp = ">=0.16.0"

[extras.cli]
click = ">=4.0.0"
"#;

    const README: &str = "intheam\n=======\n\nWrapper around the inthe.am API.\n";

    fn manifest_dir() -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_resolve_counts_dependencies_and_extras() {
        let (_guard, dir) = manifest_dir();
        std::fs::write(dir.join("README.rst"), README).unwrap();

        let manifest = parse_dist_toml(MANIFEST).unwrap();
        let metadata = resolve_metadata(&manifest, &dir).unwrap();

        // Exactly two mandatory requirements, one extras group of one
        assert_eq!(metadata.requires.len(), 2);
        assert_eq!(metadata.extras.len(), 1);
        assert_eq!(metadata.extra("cli").unwrap().len(), 1);

        assert_eq!(metadata.requires[0].to_string(), "schema>=0.3.1");
        assert_eq!(metadata.requires[1].to_string(), "aiohttp>=0.16.0");
        assert_eq!(metadata.extra("cli").unwrap()[0].to_string(), "click>=4.0.0");
    }

    #[test]
    fn test_long_description_is_byte_exact() {
        let (_guard, dir) = manifest_dir();
        std::fs::write(dir.join("README.rst"), README).unwrap();

        let manifest = parse_dist_toml(MANIFEST).unwrap();
        let metadata = resolve_metadata(&manifest, &dir).unwrap();

        assert_eq!(metadata.long_description.as_deref(), Some(README));
    }

    #[test]
    fn test_missing_readme_aborts_resolution() {
        let (_guard, dir) = manifest_dir();

        let manifest = parse_dist_toml(MANIFEST).unwrap();
        let err = resolve_metadata(&manifest, &dir).unwrap_err();

        assert!(matches!(err, DistError::FileNotFound { .. }));
    }

    #[test]
    fn test_non_utf8_readme_aborts_resolution() {
        let (_guard, dir) = manifest_dir();
        let mut file = std::fs::File::create(dir.join("README.rst")).unwrap();
        file.write_all(&[0xc3, 0x28, 0xa0, 0xa1]).unwrap();

        let manifest = parse_dist_toml(MANIFEST).unwrap();
        let err = resolve_metadata(&manifest, &dir).unwrap_err();

        assert!(matches!(err, DistError::NonUtf8 { .. }));
    }

    #[test]
    fn test_manifest_without_readme_has_no_description() {
        let (_guard, dir) = manifest_dir();

        let toml = r#"
[package]
name = "bare"
version = "1.0"
"#;
        let manifest = parse_dist_toml(toml).unwrap();
        let metadata = resolve_metadata(&manifest, &dir).unwrap();

        assert!(metadata.long_description.is_none());
        assert!(metadata.requires.is_empty());
    }
}
