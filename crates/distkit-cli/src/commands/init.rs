//! `distkit init` command implementation.
//!
//! Writes a starter dist.toml and a stub readme in the current directory.
//! An existing manifest is never overwritten.

use super::CommandContext;
use distkit_core::error::{DistError, DistResult};
use distkit_core::types::PackageMetadata;
use std::fs;

/// Execute the `distkit init` command
pub async fn execute(ctx: &CommandContext) -> DistResult<()> {
    let manifest_path = ctx.cwd.join(distkit_manifest::MANIFEST_FILE);

    if manifest_path.exists() {
        ctx.output
            .info("dist.toml already exists, skipping initialization");
        return Ok(());
    }

    let name = package_name_from_dir(ctx);
    ctx.output
        .info(&format!("Initializing manifest for '{}'", name));

    let manifest = starter_manifest(&name);
    fs::write(&manifest_path, manifest).map_err(|e| {
        DistError::io(format!("Failed to create {}", manifest_path), e)
    })?;
    ctx.output.success("Created dist.toml");

    let readme_path = ctx.cwd.join("README.rst");
    if !readme_path.exists() {
        let underline = "=".repeat(name.len());
        let readme = format!("{}\n{}\n\nDescribe your distribution here.\n", name, underline);
        fs::write(&readme_path, readme).map_err(|e| {
            DistError::io(format!("Failed to create {}", readme_path), e)
        })?;
        ctx.output.success("Created README.rst");
    }

    ctx.output.info("");
    ctx.output.info("Next steps:");
    ctx.output.info("  distkit check");
    ctx.output.info("  distkit emit");

    Ok(())
}

/// Derive a package name from the directory, falling back to a placeholder
fn package_name_from_dir(ctx: &CommandContext) -> String {
    match ctx.cwd.file_name() {
        Some(name) if PackageMetadata::is_valid_name(name) => name.to_string(),
        _ => "my-package".to_string(),
    }
}

fn starter_manifest(name: &str) -> String {
    format!(
        r#"[package]
name = "{}"
version = "0.1.0"
summary = ""
readme = "README.rst"
license = "MIT"

[dependencies]

[extras]
"#,
        name
    )
}
