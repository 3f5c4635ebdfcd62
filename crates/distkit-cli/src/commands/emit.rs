//! `distkit emit` command implementation.
//!
//! Resolves the manifest (with overrides applied) and writes the JSON
//! metadata document to stdout or a file.

use super::CommandContext;
use distkit_core::error::{DistError, DistResult};
use distkit_core::types::PackageMetadata;
use distkit_manifest::{emit_metadata_json, load_from_file, resolve_metadata, Overrides};
use std::path::PathBuf;

/// Execute the `distkit emit` command
pub async fn execute(
    output_path: Option<PathBuf>,
    cli_overrides: Overrides,
    ctx: &CommandContext,
) -> DistResult<()> {
    let (metadata, document) = resolve_document(cli_overrides, ctx).await?;

    match output_path {
        Some(path) => {
            std::fs::write(&path, &document).map_err(|e| {
                DistError::io(format!("Failed to write {}", path.display()), e)
            })?;
            ctx.output.success(&format!(
                "Wrote metadata for {} {} to {}",
                metadata.name,
                metadata.version,
                path.display()
            ));
        },
        None => {
            // stdout carries the document and nothing else; all
            // diagnostics go to stderr
            println!("{}", document);
        },
    }

    Ok(())
}

/// Resolve the manifest with overrides applied and render the document
pub(super) async fn resolve_document(
    cli_overrides: Overrides,
    ctx: &CommandContext,
) -> DistResult<(PackageMetadata, String)> {
    let manifest_path = ctx.manifest_path()?;
    let mut manifest = load_from_file(&manifest_path).await?;

    // Environment first, CLI flags on top
    let overrides = Overrides::from_env().layered_under(cli_overrides);
    if !overrides.is_empty() {
        ctx.output.warn("metadata overrides are in effect");
        overrides.apply(&mut manifest)?;
    }

    let manifest_dir = manifest_path
        .parent()
        .unwrap_or(&ctx.cwd)
        .to_path_buf();
    let metadata = resolve_metadata(&manifest, &manifest_dir)?;
    let document = emit_metadata_json(&metadata)?;

    Ok((metadata, document))
}
