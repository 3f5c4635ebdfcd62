//! `distkit check` command implementation.
//!
//! Loads, validates, and fully resolves the manifest, which proves the
//! readme exists and is valid UTF-8.

use super::CommandContext;
use distkit_core::error::DistResult;
use distkit_manifest::{load_from_file, resolve_metadata};

/// Execute the `distkit check` command
pub async fn execute(ctx: &CommandContext) -> DistResult<()> {
    let manifest_path = ctx.manifest_path()?;
    ctx.output.info(&format!("Checking {}", manifest_path));

    let manifest = load_from_file(&manifest_path).await?;

    let manifest_dir = manifest_path
        .parent()
        .unwrap_or(&ctx.cwd)
        .to_path_buf();
    let metadata = resolve_metadata(&manifest, &manifest_dir)?;

    ctx.output.success(&format!(
        "{} {} is valid ({} dependencies, {} extras)",
        metadata.name,
        metadata.version,
        metadata.requires.len(),
        metadata.extras.len()
    ));

    Ok(())
}
