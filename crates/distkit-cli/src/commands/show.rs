//! `distkit show` command implementation.
//!
//! Prints a human-readable summary of the resolved metadata.

use super::CommandContext;
use distkit_core::error::DistResult;
use distkit_manifest::{load_from_file, resolve_metadata};

/// Execute the `distkit show` command
pub async fn execute(ctx: &CommandContext) -> DistResult<()> {
    let manifest_path = ctx.manifest_path()?;
    let manifest = load_from_file(&manifest_path).await?;

    let manifest_dir = manifest_path
        .parent()
        .unwrap_or(&ctx.cwd)
        .to_path_buf();
    let metadata = resolve_metadata(&manifest, &manifest_dir)?;

    let out = &ctx.output;
    out.field("name", &metadata.name);
    out.field("version", &metadata.version.to_string());
    if let Some(summary) = &metadata.summary {
        out.field("summary", summary);
    }
    if let Some(author) = &metadata.author {
        out.field("author", author);
    }
    if let Some(email) = &metadata.author_email {
        out.field("author-email", email);
    }
    if let Some(homepage) = &metadata.homepage {
        out.field("homepage", homepage);
    }
    if let Some(license) = &metadata.license {
        out.field("license", license);
    }
    if let Some(description) = &metadata.long_description {
        out.field(
            "long-description",
            &format!("{} bytes from {}", description.len(), manifest.package.readme.as_deref().unwrap_or("?")),
        );
    }

    if !metadata.requires.is_empty() {
        out.info("");
        out.info("Dependencies:");
        for requirement in &metadata.requires {
            out.info(&format!("  {}", requirement));
        }
    }

    for (group, requirements) in &metadata.extras {
        out.info("");
        out.info(&format!("Extra '{}':", group));
        for requirement in requirements {
            out.info(&format!("  {}", requirement));
        }
    }

    if !metadata.classifiers.is_empty() {
        out.info("");
        out.info("Classifiers:");
        for classifier in &metadata.classifiers {
            out.info(&format!("  {}", classifier));
        }
    }

    if !metadata.modules.is_empty() {
        out.field("modules", &metadata.modules.join(", "));
    }
    if !metadata.scripts.is_empty() {
        out.field("scripts", &metadata.scripts.join(", "));
    }

    Ok(())
}
