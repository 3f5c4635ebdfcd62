//! Unit tests for CLI commands.

use super::*;
use camino::Utf8PathBuf;
use std::fs;
use tempfile::TempDir;

const MANIFEST: &str = r#"
[package]
name = "intheam"
version = "0.1"
summary = "Wrapper around the inthe.am API"
readme = "README.rst"
license = "MIT"

[dependencies]
schema = ">=0.3.1"
aiohttp = ">=0.16.0"

[extras.cli]
click = ">=4.0.0"
"#;

fn test_context(temp_dir: &TempDir) -> CommandContext {
    CommandContext {
        cwd: Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap(),
        output: crate::output::OutputHandler::new(),
    }
}

#[tokio::test]
async fn test_init_creates_manifest_and_readme() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = test_context(&temp_dir);

    init::execute(&ctx).await.unwrap();

    assert!(temp_dir.path().join("dist.toml").exists());
    assert!(temp_dir.path().join("README.rst").exists());

    // The starter manifest must itself pass a full check
    check::execute(&ctx).await.unwrap();
}

#[tokio::test]
async fn test_init_keeps_existing_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = test_context(&temp_dir);

    fs::write(temp_dir.path().join("dist.toml"), "existing content").unwrap();

    init::execute(&ctx).await.unwrap();

    let content = fs::read_to_string(temp_dir.path().join("dist.toml")).unwrap();
    assert_eq!(content, "existing content");
}

#[tokio::test]
async fn test_check_valid_project() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = test_context(&temp_dir);

    fs::write(temp_dir.path().join("dist.toml"), MANIFEST).unwrap();
    fs::write(temp_dir.path().join("README.rst"), "intheam\n=======\n").unwrap();

    check::execute(&ctx).await.unwrap();
}

#[tokio::test]
async fn test_check_fails_without_readme_file() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = test_context(&temp_dir);

    fs::write(temp_dir.path().join("dist.toml"), MANIFEST).unwrap();

    let err = check::execute(&ctx).await.unwrap_err();
    assert!(matches!(
        err,
        distkit_core::error::DistError::FileNotFound { .. }
    ));
}

#[tokio::test]
async fn test_show_valid_project() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = test_context(&temp_dir);

    fs::write(temp_dir.path().join("dist.toml"), MANIFEST).unwrap();
    fs::write(temp_dir.path().join("README.rst"), "intheam\n=======\n").unwrap();

    show::execute(&ctx).await.unwrap();
}

#[tokio::test]
async fn test_emit_writes_document() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = test_context(&temp_dir);

    fs::write(temp_dir.path().join("dist.toml"), MANIFEST).unwrap();
    fs::write(temp_dir.path().join("README.rst"), "intheam\n=======\n").unwrap();

    let out_path = temp_dir.path().join("metadata.json");
    emit::execute(Some(out_path.clone()), Overrides::default(), &ctx)
        .await
        .unwrap();

    let document = fs::read_to_string(&out_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&document).unwrap();

    assert_eq!(value["name"], "intheam");
    assert_eq!(value["version"], "0.1");
    assert_eq!(value["requires"].as_array().unwrap().len(), 2);
    assert_eq!(value["extras"]["cli"].as_array().unwrap().len(), 1);
    assert_eq!(value["long_description"], "intheam\n=======\n");
}

#[tokio::test]
async fn test_emit_applies_cli_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = test_context(&temp_dir);

    fs::write(temp_dir.path().join("dist.toml"), MANIFEST).unwrap();
    fs::write(temp_dir.path().join("README.rst"), "intheam\n=======\n").unwrap();

    let out_path = temp_dir.path().join("metadata.json");
    let overrides = Overrides {
        version: Some("0.2".to_string()),
        ..Default::default()
    };
    emit::execute(Some(out_path.clone()), overrides, &ctx)
        .await
        .unwrap();

    let document = fs::read_to_string(&out_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&document).unwrap();
    assert_eq!(value["version"], "0.2");
}

#[tokio::test]
async fn test_emit_stdout_document_is_parseable_with_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = test_context(&temp_dir);

    fs::write(temp_dir.path().join("dist.toml"), MANIFEST).unwrap();
    fs::write(temp_dir.path().join("README.rst"), "intheam\n=======\n").unwrap();

    let overrides = Overrides {
        version: Some("0.2".to_string()),
        ..Default::default()
    };

    // The string printed to stdout must be the JSON document and nothing
    // else, so a packaging tool can pipe it even while overrides warn on
    // stderr.
    let (_, document) = emit::resolve_document(overrides, &ctx).await.unwrap();

    let value: serde_json::Value = serde_json::from_str(&document).unwrap();
    assert_eq!(value["version"], "0.2");
    assert!(document.trim_start().starts_with('{'));
    assert!(document.trim_end().ends_with('}'));
}

#[tokio::test]
async fn test_manifest_path_reports_missing_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = test_context(&temp_dir);

    assert!(ctx.manifest_path().is_err());
}
