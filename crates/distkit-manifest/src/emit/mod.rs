//! Metadata document emission.
//!
//! The resolved metadata record is handed to the packaging tool as a
//! pretty-printed JSON document; versions and requirements appear in their
//! canonical string form and table order is preserved.

use crate::ManifestResult;
use distkit_core::error::DistError;
use distkit_core::types::PackageMetadata;

/// Serialize resolved metadata to a JSON metadata document
pub fn emit_metadata_json(metadata: &PackageMetadata) -> ManifestResult<String> {
    serde_json::to_string_pretty(metadata).map_err(|e| DistError::Emit {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use distkit_core::types::PackageMetadata;

    fn sample_metadata() -> PackageMetadata {
        let mut metadata =
            PackageMetadata::new("intheam".to_string(), "0.1".parse().unwrap());
        metadata.summary = Some("Wrapper around the inthe.am API".to_string());
        metadata.long_description = Some("intheam\n=======\n".to_string());
        metadata.license = Some("MIT".to_string());
        metadata.requires = vec![
            "schema>=0.3.1".parse().unwrap(),
            "aiohttp>=0.16.0".parse().unwrap(),
        ];
        metadata
            .extras
            .insert("cli".to_string(), vec!["click>=4.0.0".parse().unwrap()]);
        metadata
    }

    #[test]
    fn test_emit_uses_string_forms() {
        let document = emit_metadata_json(&sample_metadata()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&document).unwrap();

        assert_eq!(value["name"], "intheam");
        assert_eq!(value["version"], "0.1");
        assert_eq!(value["requires"][0], "schema>=0.3.1");
        assert_eq!(value["requires"][1], "aiohttp>=0.16.0");
        assert_eq!(value["extras"]["cli"][0], "click>=4.0.0");
    }

    #[test]
    fn test_emit_omits_unset_fields() {
        let metadata =
            PackageMetadata::new("bare".to_string(), "1.0".parse().unwrap());
        let document = emit_metadata_json(&metadata).unwrap();
        let value: serde_json::Value = serde_json::from_str(&document).unwrap();

        assert!(value.get("summary").is_none());
        assert!(value.get("long_description").is_none());
    }

    #[test]
    fn test_emitted_document_round_trips() {
        let metadata = sample_metadata();
        let document = emit_metadata_json(&metadata).unwrap();
        let parsed: PackageMetadata = serde_json::from_str(&document).unwrap();

        assert_eq!(parsed, metadata);
    }
}
