//! Classifier string validation.
//!
//! Classifiers are ` :: `-separated trove strings whose first segment must
//! name a known group, e.g. `Development Status :: 4 - Beta`.

use once_cell::sync::Lazy;
use std::collections::BTreeSet;

/// Groups a classifier may start with
static KNOWN_GROUPS: Lazy<BTreeSet<&'static str>> = Lazy::new(|| {
    BTreeSet::from([
        "Development Status",
        "Environment",
        "Framework",
        "Intended Audience",
        "License",
        "Natural Language",
        "Operating System",
        "Programming Language",
        "Topic",
        "Typing",
    ])
});

/// Extract the group (first ` :: ` segment) of a classifier
pub fn group(classifier: &str) -> Option<&str> {
    classifier.split(" :: ").next().map(str::trim)
}

/// Check if a classifier is well-formed and uses a known group
pub fn is_valid(classifier: &str) -> bool {
    let segments: Vec<&str> = classifier.split(" :: ").collect();
    if segments.len() < 2 {
        return false;
    }
    if segments.iter().any(|s| s.trim().is_empty()) {
        return false;
    }
    KNOWN_GROUPS.contains(segments[0].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_classifiers() {
        assert!(is_valid("Development Status :: 4 - Beta"));
        assert!(is_valid("Intended Audience :: Developers"));
        assert!(is_valid("Programming Language :: Python :: 3.4"));
        assert!(is_valid("Operating System :: OS Independent"));
    }

    #[test]
    fn test_invalid_classifiers() {
        assert!(!is_valid(""));
        assert!(!is_valid("Programming Language"));
        assert!(!is_valid("Unknown Group :: Something"));
        assert!(!is_valid("Topic :: "));
    }

    #[test]
    fn test_group_extraction() {
        assert_eq!(
            group("Development Status :: 4 - Beta"),
            Some("Development Status")
        );
        assert_eq!(group("Topic"), Some("Topic"));
    }
}
