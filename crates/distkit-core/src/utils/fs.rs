//! Strict UTF-8 file reads relative to a base directory.

use crate::error::{DistError, DistResult};
use crate::utils::path::safe_join;
use std::path::{Path, PathBuf};

/// Read a file's full text, addressed by path segments relative to `base`.
///
/// The segments are joined onto `base` (rejecting traversal) and the file is
/// read as UTF-8. Returns the exact text of the file; a missing file or
/// non-UTF-8 content is an error, never an empty substitute.
pub fn file_contents(base: &Path, segments: &[&str]) -> DistResult<String> {
    let relative: PathBuf = segments.iter().collect();
    let path = safe_join(base, &relative)?;

    let bytes = std::fs::read(&path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DistError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            DistError::io(format!("Failed to read {}", path.display()), e)
        }
    })?;

    String::from_utf8(bytes).map_err(|_| DistError::NonUtf8 {
        path: path.display().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_reads_exact_contents() {
        let dir = TempDir::new().unwrap();
        let text = "intheam\n=======\n\nWrapper around the inthe.am API.\n";
        std::fs::write(dir.path().join("README.rst"), text).unwrap();

        let read = file_contents(dir.path(), &["README.rst"]).unwrap();
        assert_eq!(read, text);
    }

    #[test]
    fn test_joins_multiple_segments() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("docs")).unwrap();
        std::fs::write(dir.path().join("docs").join("intro.rst"), "hello").unwrap();

        let read = file_contents(dir.path(), &["docs", "intro.rst"]).unwrap();
        assert_eq!(read, "hello");
    }

    #[test]
    fn test_missing_file_is_distinct_error() {
        let dir = TempDir::new().unwrap();
        let err = file_contents(dir.path(), &["README.rst"]).unwrap_err();
        assert!(matches!(err, DistError::FileNotFound { .. }));
    }

    #[test]
    fn test_non_utf8_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("README.rst");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&[0x66, 0x6f, 0xff, 0xfe, 0x6f]).unwrap();

        let err = file_contents(dir.path(), &["README.rst"]).unwrap_err();
        assert!(matches!(err, DistError::NonUtf8 { .. }));
    }

    #[test]
    fn test_traversal_is_rejected() {
        let dir = TempDir::new().unwrap();
        let err = file_contents(dir.path(), &["..", "README.rst"]).unwrap_err();
        assert!(matches!(err, DistError::PathEscape { .. }));
    }
}
