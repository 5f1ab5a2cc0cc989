//! Static directory listing.
//!
//! The directory is re-read on every call; nothing is cached.

use crate::error::ListingError;
use crate::versions::BuildType;
use std::fs;
use std::path::Path;

/// List entry names in `dir` that contain `marker`.
///
/// Matching is a case-sensitive substring test on the entry name. Names are
/// returned in directory iteration order. Entries whose names are not valid
/// UTF-8 are skipped.
///
/// # Errors
///
/// Returns `ListingError` if the directory cannot be opened or iterated.
pub fn find_versions(dir: &Path, marker: &str) -> Result<Vec<String>, ListingError> {
    let entries = fs::read_dir(dir).map_err(|source| ListingError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut matches = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ListingError::ReadEntry {
            path: dir.to_path_buf(),
            source,
        })?;

        match entry.file_name().into_string() {
            Ok(name) if name.contains(marker) => matches.push(name),
            Ok(_) => {}
            Err(name) => {
                tracing::warn!("Skipping non UTF-8 entry {:?} in {}", name, dir.display());
            }
        }
    }

    Ok(matches)
}

/// List entry names in `dir` belonging to a release channel.
///
/// # Errors
///
/// Returns `ListingError` if the directory cannot be opened or iterated.
pub fn find_channel(dir: &Path, build_type: BuildType) -> Result<Vec<String>, ListingError> {
    find_versions(dir, build_type.marker())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn create_static_dir(names: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in names {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        dir
    }

    #[test]
    fn test_find_versions_filters_by_marker() {
        let dir = create_static_dir(&["x.beta.txt", "y.release.txt"]);
        let found = find_versions(dir.path(), "beta").unwrap();
        assert_eq!(found, vec!["x.beta.txt".to_string()]);
    }

    #[test]
    fn test_find_versions_is_case_sensitive() {
        let dir = create_static_dir(&["app-1.0.0-BETA.zip", "app-1.0.1-beta.zip"]);
        let found = find_versions(dir.path(), "beta").unwrap();
        assert_eq!(found, vec!["app-1.0.1-beta.zip".to_string()]);
    }

    #[test]
    fn test_find_versions_returns_all_matches() {
        let dir = create_static_dir(&["a.1.release", "b.2.release", "c.3.beta"]);
        let mut found = find_channel(dir.path(), BuildType::Release).unwrap();
        found.sort();
        assert_eq!(found, vec!["a.1.release", "b.2.release"]);
    }

    #[test]
    fn test_find_versions_includes_directories() {
        let dir = create_static_dir(&[]);
        fs::create_dir(dir.path().join("app-2.0-beta")).unwrap();
        let found = find_channel(dir.path(), BuildType::Beta).unwrap();
        assert_eq!(found, vec!["app-2.0-beta".to_string()]);
    }

    #[test]
    fn test_find_versions_empty_directory() {
        let dir = create_static_dir(&[]);
        assert!(find_versions(dir.path(), "beta").unwrap().is_empty());
    }

    #[test]
    fn test_find_versions_missing_directory() {
        let dir = create_static_dir(&[]);
        let missing = dir.path().join("static");
        let err = find_versions(&missing, "beta").unwrap_err();
        assert!(matches!(err, ListingError::ReadDir { ref path, .. } if *path == missing));
    }
}
