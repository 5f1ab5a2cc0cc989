//! Latest version selection.
//!
//! File names are compared as plain strings, so `app-10.0` sorts below
//! `app-9.0`. No attempt is made to parse the embedded version numerically.

use std::fmt;

/// Maximum number of leading `.`-separated segments kept from the top file name.
pub const MAX_SEGMENTS: usize = 3;

/// Release channel, identified by a marker substring in the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildType {
    /// Files containing `beta`
    Beta,
    /// Files containing `release`
    Release,
}

impl BuildType {
    /// All channels, in the order they appear in responses.
    pub const ALL: [Self; 2] = [Self::Beta, Self::Release];

    /// Substring that marks a file as belonging to this channel.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Beta => "beta",
            Self::Release => "release",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// Result of selecting the latest file of a channel.
///
/// Holds up to [`MAX_SEGMENTS`] leading segments of the selected file name
/// followed by the full file name. Empty when no file matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatestVersion(Vec<String>);

impl LatestVersion {
    /// Build the result for a selected file name.
    #[must_use]
    pub fn from_file_name(file_name: &str) -> Self {
        let mut parts: Vec<String> = file_name
            .split('.')
            .take(MAX_SEGMENTS)
            .map(str::to_string)
            .collect();
        parts.push(file_name.to_string());
        Self(parts)
    }

    /// True when no file matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of elements, segments plus the trailing file name.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Leading version segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        match self.0.split_last() {
            Some((_, segments)) => segments,
            None => &[],
        }
    }

    /// Full name of the selected file.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// The whole sequence.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consume into the underlying sequence.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// Select the latest file name and split it into the result sequence.
///
/// The latest file is the lexically greatest name. An empty input yields an
/// empty result.
#[must_use]
pub fn find_latest<S: AsRef<str>>(files: &[S]) -> LatestVersion {
    files
        .iter()
        .map(AsRef::as_ref)
        .max()
        .map(LatestVersion::from_file_name)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_find_latest_picks_lexical_maximum() {
        let latest = find_latest(&["app-1.2.3-beta", "app-2.0.0-beta"]);
        assert_eq!(
            latest.as_slice(),
            ["app-2", "0", "0-beta", "app-2.0.0-beta"]
        );
    }

    #[test]
    fn test_find_latest_empty() {
        let files: [&str; 0] = [];
        let latest = find_latest(&files);
        assert!(latest.is_empty());
        assert_eq!(latest.file_name(), None);
        assert!(latest.segments().is_empty());
    }

    #[test]
    fn test_find_latest_truncates_segments() {
        let latest = find_latest(&["app.1.2.3.4.release.zip"]);
        assert_eq!(
            latest.into_vec(),
            vec!["app", "1", "2", "app.1.2.3.4.release.zip"]
        );
    }

    #[test]
    fn test_find_latest_short_name() {
        let latest = find_latest(&["beta"]);
        assert_eq!(latest.as_slice(), ["beta", "beta"]);
        assert_eq!(latest.segments(), ["beta"]);
        assert_eq!(latest.file_name(), Some("beta"));
    }

    #[test]
    fn test_find_latest_is_lexical_not_numeric() {
        let latest = find_latest(&["app-10.0.0-beta", "app-9.0.0-beta"]);
        assert_eq!(latest.file_name(), Some("app-9.0.0-beta"));
    }

    #[test]
    fn test_find_latest_accepts_owned_strings() {
        let files = vec!["b.1.release".to_string(), "a.2.release".to_string()];
        let latest = find_latest(&files);
        assert_eq!(latest.as_slice(), ["b", "1", "release", "b.1.release"]);
    }

    #[test]
    fn test_build_type_markers() {
        assert_eq!(BuildType::Beta.marker(), "beta");
        assert_eq!(BuildType::Release.to_string(), "release");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn file_name() -> impl Strategy<Value = String> {
            "[a-z0-9.-]{0,24}"
        }

        proptest! {
            /// The trailing element is always the lexically greatest input
            #[test]
            fn last_element_is_maximum(files in prop::collection::vec(file_name(), 1..20)) {
                let latest = find_latest(&files);
                let max = files.iter().max().cloned();
                prop_assert_eq!(latest.file_name().map(str::to_string), max);
            }

            /// Leading elements are the truncated split of the selected name
            #[test]
            fn segments_are_truncated_split(files in prop::collection::vec(file_name(), 1..20)) {
                let latest = find_latest(&files);
                let top = latest.file_name().unwrap_or_default().to_string();
                let expected: Vec<&str> = top.split('.').take(MAX_SEGMENTS).collect();

                prop_assert_eq!(latest.segments(), expected.as_slice());
                prop_assert!(latest.len() <= MAX_SEGMENTS + 1);
                prop_assert_eq!(latest.len(), expected.len() + 1);
            }
        }
    }
}
