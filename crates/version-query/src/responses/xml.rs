//! XML response generation for the version query endpoint.
//!
//! Format: an XML declaration and a `<versions>` root holding one empty
//! element per channel, `<beta>` and `<stable>`. Version segments and the
//! file path are carried as attributes:
//!
//! ```text
//! <beta major="1" minor="2" patch="3" build="0" path="Tailviewer.1.2.3.beta.exe"/>
//! ```
//!
//! Update clients prefix `path` with their download server.

use crate::versions::{BuildType, LatestVersion};
use std::fmt;

/// Content type of rendered documents.
pub const XML_CONTENT_TYPE: &str = "application/xml";

/// Attribute names for the leading version segments, in order.
const SEGMENT_ATTRIBUTES: [&str; 3] = ["major", "minor", "patch"];

/// Build number reported for every file.
const BUILD_NUMBER: &str = "0";

/// Element name of a channel in the document.
#[must_use]
pub const fn channel_element(build_type: BuildType) -> &'static str {
    match build_type {
        BuildType::Beta => "beta",
        BuildType::Release => "stable",
    }
}

/// Versions document builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionsDocument {
    /// Latest beta result
    beta: LatestVersion,
    /// Latest release result
    release: LatestVersion,
}

impl VersionsDocument {
    /// Create a document from both channel results.
    #[must_use]
    pub const fn new(beta: LatestVersion, release: LatestVersion) -> Self {
        Self { beta, release }
    }

    /// Get the result for a channel.
    #[must_use]
    pub const fn channel(&self, build_type: BuildType) -> &LatestVersion {
        match build_type {
            BuildType::Beta => &self.beta,
            BuildType::Release => &self.release,
        }
    }
}

impl fmt::Display for VersionsDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(f, "<versions>")?;
        for build_type in BuildType::ALL {
            write_channel(f, channel_element(build_type), self.channel(build_type))?;
        }
        writeln!(f, "</versions>")
    }
}

/// Write one channel element. An empty result has no attributes.
fn write_channel(f: &mut fmt::Formatter<'_>, tag: &str, latest: &LatestVersion) -> fmt::Result {
    let Some(path) = latest.file_name() else {
        return writeln!(f, "  <{tag}/>");
    };

    write!(f, "  <{tag}")?;
    for (name, value) in SEGMENT_ATTRIBUTES.iter().zip(latest.segments()) {
        write!(f, r#" {name}="{}""#, Escaped(value))?;
    }
    writeln!(f, r#" build="{BUILD_NUMBER}" path="{}"/>"#, Escaped(path))
}

/// Escapes XML special characters in text and attribute values.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(pos) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..pos])?;
            let entity = match rest.as_bytes()[pos] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&apos;",
            };
            f.write_str(entity)?;
            rest = &rest[pos + 1..];
        }
        f.write_str(rest)
    }
}
