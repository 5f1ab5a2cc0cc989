//! Response generation for the version query endpoint.
//!
//! Both channel results are rendered into a single XML document served with
//! `Content-Type: application/xml`.
//!
//! # Example
//!
//! ```
//! use version_query::{VersionsDocument, find_latest};
//!
//! let document = VersionsDocument::new(
//!     find_latest(&["app-1.2.3-beta", "app-2.0.0-beta"]),
//!     find_latest::<&str>(&[]),
//! );
//! let text = document.to_string();
//!
//! assert!(text.contains(r#"path="app-2.0.0-beta""#));
//! assert!(text.contains("<stable/>"));
//! ```

pub mod xml;

pub use xml::{VersionsDocument, XML_CONTENT_TYPE, channel_element};
