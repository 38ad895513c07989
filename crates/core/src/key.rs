//! Canonical storage keys
//!
//! Caller keys are normalized by removing every whitespace character before
//! they touch a backend. Keys that differ only by whitespace therefore
//! address the same entry.
//!
//! # Examples
//!
//! ```
//! use stash_core::key::{normalize, CanonicalKey};
//!
//! assert_eq!(normalize(" aa  b c").as_str(), "aabc");
//! assert_eq!(CanonicalKey::new("user:1"), normalize("user : 1"));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between namespace segments
pub const NAMESPACE_SEPARATOR: char = ':';

/// Whitespace-stripped key used for every backend operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Normalize a caller-supplied key
    pub fn new(key: &str) -> Self {
        normalize(key)
    }

    /// Wrap a string read back from a backend
    ///
    /// Backend enumeration returns keys exactly as stored, which may include
    /// foreign keys that were never normalized.
    pub fn from_stored(key: String) -> Self {
        CanonicalKey(key)
    }

    /// Borrow the key text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the key text
    pub fn into_string(self) -> String {
        self.0
    }

    /// Check whether this key sits under a colon-terminated namespace prefix
    pub fn is_in_namespace(&self, prefix: &NamespacePrefix) -> bool {
        self.0.starts_with(prefix.as_str())
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CanonicalKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CanonicalKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Strip every whitespace character from a key
pub fn normalize(key: &str) -> CanonicalKey {
    CanonicalKey(key.chars().filter(|c| !c.is_whitespace()).collect())
}

/// A namespace prefix, always terminated by [`NAMESPACE_SEPARATOR`]
///
/// The trailing colon keeps sibling namespaces apart: `ns:sub1:` never
/// matches `ns:sub11:x`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespacePrefix(String);

impl NamespacePrefix {
    /// Normalize a caller prefix and append the separator if missing
    pub fn new(prefix: &str) -> Self {
        let mut text = normalize(prefix).into_string();
        if !text.ends_with(NAMESPACE_SEPARATOR) {
            text.push(NAMESPACE_SEPARATOR);
        }
        NamespacePrefix(text)
    }

    /// Borrow the colon-terminated prefix
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NamespacePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
