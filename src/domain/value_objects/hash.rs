//! Content Hash Value Object
//!
//! A SHA-256 digest of emitted content. Used for `[hash]` file name
//! placeholders and for reporting the assembled document's fingerprint,
//! which makes byte-reproducibility checkable across runs.

use std::fmt;

use sha2::{Digest, Sha256};

/// Content hash value object
///
/// Wraps a lowercase hex SHA-256 digest with the `sha256:` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Prefix for SHA-256 hashes
    pub const PREFIX: &'static str = "sha256:";

    /// Length of the short form used in file names
    pub const SHORT_LEN: usize = 8;

    /// Create a ContentHash by computing SHA-256 of content
    pub fn from_content(content: &str) -> Self {
        let digest = Sha256::digest(content.as_bytes());
        Self(format!("{}{:x}", Self::PREFIX, digest))
    }

    /// Get the full hash string with prefix
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get just the hex part without prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }

    /// First eight hex digits, as substituted for `[hash]`
    pub fn short(&self) -> &str {
        let hex = self.hex();
        &hex[..Self::SHORT_LEN.min(hex.len())]
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
