//! Content hashing with domain separation.
//!
//! Algorithm: SHA-256. Every digest is computed over
//! `domain_prefix || data`, where each prefix is null-terminated, so equal
//! bytes hashed under different domains never collide.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Domain prefix for [`crate::result::SearchResult`] canonical bytes.
pub const DOMAIN_SEARCH_RESULT: &[u8] = b"LODESTAR::SEARCH_RESULT::V1\0";

/// Domain prefix for [`crate::policy::SearchPolicy`] canonical bytes.
pub const DOMAIN_SEARCH_POLICY: &[u8] = b"LODESTAR::SEARCH_POLICY::V1\0";

/// Domain prefix for harness run reports.
pub const DOMAIN_RUN_REPORT: &[u8] = b"LODESTAR::RUN_REPORT::V1\0";

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`)
///
/// Invariant: the inner string always contains a `:` separator with
/// non-empty substrings on both sides (enforced by [`ContentHash::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the format is invalid (missing colon,
    /// empty algorithm, or empty digest).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    /// The algorithm portion (e.g., "sha256").
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    /// The full string representation (`"algorithm:hex_digest"`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

impl TryFrom<String> for ContentHash {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("malformed content hash: {value:?}"))
    }
}

impl From<ContentHash> for String {
    fn from(value: ContentHash) -> Self {
        value.full
    }
}

/// Compute the canonical hash of a byte slice with domain separation.
///
/// Result format: `"sha256:<hex_digest>"`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let hex_digest = hex::encode(hasher.finalize());
    let colon = "sha256".len();
    ContentHash {
        full: format!("sha256:{hex_digest}"),
        colon,
    }
}
