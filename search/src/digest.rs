//! Canonical hashing and canonical JSON bytes.
//!
//! Exactly one place produces digests for this workspace. Every digest is
//! `sha256(domain_prefix || data)` rendered as `"sha256:<hex>"`.
//!
//! Canonical JSON is compact with lexicographically sorted object keys.
//! `serde_json` without `preserve_order` stores objects in a `BTreeMap`, so
//! sorting comes from the map itself; only integer numbers are accepted.

use sha2::{Digest, Sha256};
use thiserror::Error;

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`).
///
/// Only [`canonical_hash`] constructs values, so the algorithm and digest
/// parts are always non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
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

    /// The full string representation.
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

/// Typed domain separator for [`canonical_hash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashDomain {
    /// Sorted set of accepted solutions.
    SolutionSet,
    /// Canonical bytes of a [`crate::report::SearchReportV1`].
    SearchReport,
}

impl HashDomain {
    /// The raw null-terminated prefix bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &'static [u8] {
        match self {
            Self::SolutionSet => b"COMBSEARCH::SOLUTION_SET::V1\0",
            Self::SearchReport => b"COMBSEARCH::SEARCH_REPORT::V1\0",
        }
    }

    /// All domains in declaration order.
    pub const ALL: &[HashDomain] = &[Self::SolutionSet, Self::SearchReport];
}

/// Compute `sha256(domain || data)`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    let hex_digest = hex::encode(hasher.finalize());
    ContentHash {
        colon: "sha256".len(),
        full: format!("sha256:{hex_digest}"),
    }
}

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanonError {
    /// A JSON number was not an integer.
    #[error("non-integer number in canonical JSON: {raw}")]
    NonIntegerNumber { raw: String },
    /// `serde_json` refused to serialize the value.
    #[error("canonical JSON serialization failed: {detail}")]
    Serialize { detail: String },
}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is a float.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    reject_floats(value)?;
    serde_json::to_vec(value).map_err(|e| CanonError::Serialize {
        detail: e.to_string(),
    })
}

fn reject_floats(value: &serde_json::Value) -> Result<(), CanonError> {
    match value {
        serde_json::Value::Number(n) if n.is_f64() => Err(CanonError::NonIntegerNumber {
            raw: n.to_string(),
        }),
        serde_json::Value::Array(items) => items.iter().try_for_each(reject_floats),
        serde_json::Value::Object(map) => map.values().try_for_each(reject_floats),
        _ => Ok(()),
    }
}

/// Digest of a solution set, independent of discovery order.
///
/// Solutions are encoded, canonicalized, sorted by their canonical bytes and
/// hashed as one JSON array. Two searches that accept the same set of
/// solutions produce the same digest.
///
/// # Errors
///
/// Returns [`CanonError`] if an encoded solution contains a float.
pub fn solution_set_digest<T>(
    solutions: &[T],
    encode: impl Fn(&T) -> serde_json::Value,
) -> Result<ContentHash, CanonError> {
    let mut encoded = solutions
        .iter()
        .map(|s| canonical_json_bytes(&encode(s)))
        .collect::<Result<Vec<_>, _>>()?;
    encoded.sort();

    let mut data = Vec::with_capacity(encoded.iter().map(|e| e.len() + 1).sum::<usize>() + 2);
    data.push(b'[');
    for (i, bytes) in encoded.iter().enumerate() {
        if i > 0 {
            data.push(b',');
        }
        data.extend_from_slice(bytes);
    }
    data.push(b']');
    Ok(canonical_hash(HashDomain::SolutionSet, &data))
}
