//! Core types shared across the walker, hasher, and differ.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Content digest of a file's full byte stream.
///
/// Length depends on the algorithm that produced it (32 bytes for BLAKE3,
/// 16 bytes for MD5). Two digests only compare equal when both the
/// algorithm width and every byte agree.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Digest(Vec<u8>);

impl Digest {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Lowercase hex rendering
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

/// Mapping from a file's path relative to its tree root to its absolute path.
///
/// Ordered so that iteration, and therefore report output, is stable across runs.
pub type Snapshot = BTreeMap<PathBuf, PathBuf>;
