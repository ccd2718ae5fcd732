//! Filesystem tree access
//!
//! Walking a root into a path-keyed snapshot and hashing file contents.

pub mod hasher;
pub mod path;
pub mod walker;

pub use hasher::{FileHasher, HashAlgorithm, DEFAULT_CHUNK_SIZE};
pub use walker::{Walker, WalkerConfig};
