//! Streaming content hashing for files

use crate::error::TreeError;
use crate::types::Digest;
use md5::Digest as _;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::trace;

/// Default read buffer size in bytes
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Digest algorithm used for content comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// BLAKE3, 256-bit
    #[default]
    Blake3,
    /// MD5, 128-bit
    Md5,
}

/// Incremental hasher state for one algorithm
enum StreamState {
    Blake3(Box<blake3::Hasher>),
    Md5(md5::Md5),
}

impl StreamState {
    fn new(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::Blake3 => StreamState::Blake3(Box::new(blake3::Hasher::new())),
            HashAlgorithm::Md5 => StreamState::Md5(md5::Md5::new()),
        }
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            StreamState::Blake3(hasher) => {
                hasher.update(data);
            }
            StreamState::Md5(hasher) => hasher.update(data),
        }
    }

    fn finalize(self) -> Digest {
        match self {
            StreamState::Blake3(hasher) => Digest::from_bytes(hasher.finalize().as_bytes().to_vec()),
            StreamState::Md5(hasher) => Digest::from_bytes(hasher.finalize().to_vec()),
        }
    }
}

/// Hashes file contents in fixed-size chunks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHasher {
    algorithm: HashAlgorithm,
    chunk_size: usize,
}

impl Default for FileHasher {
    fn default() -> Self {
        Self::new(HashAlgorithm::default())
    }
}

impl FileHasher {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Override the read buffer size. Zero is clamped to one byte.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Hash the full byte stream of the file at `path`.
    ///
    /// Memory use is bounded by the chunk size. The file handle is closed on
    /// every return path.
    pub fn hash_file(&self, path: &Path) -> Result<Digest, TreeError> {
        let file = File::open(path).map_err(|e| TreeError::from_io(path, e))?;
        let digest = self
            .hash_reader(file)
            .map_err(|e| TreeError::from_io(path, e))?;
        trace!(path = %path.display(), digest = %digest, "Computed content hash");
        Ok(digest)
    }

    /// Hash everything `reader` yields until EOF
    pub fn hash_reader<R: Read>(&self, mut reader: R) -> io::Result<Digest> {
        let mut state = StreamState::new(self.algorithm);
        let mut buffer = vec![0u8; self.chunk_size];
        loop {
            let read = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            state.update(&buffer[..read]);
        }
        Ok(state.finalize())
    }

    /// Hash an in-memory buffer
    pub fn hash_bytes(&self, data: &[u8]) -> Digest {
        let mut state = StreamState::new(self.algorithm);
        state.update(data);
        state.finalize()
    }
}
