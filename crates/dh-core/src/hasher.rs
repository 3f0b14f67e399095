use std::hash::Hasher;

use xxhash_rust::xxh64::{xxh64, Xxh64};

/// Seed used by the default hashing path.
///
/// Stored fingerprints are only comparable against digests computed at
/// this seed; changing it invalidates every previously computed value.
pub const DEFAULT_SEED: u64 = 0;

/// Compute the XXH64 digest of a byte buffer at [`DEFAULT_SEED`].
///
/// Pure and deterministic: identical bytes always produce the identical
/// digest, across processes and platforms. The buffer is borrowed
/// immutably for the duration of the call and never retained. Empty
/// input is valid.
pub fn hash_bytes(data: &[u8]) -> u64 {
    xxh64(data, DEFAULT_SEED)
}

/// Compute the XXH64 digest of a byte buffer at an explicit seed.
///
/// A non-default seed decorrelates the output space from the default
/// path (multi-namespace hashing, hash-flooding resistance). Digests
/// computed at different seeds are not comparable with each other.
pub fn hash_bytes_seeded(data: &[u8], seed: u64) -> u64 {
    xxh64(data, seed)
}

/// Incremental XXH64 state for content that arrives in chunks.
///
/// Produces the same digest as hashing the concatenated input in a
/// single [`hash_bytes`] call, regardless of how the input is split.
#[derive(Clone)]
pub struct ContentHasher {
    state: Xxh64,
}

impl ContentHasher {
    /// Streaming hasher at [`DEFAULT_SEED`].
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: Xxh64::new(seed),
        }
    }

    /// Absorb the next chunk of input.
    pub fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    /// Digest of everything absorbed so far. Does not consume the state;
    /// further `update` calls continue from the same position.
    pub fn digest(&self) -> u64 {
        self.state.digest()
    }
}

impl Default for ContentHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for ContentHasher {
    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }

    fn finish(&self) -> u64 {
        self.digest()
    }
}
