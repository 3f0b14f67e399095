mod error;
mod fingerprint;
mod hasher;

pub use error::HashError;
pub use fingerprint::Fingerprint;
pub use hasher::{hash_bytes, hash_bytes_seeded, ContentHasher, DEFAULT_SEED};
