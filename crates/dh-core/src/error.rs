/// Errors from dh-core operations.
///
/// Hashing itself never fails on any byte content; the only failure mode
/// is input that cannot be interpreted as a byte sequence in the first
/// place (wrong element type at a host boundary, malformed hex text).
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    #[error("input is not representable as a byte sequence: {reason}")]
    InvalidInput { reason: String },
}

impl HashError {
    pub fn is_retryable(&self) -> bool {
        false
    }
}
