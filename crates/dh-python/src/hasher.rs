use std::borrow::Cow;

use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;

use dh_core::{ContentHasher, Fingerprint, HashError};

/// Borrow a byte view from a Python `bytes` or `bytearray` argument.
///
/// Anything that is not bytes-like maps to `TypeError` rather than being
/// silently coerced; the buffer itself is only read, never mutated or
/// retained past the call.
fn extract_bytes<'a>(data: &'a Bound<'_, PyAny>) -> PyResult<Cow<'a, [u8]>> {
    data.extract::<Cow<'a, [u8]>>().map_err(|_| {
        let type_name = data
            .get_type()
            .name()
            .map(|n| n.to_string())
            .unwrap_or_else(|_| "<unknown>".to_string());
        let err = HashError::InvalidInput {
            reason: format!("expected a bytes-like object, got {type_name}"),
        };
        PyTypeError::new_err(err.to_string())
    })
}

/// Compute the XXH64 digest of a byte buffer.
///
/// `seed` defaults to 0, the value every stored fingerprint was computed
/// at; pass a different seed only for namespaced hashing.
#[pyfunction]
#[pyo3(signature = (data, seed=0))]
pub fn hash_bytes(data: &Bound<'_, PyAny>, seed: u64) -> PyResult<u64> {
    crate::init_tracing();
    let bytes = extract_bytes(data)?;
    Ok(dh_core::hash_bytes_seeded(&bytes, seed))
}

/// Fingerprint a byte buffer and return the 16-hex-char display form.
#[pyfunction]
pub fn fingerprint_hex(data: &Bound<'_, PyAny>) -> PyResult<String> {
    crate::init_tracing();
    let bytes = extract_bytes(data)?;
    Ok(Fingerprint::of(&bytes).to_string())
}

/// Parse a 16-hex-char fingerprint string back into its integer value.
#[pyfunction]
pub fn parse_fingerprint(hex: &str) -> PyResult<u64> {
    crate::init_tracing();
    Fingerprint::from_hex(hex)
        .map(|fp| fp.0)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Streaming hasher binding for content that arrives in chunks.
///
/// Produces the same digest as a single `hash_bytes` call over the
/// concatenated input.
#[pyclass]
pub struct HasherBinding {
    inner: ContentHasher,
}

#[pymethods]
impl HasherBinding {
    #[new]
    #[pyo3(signature = (seed=0))]
    fn new(seed: u64) -> Self {
        crate::init_tracing();
        Self {
            inner: ContentHasher::with_seed(seed),
        }
    }

    /// Absorb the next chunk of input.
    fn update(&mut self, data: &Bound<'_, PyAny>) -> PyResult<()> {
        let bytes = extract_bytes(data)?;
        self.inner.update(&bytes);
        Ok(())
    }

    /// Digest of everything absorbed so far; the state stays usable.
    fn digest(&self) -> u64 {
        self.inner.digest()
    }

    fn __repr__(&self) -> String {
        format!("Hasher(digest={:016x})", self.inner.digest())
    }
}
