use std::sync::Once;

use pyo3::prelude::*;

mod hasher;

use hasher::{fingerprint_hex, hash_bytes, parse_fingerprint, HasherBinding};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber once per process. Controlled by
/// `RUST_LOG`; silent by default so the host environment stays clean.
pub(crate) fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_log::LogTracer::init();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

#[pymodule(name = "_datahash")]
fn datahash_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(hash_bytes, m)?)?;
    m.add_function(wrap_pyfunction!(fingerprint_hex, m)?)?;
    m.add_function(wrap_pyfunction!(parse_fingerprint, m)?)?;
    m.add_class::<HasherBinding>()?;
    Ok(())
}
