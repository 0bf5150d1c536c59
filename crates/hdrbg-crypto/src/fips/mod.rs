//! Known-answer self tests for the DRBG and its HMAC primitives.
//!
//! Callers that must not emit output from a broken build run
//! [`run_self_tests`] once before instantiating a generator; the `hdrbg`
//! CLI does this before every `generate`.
//!
//! All functionality is gated behind `#[cfg(feature = "fips")]`.

mod kat;

use hdrbg_types::CmvpError;

/// Run the HMAC and HMAC-DRBG known-answer tests.
///
/// Returns the first mismatch as [`CmvpError::KatFailure`].
///
/// ```
/// hdrbg_crypto::fips::run_self_tests().unwrap();
/// ```
pub fn run_self_tests() -> Result<(), CmvpError> {
    kat::run_all_kat()?;
    tracing::debug!("self-tests passed");
    Ok(())
}
