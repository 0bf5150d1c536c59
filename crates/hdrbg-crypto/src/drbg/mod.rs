//! Deterministic Random Bit Generators (NIST SP 800-90A).
//!
//! HMAC-DRBG (Section 10.1.2) over the SHA-2 family:
//! - [`HmacDrbg`]: bound to one [`HmacPrimitive`](crate::provider::HmacPrimitive) at compile time
//! - [`AnyHmacDrbg`]: hash picked from a [`HashAlgId`](hdrbg_types::HashAlgId) at construction

mod any;
mod config;
mod hmac_drbg;
mod rng;

pub use any::AnyHmacDrbg;
pub use config::{DrbgConfig, DrbgConfigBuilder, DEFAULT_MIN_ENTROPY_BITS, MAX_RESEED_INTERVAL};
pub use hmac_drbg::HmacDrbg;
