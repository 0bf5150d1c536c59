#![forbid(unsafe_code)]
#![doc = "HMAC-based deterministic random bit generation for hdrbg."]

// Core traits
pub mod provider;

// MAC bindings
pub mod hmac;

// DRBG
pub mod drbg;

// Self tests
#[cfg(feature = "fips")]
pub mod fips;

pub use drbg::{AnyHmacDrbg, DrbgConfig, HmacDrbg};
pub use provider::HmacPrimitive;
