//! Capability traits the DRBG is parameterized over.
//!
//! A generator is bound to one concrete primitive at construction and keeps
//! it for its whole lifetime; there is no per-call algorithm lookup.

use hdrbg_types::HashAlgId;

/// A keyed HMAC over a fixed hash function.
pub trait HmacPrimitive: Send + Sync + 'static {
    /// Identity of the underlying hash.
    const ALG_ID: HashAlgId;

    /// MAC output size in bytes. Equal to the hash digest size.
    const OUTPUT_SIZE: usize = Self::ALG_ID.output_size();

    /// Compute `HMAC(key, parts[0] || parts[1] || ...)` into `out`.
    ///
    /// `out` must be exactly [`Self::OUTPUT_SIZE`] bytes long.
    fn mac_into(key: &[u8], parts: &[&[u8]], out: &mut [u8]);

    /// One-shot HMAC returning a freshly allocated tag.
    fn mac(key: &[u8], data: &[u8]) -> Vec<u8> {
        let mut out = vec![0u8; Self::OUTPUT_SIZE];
        Self::mac_into(key, &[data], &mut out);
        out
    }
}
