//! `rand_core` integration, so an HMAC-DRBG can drive any API that takes an RNG.

use rand_core::{CryptoRng, Error, RngCore};

use super::hmac_drbg::HmacDrbg;
use crate::provider::HmacPrimitive;

impl<H: HmacPrimitive> RngCore for HmacDrbg<H> {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    /// # Panics
    ///
    /// Panics when the reseed interval is exhausted. Use
    /// [`RngCore::try_fill_bytes`] to observe that condition instead.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(e) = self.try_fill_bytes(dest) {
            panic!("HMAC-DRBG: {e}");
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.generate(dest, None).map_err(Error::new)
    }
}

impl<H: HmacPrimitive> CryptoRng for HmacDrbg<H> {}
