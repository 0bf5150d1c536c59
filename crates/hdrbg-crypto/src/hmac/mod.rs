//! HMAC bindings (RFC 2104) for the SHA-2 family.
//!
//! The MAC itself comes from the RustCrypto `hmac` and `sha2` crates; this
//! module only adapts them to [`HmacPrimitive`] so a generator can be bound to
//! one of them at compile time.

use ::hmac::{Hmac, Mac};
use hdrbg_types::HashAlgId;
use sha2::{Sha224, Sha256, Sha384, Sha512};

use crate::provider::HmacPrimitive;

macro_rules! hmac_primitive {
    ($(#[$meta:meta])* $name:ident, $digest:ty, $alg:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl HmacPrimitive for $name {
            const ALG_ID: HashAlgId = $alg;

            fn mac_into(key: &[u8], parts: &[&[u8]], out: &mut [u8]) {
                // HMAC accepts keys of any length, so this cannot fail.
                let mut ctx = <Hmac<$digest> as Mac>::new_from_slice(key)
                    .expect("HMAC accepts keys of any length");
                for part in parts {
                    ctx.update(part);
                }
                out.copy_from_slice(&ctx.finalize().into_bytes());
            }
        }
    };
}

hmac_primitive!(
    /// HMAC-SHA-224 (outlen = 224 bits).
    HmacSha224,
    Sha224,
    HashAlgId::Sha224
);
hmac_primitive!(
    /// HMAC-SHA-256 (outlen = 256 bits).
    HmacSha256,
    Sha256,
    HashAlgId::Sha256
);
hmac_primitive!(
    /// HMAC-SHA-384 (outlen = 384 bits).
    HmacSha384,
    Sha384,
    HashAlgId::Sha384
);
hmac_primitive!(
    /// HMAC-SHA-512 (outlen = 512 bits).
    HmacSha512,
    Sha512,
    HashAlgId::Sha512
);
