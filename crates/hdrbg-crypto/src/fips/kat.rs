//! Known Answer Tests (KAT).
//!
//! Each KAT runs a single computation with a known input and verifies the
//! output matches the expected value from NIST CAVP or RFC 4231.

use hdrbg_types::CmvpError;

use crate::drbg::HmacDrbg;
use crate::hmac::{HmacSha256, HmacSha512};
use crate::provider::HmacPrimitive;

fn hex(s: &str) -> Result<Vec<u8>, CmvpError> {
    hex::decode(s).map_err(|e| CmvpError::KatFailure(format!("bad vector: {e}")))
}

/// Run all KAT self-tests. Returns on first failure.
pub(crate) fn run_all_kat() -> Result<(), CmvpError> {
    kat_hmac_sha256()?;
    kat_hmac_sha512()?;
    kat_hmac_drbg_no_reseed()?;
    kat_hmac_drbg_reseed()?;
    Ok(())
}

/// HMAC-SHA-256 KAT (RFC 4231 Test Case 1).
fn kat_hmac_sha256() -> Result<(), CmvpError> {
    let key = hex("0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b")?;
    let msg = hex("4869205468657265")?; // "Hi There"
    let expected = hex("b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7")?;

    if HmacSha256::mac(&key, &msg) != expected {
        return Err(CmvpError::KatFailure("HMAC-SHA256 MAC mismatch".into()));
    }
    Ok(())
}

/// HMAC-SHA-512 KAT (RFC 4231 Test Case 1).
fn kat_hmac_sha512() -> Result<(), CmvpError> {
    let key = hex("0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b")?;
    let msg = hex("4869205468657265")?;
    let expected = hex(
        "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cde\
         daa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854",
    )?;

    if HmacSha512::mac(&key, &msg) != expected {
        return Err(CmvpError::KatFailure("HMAC-SHA512 MAC mismatch".into()));
    }
    Ok(())
}

/// HMAC-DRBG SHA-256 KAT, no reseed (NIST CAVP HMAC_DRBG.rsp, COUNT = 0).
fn kat_hmac_drbg_no_reseed() -> Result<(), CmvpError> {
    let entropy = hex("ca851911349384bffe89de1cbdc46e6831e44d34a4fb935ee285dd14b71a7488")?;
    let nonce = hex("659ba96c601dc69fc902940805ec0ca8")?;
    let expected = hex(
        "e528e9abf2dece54d47c7e75e5fe302149f817ea9fb4bee6f4199697d04d5b89\
         d54fbb978a15b5c443c9ec21036d2460b6f73ebad0dc2aba6e624abf07745bc1\
         07694bb7547bb0995f70de25d6b29e2d3011bb19d27676c07162c8b5ccde0668\
         961df86803482cb37ed6d5c0bb8d50cf1f50d476aa0458bdaba806f48be9dcb8",
    )?;

    let mut drbg = HmacDrbg::<HmacSha256>::new(&entropy, &nonce, None)
        .map_err(|e| CmvpError::KatFailure(format!("HMAC-DRBG new: {e}")))?;

    let mut out = vec![0u8; expected.len()];
    drbg.generate(&mut out, None)
        .map_err(|e| CmvpError::KatFailure(format!("HMAC-DRBG generate1: {e}")))?;
    drbg.generate(&mut out, None)
        .map_err(|e| CmvpError::KatFailure(format!("HMAC-DRBG generate2: {e}")))?;

    if out != expected {
        return Err(CmvpError::KatFailure(
            "HMAC-DRBG (no reseed) output mismatch".into(),
        ));
    }
    Ok(())
}

/// HMAC-DRBG SHA-256 KAT with personalization, reseed, and additional input
/// (NIST CAVP HMAC_DRBG.rsp, PredictionResistance = False).
fn kat_hmac_drbg_reseed() -> Result<(), CmvpError> {
    let entropy = hex("cdb0d9117cc6dbc9ef9dcb06a97579841d72dc18b2d46a1cb61e314012bdf416")?;
    let nonce = hex("d0c0d01d156016d0eb6b7e9c7c3c8da8")?;
    let pers = hex("6f0fb9eab3f9ea7ab0a719bfa879bf0aaed683307fda0c6d73ce018b6e34faaa")?;

    let entropy_reseed = hex("8ec6f7d5a8e2e88f43986f70b86e050d07c84b931bcf18e601c5a3eee3064c82")?;
    let addin_reseed = hex("1ab4ca9014fa98a55938316de8ba5a68c629b0741bdd058c4d70c91cda5099b3")?;
    let addin1 = hex("16e2d0721b58d839a122852abd3bf2c942a31c84d82fca74211871880d7162ff")?;
    let addin2 = hex("53686f042a7b087d5d2eca0d2a96de131f275ed7151189f7ca52deaa78b79fb2")?;

    let expected = hex(
        "dda04a2ca7b8147af1548f5d086591ca4fd951a345ce52b3cd49d47e84aa31a1\
         83e31fbc42a1ff1d95afec7143c8008c97bc2a9c091df0a763848391f68cb4a3\
         66ad89857ac725a53b303ddea767be8dc5f605b1b95f6d24c9f06be65a973a08\
         9320b3cc42569dcfd4b92b62a993785b0301b3fc452445656fce22664827b88f",
    )?;

    let mut drbg = HmacDrbg::<HmacSha256>::new(&entropy, &nonce, Some(pers.as_slice()))
        .map_err(|e| CmvpError::KatFailure(format!("HMAC-DRBG new: {e}")))?;

    drbg.reseed(&entropy_reseed, Some(addin_reseed.as_slice()))
        .map_err(|e| CmvpError::KatFailure(format!("HMAC-DRBG reseed: {e}")))?;

    // Generate #1 (discard)
    let mut out = vec![0u8; expected.len()];
    drbg.generate(&mut out, Some(addin1.as_slice()))
        .map_err(|e| CmvpError::KatFailure(format!("HMAC-DRBG generate1: {e}")))?;

    // Generate #2 (compare)
    drbg.generate(&mut out, Some(addin2.as_slice()))
        .map_err(|e| CmvpError::KatFailure(format!("HMAC-DRBG generate2: {e}")))?;

    if out != expected {
        return Err(CmvpError::KatFailure(
            "HMAC-DRBG (reseed) output mismatch".into(),
        ));
    }
    Ok(())
}
