//! HMAC-DRBG with the hash chosen at runtime.
//!
//! The [`HashAlgId`] is resolved to a concrete [`HmacDrbg`] once, at
//! construction; later calls dispatch on the enum variant only.

use hdrbg_types::{DrbgError, HashAlgId};

use super::config::DrbgConfig;
use super::hmac_drbg::HmacDrbg;
use crate::hmac::{HmacSha224, HmacSha256, HmacSha384, HmacSha512};

/// An [`HmacDrbg`] over any supported SHA-2 hash.
#[derive(Debug, Clone)]
pub enum AnyHmacDrbg {
    Sha224(HmacDrbg<HmacSha224>),
    Sha256(HmacDrbg<HmacSha256>),
    Sha384(HmacDrbg<HmacSha384>),
    Sha512(HmacDrbg<HmacSha512>),
}

macro_rules! dispatch {
    ($self:expr, $drbg:ident => $body:expr) => {
        match $self {
            AnyHmacDrbg::Sha224($drbg) => $body,
            AnyHmacDrbg::Sha256($drbg) => $body,
            AnyHmacDrbg::Sha384($drbg) => $body,
            AnyHmacDrbg::Sha512($drbg) => $body,
        }
    };
}

impl AnyHmacDrbg {
    /// Instantiate an HMAC-DRBG over `alg`.
    pub fn new(
        alg: HashAlgId,
        entropy: &[u8],
        nonce: &[u8],
        config: &DrbgConfig,
    ) -> Result<Self, DrbgError> {
        Ok(match alg {
            HashAlgId::Sha224 => Self::Sha224(HmacDrbg::with_config(entropy, nonce, config)?),
            HashAlgId::Sha256 => Self::Sha256(HmacDrbg::with_config(entropy, nonce, config)?),
            HashAlgId::Sha384 => Self::Sha384(HmacDrbg::with_config(entropy, nonce, config)?),
            HashAlgId::Sha512 => Self::Sha512(HmacDrbg::with_config(entropy, nonce, config)?),
        })
    }

    pub fn reseed(
        &mut self,
        entropy: &[u8],
        additional_input: Option<&[u8]>,
    ) -> Result<(), DrbgError> {
        dispatch!(self, drbg => drbg.reseed(entropy, additional_input))
    }

    pub fn generate(
        &mut self,
        output: &mut [u8],
        additional_input: Option<&[u8]>,
    ) -> Result<(), DrbgError> {
        dispatch!(self, drbg => drbg.generate(output, additional_input))
    }

    pub fn generate_bytes(
        &mut self,
        len: usize,
        additional_input: Option<&[u8]>,
    ) -> Result<Vec<u8>, DrbgError> {
        dispatch!(self, drbg => drbg.generate_bytes(len, additional_input))
    }

    pub fn generate_with_prediction_resistance(
        &mut self,
        output: &mut [u8],
        entropy: &[u8],
        additional_input: Option<&[u8]>,
    ) -> Result<(), DrbgError> {
        dispatch!(self, drbg => drbg.generate_with_prediction_resistance(output, entropy, additional_input))
    }

    pub fn hash_alg(&self) -> HashAlgId {
        dispatch!(self, drbg => drbg.hash_alg())
    }

    pub fn out_len(&self) -> usize {
        dispatch!(self, drbg => drbg.out_len())
    }

    pub fn out_len_bits(&self) -> usize {
        dispatch!(self, drbg => drbg.out_len_bits())
    }

    pub fn reseed_counter(&self) -> u64 {
        dispatch!(self, drbg => drbg.reseed_counter())
    }

    pub fn reseed_interval(&self) -> u64 {
        dispatch!(self, drbg => drbg.reseed_interval())
    }

    pub fn min_entropy_bits(&self) -> usize {
        dispatch!(self, drbg => drbg.min_entropy_bits())
    }

    pub fn prediction_resistance(&self) -> bool {
        dispatch!(self, drbg => drbg.prediction_resistance())
    }
}
