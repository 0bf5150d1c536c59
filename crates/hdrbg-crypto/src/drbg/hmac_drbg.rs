//! HMAC-DRBG (Deterministic Random Bit Generator) implementation.
//!
//! Provides cryptographic random number generation based on NIST SP 800-90A
//! Section 10.1.2, generic over the HMAC primitive.

use std::fmt;
use std::marker::PhantomData;

use hdrbg_types::{DrbgError, HashAlgId};
use tracing::{debug, trace};
use zeroize::Zeroize;

use super::config::DrbgConfig;
use crate::provider::HmacPrimitive;

/// HMAC-DRBG context (NIST SP 800-90A Section 10.1.2).
///
/// Every operation takes `&mut self`; share an instance across threads only
/// behind external synchronization.
pub struct HmacDrbg<H: HmacPrimitive> {
    /// HMAC key K (outlen bits).
    k: Vec<u8>,
    /// Chaining value V (outlen bits).
    v: Vec<u8>,
    /// Number of generate requests since last (re)seed.
    reseed_counter: u64,
    reseed_interval: u64,
    min_entropy_bits: usize,
    prediction_resistance: bool,
    _primitive: PhantomData<H>,
}

impl<H: HmacPrimitive> Drop for HmacDrbg<H> {
    fn drop(&mut self) {
        self.k.zeroize();
        self.v.zeroize();
    }
}

impl<H: HmacPrimitive> Clone for HmacDrbg<H> {
    fn clone(&self) -> Self {
        HmacDrbg {
            k: self.k.clone(),
            v: self.v.clone(),
            reseed_counter: self.reseed_counter,
            reseed_interval: self.reseed_interval,
            min_entropy_bits: self.min_entropy_bits,
            prediction_resistance: self.prediction_resistance,
            _primitive: PhantomData,
        }
    }
}

impl<H: HmacPrimitive> fmt::Debug for HmacDrbg<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacDrbg")
            .field("hash", &H::ALG_ID)
            .field("reseed_counter", &self.reseed_counter)
            .field("reseed_interval", &self.reseed_interval)
            .field("min_entropy_bits", &self.min_entropy_bits)
            .field("prediction_resistance", &self.prediction_resistance)
            .finish_non_exhaustive()
    }
}

fn check_entropy(entropy: &[u8], min_entropy_bits: usize) -> Result<(), DrbgError> {
    let got_bits = entropy.len().saturating_mul(8);
    if got_bits < min_entropy_bits {
        return Err(DrbgError::InsufficientEntropy {
            need_bits: min_entropy_bits,
            got_bits,
        });
    }
    Ok(())
}

impl<H: HmacPrimitive> HmacDrbg<H> {
    /// Instantiate with the default configuration (SP 800-90A Section 10.1.2.3).
    ///
    /// `entropy` must carry at least 192 bits.
    pub fn new(
        entropy: &[u8],
        nonce: &[u8],
        personalization: Option<&[u8]>,
    ) -> Result<Self, DrbgError> {
        let config = match personalization {
            Some(pers) => DrbgConfig::builder().personalization(pers).build(),
            None => DrbgConfig::default(),
        };
        Self::with_config(entropy, nonce, &config)
    }

    /// Instantiate with explicit configuration.
    pub fn with_config(
        entropy: &[u8],
        nonce: &[u8],
        config: &DrbgConfig,
    ) -> Result<Self, DrbgError> {
        config.validate()?;
        check_entropy(entropy, config.min_entropy_bits)?;

        let mut drbg = HmacDrbg {
            // K = 0x00 00...00
            k: vec![0x00; H::OUTPUT_SIZE],
            // V = 0x01 01...01
            v: vec![0x01; H::OUTPUT_SIZE],
            reseed_counter: 1,
            reseed_interval: config.reseed_interval,
            min_entropy_bits: config.min_entropy_bits,
            prediction_resistance: config.prediction_resistance,
            _primitive: PhantomData,
        };
        drbg.update(&[entropy, nonce, config.personalization.as_slice()]);

        debug!(
            hash = %H::ALG_ID,
            prediction_resistance = config.prediction_resistance,
            "hmac-drbg instantiated"
        );
        Ok(drbg)
    }

    /// HMAC-DRBG Update function (SP 800-90A Section 10.1.2.2).
    ///
    /// `provided_data` is the concatenation of its parts.
    fn update(&mut self, provided_data: &[&[u8]]) {
        const SEPARATOR_ZERO: [u8; 1] = [0x00];
        const SEPARATOR_ONE: [u8; 1] = [0x01];

        self.mix(&SEPARATOR_ZERO, provided_data);
        if provided_data.iter().all(|part| part.is_empty()) {
            return;
        }
        self.mix(&SEPARATOR_ONE, provided_data);
    }

    /// K = HMAC(K, V || separator || provided_data); V = HMAC(K, V).
    fn mix(&mut self, separator: &[u8], provided_data: &[&[u8]]) {
        let mut parts: Vec<&[u8]> = Vec::with_capacity(2 + provided_data.len());
        parts.push(self.v.as_slice());
        parts.push(separator);
        parts.extend_from_slice(provided_data);

        let mut k = vec![0u8; H::OUTPUT_SIZE];
        H::mac_into(&self.k, &parts, &mut k);
        std::mem::swap(&mut self.k, &mut k);
        k.zeroize();

        self.step_v();
    }

    /// V = HMAC(K, V).
    fn step_v(&mut self) {
        let mut v = vec![0u8; H::OUTPUT_SIZE];
        H::mac_into(&self.k, &[self.v.as_slice()], &mut v);
        std::mem::swap(&mut self.v, &mut v);
        v.zeroize();
    }

    /// Reseed the DRBG with fresh entropy (SP 800-90A Section 10.1.2.4).
    ///
    /// On error the state is left untouched.
    pub fn reseed(
        &mut self,
        entropy: &[u8],
        additional_input: Option<&[u8]>,
    ) -> Result<(), DrbgError> {
        check_entropy(entropy, self.min_entropy_bits)?;

        self.update(&[entropy, additional_input.unwrap_or_default()]);
        self.reseed_counter = 1;

        debug!(hash = %H::ALG_ID, "hmac-drbg reseeded");
        Ok(())
    }

    /// Generate pseudorandom bytes into `output` (SP 800-90A Section 10.1.2.5).
    ///
    /// Fills the whole slice. Fails with [`DrbgError::ReseedRequired`] once the
    /// reseed interval is exhausted, without touching `output` or the state.
    pub fn generate(
        &mut self,
        output: &mut [u8],
        additional_input: Option<&[u8]>,
    ) -> Result<(), DrbgError> {
        if self.reseed_counter > self.reseed_interval {
            return Err(DrbgError::ReseedRequired);
        }

        let additional_input = additional_input.unwrap_or_default();
        if !additional_input.is_empty() {
            self.update(&[additional_input]);
        }

        for chunk in output.chunks_mut(H::OUTPUT_SIZE) {
            self.step_v();
            chunk.copy_from_slice(&self.v[..chunk.len()]);
        }

        // Backtracking resistance: re-key even when no input was supplied.
        self.update(&[additional_input]);
        self.reseed_counter += 1;

        trace!(
            hash = %H::ALG_ID,
            len = output.len(),
            reseed_counter = self.reseed_counter,
            "hmac-drbg generate"
        );
        Ok(())
    }

    /// Generate exactly `len` pseudorandom bytes.
    pub fn generate_bytes(
        &mut self,
        len: usize,
        additional_input: Option<&[u8]>,
    ) -> Result<Vec<u8>, DrbgError> {
        let mut output = vec![0u8; len];
        self.generate(&mut output, additional_input)?;
        Ok(output)
    }

    /// Reseed with `entropy || additional_input`, then generate with no
    /// additional input (SP 800-90A Section 9.3.1, prediction resistance).
    pub fn generate_with_prediction_resistance(
        &mut self,
        output: &mut [u8],
        entropy: &[u8],
        additional_input: Option<&[u8]>,
    ) -> Result<(), DrbgError> {
        self.reseed(entropy, additional_input)?;
        self.generate(output, None)
    }

    /// Identity of the underlying hash.
    pub fn hash_alg(&self) -> HashAlgId {
        H::ALG_ID
    }

    /// Output block length in bytes.
    pub fn out_len(&self) -> usize {
        H::OUTPUT_SIZE
    }

    /// Output block length in bits (`outlen`).
    pub fn out_len_bits(&self) -> usize {
        H::OUTPUT_SIZE * 8
    }

    /// Number of generate calls since the last (re)seed, starting at 1.
    pub fn reseed_counter(&self) -> u64 {
        self.reseed_counter
    }

    /// Generate calls allowed before a reseed is required.
    pub fn reseed_interval(&self) -> u64 {
        self.reseed_interval
    }

    /// Minimum entropy, in bits, accepted by instantiate and reseed.
    pub fn min_entropy_bits(&self) -> usize {
        self.min_entropy_bits
    }

    /// Whether prediction resistance was requested at instantiation.
    pub fn prediction_resistance(&self) -> bool {
        self.prediction_resistance
    }
}
