//! HMAC-DRBG configuration with builder pattern.

use std::fmt;

use hdrbg_types::DrbgError;
use zeroize::Zeroize;

/// Default minimum entropy accepted by instantiate and reseed, in bits.
pub const DEFAULT_MIN_ENTROPY_BITS: usize = 192;

/// Maximum number of generate requests between reseeds (SP 800-90A Table 2).
pub const MAX_RESEED_INTERVAL: u64 = 1 << 48;

/// Fixed parameters of an HMAC-DRBG instance.
#[derive(Clone)]
pub struct DrbgConfig {
    /// Personalization string mixed in at instantiation.
    pub personalization: Vec<u8>,
    /// Whether the caller intends to reseed before every request.
    pub prediction_resistance: bool,
    /// Minimum entropy input length, in bits.
    pub min_entropy_bits: usize,
    /// Generate requests allowed between reseeds.
    pub reseed_interval: u64,
}

impl Default for DrbgConfig {
    fn default() -> Self {
        DrbgConfig {
            personalization: Vec::new(),
            prediction_resistance: false,
            min_entropy_bits: DEFAULT_MIN_ENTROPY_BITS,
            reseed_interval: MAX_RESEED_INTERVAL,
        }
    }
}

impl Drop for DrbgConfig {
    fn drop(&mut self) {
        self.personalization.zeroize();
    }
}

impl fmt::Debug for DrbgConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrbgConfig")
            .field("personalization_len", &self.personalization.len())
            .field("prediction_resistance", &self.prediction_resistance)
            .field("min_entropy_bits", &self.min_entropy_bits)
            .field("reseed_interval", &self.reseed_interval)
            .finish()
    }
}

impl DrbgConfig {
    pub fn builder() -> DrbgConfigBuilder {
        DrbgConfigBuilder::default()
    }

    /// Check the invariants every instance relies on.
    pub fn validate(&self) -> Result<(), DrbgError> {
        if self.min_entropy_bits == 0 {
            return Err(DrbgError::InvalidArg("min_entropy_bits must be positive"));
        }
        if self.reseed_interval == 0 || self.reseed_interval > MAX_RESEED_INTERVAL {
            return Err(DrbgError::InvalidArg(
                "reseed_interval must be in 1..=2^48",
            ));
        }
        Ok(())
    }
}

/// Builder for [`DrbgConfig`].
#[derive(Debug, Default)]
pub struct DrbgConfigBuilder {
    config: DrbgConfig,
}

impl DrbgConfigBuilder {
    pub fn personalization(mut self, data: &[u8]) -> Self {
        self.config.personalization.zeroize();
        self.config.personalization = data.to_vec();
        self
    }

    pub fn prediction_resistance(mut self, enabled: bool) -> Self {
        self.config.prediction_resistance = enabled;
        self
    }

    pub fn min_entropy_bits(mut self, bits: usize) -> Self {
        self.config.min_entropy_bits = bits;
        self
    }

    /// Lower the reseed interval below the 2^48 maximum.
    pub fn reseed_interval(mut self, interval: u64) -> Self {
        self.config.reseed_interval = interval;
        self
    }

    pub fn build(self) -> DrbgConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DrbgConfig::builder().build();
        assert!(config.personalization.is_empty());
        assert!(!config.prediction_resistance);
        assert_eq!(config.min_entropy_bits, 192);
        assert_eq!(config.reseed_interval, 1 << 48);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = DrbgConfig::builder()
            .personalization(b"app-v1")
            .prediction_resistance(true)
            .min_entropy_bits(256)
            .reseed_interval(1000)
            .build();
        assert_eq!(config.personalization, b"app-v1");
        assert!(config.prediction_resistance);
        assert_eq!(config.min_entropy_bits, 256);
        assert_eq!(config.reseed_interval, 1000);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_entropy = DrbgConfig::builder().min_entropy_bits(0).build();
        assert!(matches!(
            zero_entropy.validate(),
            Err(DrbgError::InvalidArg(_))
        ));

        let zero_interval = DrbgConfig::builder().reseed_interval(0).build();
        assert!(zero_interval.validate().is_err());

        let huge_interval = DrbgConfig::builder()
            .reseed_interval(MAX_RESEED_INTERVAL + 1)
            .build();
        assert!(huge_interval.validate().is_err());
    }

    #[test]
    fn test_debug_hides_personalization() {
        let config = DrbgConfig::builder().personalization(b"secret").build();
        let text = format!("{config:?}");
        assert!(!text.contains("secret"));
        assert!(text.contains("personalization_len: 6"));
    }
}
