use std::fmt;
use std::str::FromStr;

use crate::DrbgError;

/// Hash algorithm identifiers usable beneath HMAC-DRBG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgId {
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgId {
    /// All supported identifiers, in ascending output size.
    pub const ALL: [HashAlgId; 4] = [Self::Sha224, Self::Sha256, Self::Sha384, Self::Sha512];

    /// Digest output size in bytes.
    pub const fn output_size(self) -> usize {
        match self {
            Self::Sha224 => 28,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Digest output size in bits (`outlen` in SP 800-90A).
    pub const fn output_bits(self) -> usize {
        self.output_size() * 8
    }

    /// Highest security strength in bits (SP 800-57 Part 1, Table 3).
    pub const fn security_strength(self) -> usize {
        match self {
            Self::Sha224 => 192,
            Self::Sha256 | Self::Sha384 | Self::Sha512 => 256,
        }
    }

    /// Canonical name, e.g. `SHA-256`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha224 => "SHA-224",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
        }
    }
}

impl fmt::Display for HashAlgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgId {
    type Err = DrbgError;

    /// Accepts `sha256`, `SHA256`, `sha-256`, `SHA-256` and the like.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "sha224" => Ok(Self::Sha224),
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            _ => Err(DrbgError::InvalidArg("unsupported hash algorithm")),
        }
    }
}
