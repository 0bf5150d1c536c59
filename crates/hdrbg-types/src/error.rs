/// DRBG operation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DrbgError {
    #[error("drbg: insufficient entropy: need {need_bits} bits, got {got_bits}")]
    InsufficientEntropy { need_bits: usize, got_bits: usize },
    #[error("drbg: reseed is required")]
    ReseedRequired,
    #[error("drbg: invalid argument: {0}")]
    InvalidArg(&'static str),
}

/// Self-test (CMVP) errors.
#[derive(Debug, thiserror::Error)]
pub enum CmvpError {
    #[error("known answer test failed: {0}")]
    KatFailure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drbg_error_display() {
        let err = DrbgError::InsufficientEntropy {
            need_bits: 192,
            got_bits: 128,
        };
        assert_eq!(
            err.to_string(),
            "drbg: insufficient entropy: need 192 bits, got 128"
        );
        assert_eq!(
            DrbgError::ReseedRequired.to_string(),
            "drbg: reseed is required"
        );
    }

    #[test]
    fn test_cmvp_error_display() {
        let err = CmvpError::KatFailure("HMAC-DRBG output mismatch".into());
        assert_eq!(
            err.to_string(),
            "known answer test failed: HMAC-DRBG output mismatch"
        );
    }
}
