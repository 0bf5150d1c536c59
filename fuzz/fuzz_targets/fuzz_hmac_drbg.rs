#![no_main]
use hdrbg_crypto::{AnyHmacDrbg, DrbgConfig};
use hdrbg_types::{DrbgError, HashAlgId};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let alg = HashAlgId::ALL[data[0] as usize % HashAlgId::ALL.len()];
    let len = u16::from_le_bytes([data[1], data[2]]) as usize % 4096;
    let split = data[3] as usize;
    let rest = &data[4..];
    let (entropy, tail) = rest.split_at(split.min(rest.len()));
    let (nonce, additional) = tail.split_at(tail.len() / 2);

    let config = DrbgConfig::builder().reseed_interval(4).build();
    let mut drbg = match AnyHmacDrbg::new(alg, entropy, nonce, &config) {
        Ok(drbg) => drbg,
        Err(DrbgError::InsufficientEntropy { .. }) => {
            assert!(entropy.len() * 8 < 192);
            return;
        }
        Err(e) => panic!("unexpected error: {e}"),
    };

    for _ in 0..4 {
        let out = drbg.generate_bytes(len, Some(additional)).unwrap();
        assert_eq!(out.len(), len);
    }
    assert!(matches!(
        drbg.generate_bytes(len, None),
        Err(DrbgError::ReseedRequired)
    ));
});
