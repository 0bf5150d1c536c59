//! HMAC and HMAC-DRBG benchmarks.
//!
//! Run with: cargo bench -p hdrbg-crypto

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// ---------------------------------------------------------------------------
// HMAC benchmarks
// ---------------------------------------------------------------------------

fn bench_hmac(c: &mut Criterion) {
    use hdrbg_crypto::hmac::{HmacSha256, HmacSha512};
    use hdrbg_crypto::HmacPrimitive;

    let mut group = c.benchmark_group("hmac");
    let key = [0x42u8; 32];

    for size in [64usize, 1024, 16384] {
        group.throughput(Throughput::Bytes(size as u64));
        let data = vec![0u8; size];

        group.bench_with_input(BenchmarkId::new("sha256", size), &size, |b, _| {
            let mut out = [0u8; 32];
            b.iter(|| HmacSha256::mac_into(&key, &[data.as_slice()], &mut out));
        });

        group.bench_with_input(BenchmarkId::new("sha512", size), &size, |b, _| {
            let mut out = [0u8; 64];
            b.iter(|| HmacSha512::mac_into(&key, &[data.as_slice()], &mut out));
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// HMAC-DRBG benchmarks
// ---------------------------------------------------------------------------

fn bench_hmac_drbg(c: &mut Criterion) {
    use hdrbg_crypto::{AnyHmacDrbg, DrbgConfig};
    use hdrbg_types::HashAlgId;

    let mut group = c.benchmark_group("hmac-drbg");
    let entropy = [0x01u8; 32];
    let nonce = [0x02u8; 16];

    for alg in [HashAlgId::Sha256, HashAlgId::Sha512] {
        for size in [32usize, 1024, 65536] {
            group.throughput(Throughput::Bytes(size as u64));
            let mut drbg = AnyHmacDrbg::new(alg, &entropy, &nonce, &DrbgConfig::default()).unwrap();
            let mut out = vec![0u8; size];

            group.bench_with_input(
                BenchmarkId::new(format!("{alg}/generate"), size),
                &size,
                |b, _| {
                    b.iter(|| drbg.generate(&mut out, None).unwrap());
                },
            );
        }
    }

    group.bench_function("sha256/instantiate", |b| {
        b.iter(|| AnyHmacDrbg::new(HashAlgId::Sha256, &entropy, &nonce, &DrbgConfig::default()).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_hmac, bench_hmac_drbg);
criterion_main!(benches);
