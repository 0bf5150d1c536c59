//! Instantiate an HMAC-DRBG from hex inputs and print its output as hex.

use clap::Args;
use hdrbg_crypto::{fips, AnyHmacDrbg, DrbgConfig};
use hdrbg_types::{CmvpError, HashAlgId};

const MAX_LEN: usize = 1_048_576;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Hash algorithm (sha224, sha256, sha384, sha512).
    #[arg(short = 'H', long, default_value = "sha256")]
    pub hash: String,
    /// Entropy input (hex).
    #[arg(short, long)]
    pub entropy: String,
    /// Nonce (hex).
    #[arg(short, long)]
    pub nonce: String,
    /// Personalization string (hex).
    #[arg(short, long)]
    pub personalization: Option<String>,
    /// Additional input mixed into every request (hex).
    #[arg(short, long)]
    pub additional: Option<String>,
    /// Entropy to reseed with before the first request (hex).
    #[arg(long)]
    pub reseed_entropy: Option<String>,
    /// Minimum entropy in bits.
    #[arg(long, default_value_t = 192)]
    pub min_entropy: usize,
    /// Bytes per request.
    #[arg(short, long, default_value_t = 32)]
    pub len: usize,
    /// Number of requests.
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    for line in checked_outputs(args, fips::run_self_tests)? {
        println!("{line}");
    }
    Ok(())
}

fn hex_arg(name: &str, value: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    hex::decode(value).map_err(|e| format!("invalid hex in --{name}: {e}").into())
}

/// Refuse to produce output unless `self_test` passes first.
fn checked_outputs(
    args: &GenerateArgs,
    self_test: impl FnOnce() -> Result<(), CmvpError>,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    self_test()?;
    outputs(args)
}

fn outputs(args: &GenerateArgs) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    if args.len > MAX_LEN {
        return Err(format!("len must be at most {MAX_LEN}").into());
    }
    if args.count == 0 {
        return Err("count must be at least 1".into());
    }

    let alg: HashAlgId = args.hash.parse()?;
    let entropy = hex_arg("entropy", &args.entropy)?;
    let nonce = hex_arg("nonce", &args.nonce)?;
    let mut builder = DrbgConfig::builder().min_entropy_bits(args.min_entropy);
    if let Some(pers) = &args.personalization {
        builder = builder.personalization(&hex_arg("personalization", pers)?);
    }
    let additional = args
        .additional
        .as_deref()
        .map(|a| hex_arg("additional", a))
        .transpose()?;

    let mut drbg = AnyHmacDrbg::new(alg, &entropy, &nonce, &builder.build())?;
    tracing::debug!(hash = %alg, len = args.len, count = args.count, "generating");

    if let Some(reseed) = &args.reseed_entropy {
        drbg.reseed(&hex_arg("reseed-entropy", reseed)?, None)?;
    }

    let mut lines = Vec::with_capacity(args.count);
    let mut buf = vec![0u8; args.len];
    for _ in 0..args.count {
        drbg.generate(&mut buf, additional.as_deref())?;
        lines.push(hex::encode(&buf));
    }
    Ok(lines)
}
