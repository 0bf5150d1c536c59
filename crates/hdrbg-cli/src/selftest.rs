//! Run the known-answer self tests.

use hdrbg_crypto::fips;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    fips::run_self_tests()?;
    println!("self-tests: OK");
    Ok(())
}
