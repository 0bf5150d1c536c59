//! List hash algorithms usable beneath HMAC-DRBG.

use hdrbg_types::HashAlgId;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    for line in lines() {
        println!("{line}");
    }
    Ok(())
}

fn lines() -> Vec<String> {
    let mut out = vec!["Hash algorithms:".to_string()];
    for alg in HashAlgId::ALL {
        out.push(format!(
            "  {:<8} outlen={} bits, security strength={} bits",
            alg.name(),
            alg.output_bits(),
            alg.security_strength()
        ));
    }
    out
}
