use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod generate;
mod list;
mod selftest;

/// hdrbg command-line tool for HMAC-DRBG output.
#[derive(Parser)]
#[command(name = "hdrbg")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Instantiate an HMAC-DRBG from hex inputs and print its output.
    Generate(generate::GenerateArgs),
    /// Run the known-answer self tests.
    Selftest,
    /// List supported hash algorithms.
    List,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Generate(args) => generate::run(args),
        Commands::Selftest => selftest::run(),
        Commands::List => list::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
