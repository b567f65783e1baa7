use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "hashsim")]
#[command(about = "Time password-hashing primitives and simulate offline dictionary attacks.")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Time single-hash computation for the available KDF backends
    Measure {
        /// Override the per-scheme repeat counts
        #[arg(long)]
        repeats: Option<u32>,
    },

    /// Run the crack-likelihood simulation and write CSV/chart artifacts
    Simulate {
        /// Output directory (created if absent; artifacts overwritten)
        #[arg(long, default_value = "results")]
        out: String,

        /// Number of passwords to generate
        #[arg(long, default_value = "2000")]
        passwords: usize,

        /// RNG seed; equal seeds reproduce identical artifacts
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}
