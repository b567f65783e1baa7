mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Tracing goes to stderr so stdout stays clean for timing lines,
    // run summaries, and JSON output. RUST_LOG overrides the default.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    match cli.command {
        Command::Measure { repeats } => commands::cmd_measure(repeats, cli.json),
        Command::Simulate {
            out,
            passwords,
            seed,
        } => commands::cmd_simulate(&out, passwords, seed, cli.json),
    }
}
