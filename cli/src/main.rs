//! Nanowork CLI
//!
//! Proof-of-work solver and verifier for Nano-style blocks.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{solve_block, verify_block, SolveArgs, VerifyArgs};

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "nanowork")]
#[command(about = "Lane-parallel BLAKE2b proof-of-work solver", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true, env = "NANOWORK_VERBOSE")]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a work value and print it
    Solve(SolveArgs),
    /// Check a work value against a block hash
    Verify(VerifyArgs),
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match &cli.command {
        Commands::Solve(args) => solve_block(args)?,
        Commands::Verify(args) => {
            if !verify_block(args)? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
