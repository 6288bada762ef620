//! Tokshim CLI - Command-line interface for the tokenizer facade.
//!
//! This is the main entry point for the `tokshim` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{CountCommand, DecodeCommand, EncodeCommand, ModelsCommand};

#[derive(Parser)]
#[command(name = "tokshim")]
#[command(about = "A tiktoken-compatible tokenizer facade", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported models
    Models(ModelsCommand),
    /// Encode text to token IDs
    Encode(EncodeCommand),
    /// Decode token IDs back to text
    Decode(DecodeCommand),
    /// Count the tokens in text
    Count(CountCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Models(cmd) => commands::models::run(cmd)?,
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
        Commands::Decode(cmd) => commands::decode::run(cmd)?,
        Commands::Count(cmd) => commands::count::run(cmd)?,
    }

    Ok(())
}
