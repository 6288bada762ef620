//! Decode command implementation.

use clap::Parser;

use super::TargetArgs;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Token IDs to decode (comma- or space-separated)
    #[arg(short, long)]
    pub tokens: String,
}

use anyhow::Result as AnyhowResult;

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    let encoding = cmd.target.open()?;

    let ids: Vec<u32> = cmd
        .tokens
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u32>())
        .collect::<Result<Vec<_>, _>>()?;

    let text = encoding.decode(&ids)?;

    println!("{}", text);

    Ok(())
}
