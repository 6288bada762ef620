//! Count command implementation.

use clap::Parser;

use super::TargetArgs;

/// Count command arguments.
#[derive(Parser)]
pub struct CountCommand {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Text to count ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,
}

use anyhow::Result as AnyhowResult;

pub fn run(cmd: CountCommand) -> AnyhowResult<()> {
    let encoding = cmd.target.open()?;
    let input_text = super::read_input(cmd.input)?;

    // Goes through encode so the chunk limit applies.
    let ids = encoding.encode(&input_text)?;
    println!("{}", ids.len());

    Ok(())
}
