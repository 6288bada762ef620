//! Encode command implementation.

use clap::Parser;

use super::TargetArgs;

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Text to encode ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print the metrics payload as JSON on stderr
    #[arg(long, default_value_t = false)]
    pub metrics: bool,
}

use anyhow::Result as AnyhowResult;

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    let encoding = cmd.target.open()?;
    let input_text = super::read_input(cmd.input)?;

    if cmd.metrics {
        encoding.set_metrics_hook(|payload| match serde_json::to_string(payload) {
            Ok(json) => eprintln!("{}", json),
            Err(e) => log::warn!("Failed to serialize metrics: {}", e),
        });
    }

    let ids = encoding.encode(&input_text)?;

    let ids_str: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    let output = ids_str.join(" ");

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, &output)?;
            println!("Encoded {} tokens to {}", ids.len(), path);
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}
