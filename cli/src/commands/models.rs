//! Models command implementation.

use clap::Parser;

/// Models command arguments.
#[derive(Parser)]
pub struct ModelsCommand {
    /// List what the default engine can load instead of the registry
    #[arg(long, default_value_t = false)]
    pub engine: bool,
}

use anyhow::Result as AnyhowResult;
use tokshim_tokenizer::{default_engine, list_supported_models, lookup_model};

pub fn run(cmd: ModelsCommand) -> AnyhowResult<()> {
    if cmd.engine {
        let engine = default_engine();
        println!("Engine: {}", engine.engine_version());
        println!("Encodings:");
        for name in engine.supported_encodings() {
            println!("  {}", name);
        }
        println!("Models:");
        for name in engine.supported_models() {
            println!("  {}", name);
        }
        return Ok(());
    }

    for model in list_supported_models() {
        let metadata = lookup_model(&model)?;
        println!(
            "{:<16} {:<14} chunk limit {}",
            model, metadata.encoding_id, metadata.chunk_limit
        );
    }

    Ok(())
}
