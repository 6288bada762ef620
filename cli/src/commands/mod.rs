//! CLI commands for the tokshim tokenizer facade.

pub mod count;
pub mod decode;
pub mod encode;
pub mod models;

pub use count::CountCommand;
pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use models::ModelsCommand;

use anyhow::Result as AnyhowResult;
use clap::Args;
use log::info;
use std::io::Read;
use tokshim_tokenizer::{encoding_for_model, get_encoding, Encoding};

/// Which tokenizer a command should use.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TargetArgs {
    /// Model name, resolved through the registry (e.g. gpt-4o)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Encoding name used directly (e.g. cl100k_base)
    #[arg(short, long)]
    pub encoding: Option<String>,
}

impl TargetArgs {
    /// Build the encoding these arguments select.
    pub fn open(&self) -> AnyhowResult<Encoding> {
        let encoding = match (&self.model, &self.encoding) {
            (Some(model), _) => encoding_for_model(model)?,
            (None, Some(name)) => get_encoding(name)?,
            (None, None) => anyhow::bail!("either --model or --encoding is required"),
        };
        info!("Using {:?}", encoding);
        Ok(encoding)
    }
}

/// Read text from the argument, or from stdin when it is "-".
pub fn read_input(input: String) -> AnyhowResult<String> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(input)
    }
}
