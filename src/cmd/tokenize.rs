use crate::reports;
use clap::Args;
use gamerwords::corpus::{count_texts, write_counts};
use gamerwords::error::GwResult;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct TokenizeArgs {
    /// Raw text files (one or more messages/posts each)
    #[arg(short, long, required = true, num_args = 1..)]
    pub input: Vec<PathBuf>,

    #[arg(short, long)]
    pub output: PathBuf,
}

pub fn run(args: TokenizeArgs) -> GwResult<()> {
    let mut texts = Vec::with_capacity(args.input.len());
    for path in &args.input {
        info!("📄 Reading {:?}", path);
        texts.push(fs::read_to_string(path)?);
    }

    let counts = count_texts(&texts);
    write_counts(&args.output, &counts)?;

    reports::print_tokenize_summary(&args.output, &counts);
    Ok(())
}
