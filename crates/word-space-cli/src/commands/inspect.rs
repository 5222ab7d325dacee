//! `inspect`: validate a blob pairing and report its shape.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use word_space_core::blob::load_store;

use crate::error::CliResult;

#[derive(Args)]
pub struct InspectArgs {
    /// Newline-delimited vocabulary file
    #[arg(long)]
    pub words: PathBuf,

    /// Raw little-endian f32 embedding file
    #[arg(long)]
    pub vectors: PathBuf,

    /// Expected dimensionality; checked against the derived value
    #[arg(long)]
    pub dim: Option<usize>,
}

#[derive(Serialize)]
struct InspectReport {
    words: usize,
    dim: usize,
}

pub fn handle_inspect(args: InspectArgs) -> CliResult<()> {
    let store = load_store(&args.words, &args.vectors, args.dim)?;

    let report = InspectReport {
        words: store.len(),
        dim: store.dim(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
