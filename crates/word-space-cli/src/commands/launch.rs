//! `launch`: run the full projection pipeline and print a session summary.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use word_space_core::beacons::Beacon;
use word_space_core::blob::load_store;
use word_space_core::config::EngineConfig;
use word_space_core::normalizer::{ProjectedWord, SessionBounds};
use word_space_core::selector::SelectionStats;
use word_space_core::session::WordSpaceSession;

use crate::commands::axis_file::AxisFile;
use crate::error::CliResult;

#[derive(Args)]
pub struct LaunchArgs {
    /// Newline-delimited vocabulary file
    #[arg(long)]
    pub words: PathBuf,

    /// Raw little-endian f32 embedding file
    #[arg(long)]
    pub vectors: PathBuf,

    /// Expected dimensionality; checked against the derived value
    #[arg(long)]
    pub dim: Option<usize>,

    /// JSON axis file: six words and six embedding vectors
    #[arg(long)]
    pub axes: PathBuf,

    /// Engine configuration TOML; defaults apply when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Include the full projected word list in the summary
    #[arg(long)]
    pub full: bool,
}

#[derive(Serialize)]
struct LaunchSummary<'a> {
    session: String,
    stats: SelectionStats,
    bounds: SessionBounds,
    beacons: &'a [Beacon; 6],
    #[serde(skip_serializing_if = "Option::is_none")]
    words: Option<&'a [ProjectedWord]>,
}

pub fn load_config(path: Option<&PathBuf>) -> CliResult<EngineConfig> {
    match path {
        Some(p) => Ok(EngineConfig::from_file(p)?),
        None => Ok(EngineConfig::default()),
    }
}

pub fn run_launch(args: &LaunchArgs) -> CliResult<(WordSpaceSession, EngineConfig)> {
    let config = load_config(args.config.as_ref())?;
    let store = load_store(&args.words, &args.vectors, args.dim)?;
    let axes = AxisFile::read(&args.axes)?.into_axis_set(&store)?;
    let session = WordSpaceSession::launch(&store, axes, &config)?;
    Ok((session, config))
}

pub fn handle_launch(args: LaunchArgs) -> CliResult<()> {
    let (session, _) = run_launch(&args)?;

    let summary = LaunchSummary {
        session: session.id().to_string(),
        stats: session.stats(),
        bounds: session.bounds(),
        beacons: session.beacons(),
        words: args.full.then(|| session.words()),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
