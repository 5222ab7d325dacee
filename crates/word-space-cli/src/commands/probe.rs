//! `probe`: launch a session, then query it from a viewer position.

use clap::Args;
use serde::Serialize;

use word_space_flight::{FlightIndex, VisibilityBand};

use crate::commands::launch::{run_launch, LaunchArgs};
use crate::error::{CliError, CliResult};

#[derive(Args)]
pub struct ProbeArgs {
    #[command(flatten)]
    pub launch: LaunchArgs,

    /// Viewer position as "x,y,z"
    #[arg(long, value_parser = parse_position)]
    pub position: [f32; 3],

    /// Number of nearest words to report; defaults to the configured value
    #[arg(long)]
    pub k: Option<usize>,
}

fn parse_position(raw: &str) -> Result<[f32; 3], String> {
    let parts: Vec<&str> = raw.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z got {:?}", raw));
    }
    let mut out = [0.0_f32; 3];
    for (slot, part) in out.iter_mut().zip(parts.iter()) {
        *slot = part
            .trim()
            .parse::<f32>()
            .map_err(|e| format!("bad coordinate {:?}: {}", part, e))?;
    }
    Ok(out)
}

#[derive(Serialize)]
struct BandCounts {
    too_close: usize,
    fade_in: usize,
    full: usize,
    fade_out: usize,
    culled: usize,
}

#[derive(Serialize)]
struct NearbyWord {
    word: String,
    distance: f32,
    opacity: f32,
}

#[derive(Serialize)]
struct ProbeReport {
    session: String,
    position: [f32; 3],
    bands: BandCounts,
    nearest: Vec<NearbyWord>,
}

pub fn handle_probe(args: ProbeArgs) -> CliResult<()> {
    let (session, config) = run_launch(&args.launch)?;

    let mut index =
        FlightIndex::build(session.words(), config.lod).map_err(CliError::Flight)?;
    index.update_visibility(args.position);

    let mut bands = BandCounts {
        too_close: 0,
        fade_in: 0,
        full: 0,
        fade_out: 0,
        culled: 0,
    };
    for i in 0..index.len() {
        match index.band(i) {
            VisibilityBand::TooClose => bands.too_close += 1,
            VisibilityBand::FadeIn => bands.fade_in += 1,
            VisibilityBand::Full => bands.full += 1,
            VisibilityBand::FadeOut => bands.fade_out += 1,
            VisibilityBand::Culled => bands.culled += 1,
        }
    }

    let k = args.k.unwrap_or(config.lod.nearest_k);
    let nearest = index
        .nearest(args.position, k)
        .into_iter()
        .map(|n| NearbyWord {
            word: n.word.to_string(),
            distance: n.distance,
            opacity: index.opacity(n.index),
        })
        .collect();

    let report = ProbeReport {
        session: session.id().to_string(),
        position: args.position,
        bands,
        nearest,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("1,2,3").unwrap(), [1.0, 2.0, 3.0]);
        assert_eq!(
            parse_position(" -1.5, 0.0, 2.25 ").unwrap(),
            [-1.5, 0.0, 2.25]
        );
        assert!(parse_position("1,2").is_err());
        assert!(parse_position("a,b,c").is_err());
    }
}
