use clap::{Parser, ValueHint};
use std::path::PathBuf;

/// Render a GeoJSON pipe network as a zoomable SVG flow map
#[derive(Parser, Debug)]
#[command(name = "pipeflow", version, about)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Input GeoJSON FeatureCollection with LineString/MultiLineString features
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output SVG file (must be a file path; "-" is rejected)
    #[arg(value_hint = ValueHint::FilePath)]
    pub output: PathBuf,
}
