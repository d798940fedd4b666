//! Command line interface definition

use crate::SplitMode;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Split a GPX track into multiple smaller files
#[derive(Parser, Debug)]
#[command(version, about, group = ArgGroup::new("mode").required(true))]
pub struct Cli {
    /// Split the track into this many files
    #[arg(short, long, group = "mode", value_name = "COUNT", value_parser = clap::value_parser!(u32).range(1..))]
    pub files: Option<u32>,

    /// Split the track into tracks of this distance (miles) each
    #[arg(short, long, group = "mode", value_name = "MILES", value_parser = clap::value_parser!(u32).range(1..))]
    pub distance: Option<u32>,

    /// GPX files to split
    #[arg(value_name = "GPX", required = true)]
    pub gpx_files: Vec<PathBuf>,

    /// Enable verbose (debug-level) logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The split mode selected on the command line
    pub fn mode(&self) -> SplitMode {
        match (self.files, self.distance) {
            (Some(count), None) => SplitMode::FileCount(count as usize),
            (None, Some(miles)) => SplitMode::DistanceMiles(f64::from(miles)),
            // The required, mutually exclusive arg group rules these out.
            _ => unreachable!("clap enforces exactly one split mode"),
        }
    }
}
