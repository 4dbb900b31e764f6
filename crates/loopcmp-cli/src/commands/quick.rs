use super::{load_catalogue, progress_reporter, write_output};
use crate::cli::QuickArgs;
use crate::config::{load_weights, parse_loops};
use crate::error::Result;
use loopcmp::core::properties::scoring::PhysicochemicalScorer;
use loopcmp::workflows::quick::quick_analysis;
use std::collections::BTreeSet;
use tracing::info;

pub fn run(args: QuickArgs, quiet: bool) -> Result<()> {
    let loops: BTreeSet<_> = parse_loops(&args.loops)?.into_iter().collect();
    let scorer = PhysicochemicalScorer::new(load_weights(&args.scorer)?)?;
    let catalogue = load_catalogue(&args.io.input)?;
    let reporter = progress_reporter(quiet);

    info!("Invoking the quick analysis workflow...");
    let results = quick_analysis(&catalogue, &loops, &scorer, &reporter)?;
    let tables: Vec<_> = results.iter().map(|(_, matrix)| matrix.to_table()).collect();
    write_output(&tables, args.io.output.as_ref())
}
