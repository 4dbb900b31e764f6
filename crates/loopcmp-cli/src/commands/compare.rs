use super::{check_scan_options, load_catalogue, progress_reporter, write_output};
use crate::cli::CompareArgs;
use crate::config::PartialComparisonConfig;
use crate::error::Result;
use loopcmp::core::properties::scoring::PhysicochemicalScorer;
use loopcmp::workflows::compare::{all_prots_all_shifts, full_prot_comparison};
use tracing::info;

pub fn run(args: CompareArgs, quiet: bool) -> Result<()> {
    let config = PartialComparisonConfig::for_args(&args.comparison)?
        .merge_with_cli(&args.comparison)?;
    let catalogue = load_catalogue(&args.io.input)?;
    let scorer = PhysicochemicalScorer::new(config.weights)?;
    let reporter = progress_reporter(quiet);

    info!(
        loops = %config.comparison.loop_labels(),
        max_shift = config.comparison.max_shift,
        "Invoking the full comparison workflow..."
    );
    let matrix = full_prot_comparison(&catalogue, &config.comparison, &scorer, &reporter)?;
    write_output(&[matrix.to_table()], args.io.output.as_ref())
}

pub fn run_best_shifts(args: CompareArgs, quiet: bool) -> Result<()> {
    let config = PartialComparisonConfig::for_args(&args.comparison)?
        .merge_with_cli(&args.comparison)?;
    check_scan_options("best-shifts", &args.comparison, &config.comparison)?;
    let catalogue = load_catalogue(&args.io.input)?;
    let scorer = PhysicochemicalScorer::new(config.weights)?;
    let reporter = progress_reporter(quiet);

    info!("Invoking the best-shift workflow...");
    let matrix = all_prots_all_shifts(&catalogue, &config.comparison, &scorer, &reporter)?;
    write_output(&[matrix.to_table()], args.io.output.as_ref())
}
