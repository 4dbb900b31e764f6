use super::{check_scan_options, load_catalogue, progress_reporter, write_output};
use crate::cli::ShiftsArgs;
use crate::config::PartialComparisonConfig;
use crate::error::Result;
use loopcmp::core::properties::scoring::PhysicochemicalScorer;
use loopcmp::workflows::compare::{one_prot_all_frames, one_prot_all_shifts};
use tracing::info;

pub fn run(args: ShiftsArgs, quiet: bool) -> Result<()> {
    let config = PartialComparisonConfig::for_args(&args.comparison)?
        .merge_with_cli(&args.comparison)?;
    check_scan_options("shifts", &args.comparison, &config.comparison)?;
    let catalogue = load_catalogue(&args.io.input)?;
    let scorer = PhysicochemicalScorer::new(config.weights)?;
    let reporter = progress_reporter(quiet);

    info!(protein = %args.protein, "Invoking the shift scan workflow...");
    let scan = one_prot_all_shifts(
        &catalogue,
        &args.protein,
        &config.comparison,
        &scorer,
        &reporter,
    )?;
    for target in &scan.targets {
        if let Some(best) = scan.best(target) {
            info!("Best shift against {}: {} ({:.2})", target, best.shift, best.score);
        }
    }
    write_output(&[scan.to_table()], args.io.output.as_ref())
}

pub fn run_frames(args: ShiftsArgs, quiet: bool) -> Result<()> {
    let config = PartialComparisonConfig::for_args(&args.comparison)?
        .merge_with_cli(&args.comparison)?;
    check_scan_options("frames", &args.comparison, &config.comparison)?;
    let catalogue = load_catalogue(&args.io.input)?;
    let scorer = PhysicochemicalScorer::new(config.weights)?;
    let reporter = progress_reporter(quiet);

    info!(protein = %args.protein, "Invoking the frame scan workflow...");
    let scan = one_prot_all_frames(
        &catalogue,
        &args.protein,
        &config.comparison,
        &scorer,
        &reporter,
    )?;
    for target in &scan.targets {
        if let Some((frame, score)) = scan.best(target) {
            info!("Best frame against {}: {} ({:.2})", target, frame, score);
        }
    }
    write_output(&[scan.to_table()], args.io.output.as_ref())
}
