use super::write_output;
use crate::cli::MatrixArgs;
use crate::config::load_weights;
use crate::error::Result;
use loopcmp::core::properties::matrix::build_matrix;
use loopcmp::core::properties::scoring::PhysicochemicalScorer;
use tracing::info;

pub fn run(args: MatrixArgs) -> Result<()> {
    let scorer = PhysicochemicalScorer::new(load_weights(&args.scorer)?)?;
    info!(weights = ?scorer.weights(), "Building the amino acid comparison matrix.");
    let matrix = build_matrix(&scorer);
    write_output(&[matrix.to_table()], args.output.as_ref())
}
