use super::error::EngineError;
use crate::core::models::amino_acid::Symbol;
use crate::core::models::peptide::Peptide;
use crate::core::properties::scoring::ResidueScorer;

/// Sums the position-by-position scores of two equal-length peptides.
pub fn compare<S: ResidueScorer + ?Sized>(
    scorer: &S,
    first: &Peptide,
    second: &Peptide,
) -> Result<f64, EngineError> {
    check_lengths(first.len(), second.len())?;
    Ok(score_aligned(scorer, first.symbols(), second.symbols()))
}

/// Like [`compare`], for framed symbol sequences that may contain the filler.
pub fn compare_symbols<S: ResidueScorer + ?Sized>(
    scorer: &S,
    first: &[Symbol],
    second: &[Symbol],
) -> Result<f64, EngineError> {
    check_lengths(first.len(), second.len())?;
    Ok(score_aligned(
        scorer,
        first.iter().copied(),
        second.iter().copied(),
    ))
}

/// Scores two sequences position by position, stopping at the end of the shorter one.
pub(crate) fn score_aligned<S: ResidueScorer + ?Sized>(
    scorer: &S,
    first: impl IntoIterator<Item = Symbol>,
    second: impl IntoIterator<Item = Symbol>,
) -> f64 {
    first
        .into_iter()
        .zip(second)
        .map(|(a, b)| scorer.score(a, b))
        .sum()
}

fn check_lengths(left: usize, right: usize) -> Result<(), EngineError> {
    if left != right {
        return Err(EngineError::LengthMismatch { left, right });
    }
    Ok(())
}
