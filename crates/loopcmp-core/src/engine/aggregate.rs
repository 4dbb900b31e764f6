use super::config::{ConfigError, ShiftTarget};
use super::error::EngineError;
use super::frameshift::{
    Shift, ShiftResult, ShiftSequence, Side, best_shift, score_shift, search_frames,
};
use crate::core::models::peptide::Peptide;
use crate::core::models::protein::{LoopIndex, Protein};
use crate::core::properties::scoring::ResidueScorer;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// The combined score of a protein pair over a set of loops.
#[derive(Debug, Clone, PartialEq)]
pub enum Aggregate {
    /// Sum of every loop's best frame.
    Collapsed(f64),
    /// One summed score per shift, in search order.
    PerShift(Vec<(Shift, f64)>),
}

impl Aggregate {
    /// The preferred score: the collapsed value, or the best per-shift sum.
    pub fn best_score(&self) -> f64 {
        match self {
            Aggregate::Collapsed(score) => *score,
            Aggregate::PerShift(_) => self.best_shift().map_or(0.0, |r| r.score),
        }
    }

    pub fn best_shift(&self) -> Option<ShiftResult> {
        match self {
            Aggregate::Collapsed(_) => None,
            Aggregate::PerShift(scores) => best_shift(
                scores
                    .iter()
                    .map(|&(shift, score)| ShiftResult { shift, score }),
            ),
        }
    }
}

fn loop_pair<'p>(
    a: &'p Protein,
    b: &'p Protein,
    index: LoopIndex,
) -> Result<(&'p Peptide, &'p Peptide), EngineError> {
    let lookup = |protein: &'p Protein| {
        protein.peptide(index).ok_or_else(|| EngineError::MissingLoop {
            protein: protein.id.clone(),
            loop_index: index,
        })
    };
    Ok((lookup(a)?, lookup(b)?))
}

/// Scores two proteins over the requested loops.
///
/// Every requested loop must exist in both proteins. With `collapse` each loop contributes
/// its best frame; without it the loops are summed frame by frame.
pub fn aggregate<S: ResidueScorer + ?Sized>(
    scorer: &S,
    a: &Protein,
    b: &Protein,
    loops: &BTreeSet<LoopIndex>,
    max_shift: usize,
    target: ShiftTarget,
    collapse: bool,
) -> Result<Aggregate, EngineError> {
    if loops.is_empty() {
        return Err(ConfigError::EmptyLoopSelection.into());
    }

    if collapse {
        let mut total = 0.0;
        for &index in loops {
            let (first, second) = loop_pair(a, b, index)?;
            let best = best_shift(search_frames(scorer, first, second, target, max_shift)?)
                .map_or(0.0, |r| r.score);
            total += best;
        }
        return Ok(Aggregate::Collapsed(total));
    }

    let mut totals: Vec<(Shift, f64)> = Vec::new();
    for &index in loops {
        let (first, second) = loop_pair(a, b, index)?;
        let results = search_frames(scorer, first, second, target, max_shift)?;
        if totals.is_empty() {
            totals = results.map(|r| (r.shift, r.score)).collect();
        } else {
            for (slot, result) in totals.iter_mut().zip(results) {
                slot.1 += result.score;
            }
        }
    }
    Ok(Aggregate::PerShift(totals))
}

/// A single shift applied to a single loop, leaving every other loop unshifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame {
    pub loop_index: LoopIndex,
    pub shift: Shift,
}

impl Frame {
    pub fn unshifted(loop_index: LoopIndex) -> Self {
        Self {
            loop_index,
            shift: Shift::NONE,
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shift.is_unshifted() {
            write!(f, "unshifted")
        } else {
            write!(f, "{} {}", self.loop_index, self.shift)
        }
    }
}

/// Parses `LOOP:SIDE:OFFSET`, e.g. `1:second:3` or `loop_1:first:2`. Offset 0 is the
/// unshifted frame.
impl FromStr for Frame {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidFrame(s.to_string());
        let mut parts = s.split(':').map(str::trim);
        let (Some(loop_part), Some(side), Some(offset), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let loop_index = loop_part
            .strip_prefix("loop_")
            .unwrap_or(loop_part)
            .parse::<usize>()
            .ok()
            .and_then(|n| LoopIndex::new(n).ok())
            .ok_or_else(invalid)?;
        let side: Side = side.parse()?;
        let offset: usize = offset.parse().map_err(|_| invalid())?;

        Ok(Frame {
            loop_index,
            shift: if offset == 0 {
                Shift::NONE
            } else {
                Shift::new(side, offset)
            },
        })
    }
}

/// The unshifted frame, then every non-zero shift of each loop on its own.
pub fn loop_frames(
    loops: &BTreeSet<LoopIndex>,
    target: ShiftTarget,
    max_shift: usize,
) -> Result<Vec<Frame>, EngineError> {
    let Some(&first) = loops.first() else {
        return Err(ConfigError::EmptyLoopSelection.into());
    };
    let shifts: Vec<Shift> = ShiftSequence::new(target, max_shift)?
        .filter(|shift| !shift.is_unshifted())
        .collect();

    let mut frames = Vec::with_capacity(1 + loops.len() * shifts.len());
    frames.push(Frame::unshifted(first));
    for &loop_index in loops {
        frames.extend(shifts.iter().map(|&shift| Frame { loop_index, shift }));
    }
    Ok(frames)
}

/// Sums the requested loops with only `frame.loop_index` shifted.
///
/// The frame's loop is scored even when it is not in `loops`.
pub fn score_fixed_frame<S: ResidueScorer + ?Sized>(
    scorer: &S,
    a: &Protein,
    b: &Protein,
    loops: &BTreeSet<LoopIndex>,
    frame: Frame,
) -> Result<f64, EngineError> {
    let mut total = 0.0;
    for index in loops.iter().copied().chain(
        (!loops.contains(&frame.loop_index)).then_some(frame.loop_index),
    ) {
        let (first, second) = loop_pair(a, b, index)?;
        let shift = if index == frame.loop_index {
            frame.shift
        } else {
            Shift::NONE
        };
        total += score_shift(scorer, first, second, shift);
    }
    Ok(total)
}
