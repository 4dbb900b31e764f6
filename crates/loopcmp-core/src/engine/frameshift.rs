use super::config::{ConfigError, ShiftTarget};
use super::error::EngineError;
use super::pairwise::score_aligned;
use crate::core::models::peptide::Peptide;
use crate::core::properties::scoring::ResidueScorer;
use std::fmt;
use std::str::FromStr;

/// The peptide of a compared pair that receives the filler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    First,
    Second,
}

impl FromStr for Side {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" | "a" => Ok(Side::First),
            "second" | "b" => Ok(Side::Second),
            _ => Err(ConfigError::InvalidSide(s.to_string())),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => write!(f, "first"),
            Side::Second => write!(f, "second"),
        }
    }
}

/// One frame of a comparison.
///
/// Offset 0 is the unshifted frame. Offset `k >= 1` places the filler directly before the
/// `k`-th residue of the chosen peptide; an offset past the last residue leaves the peptide
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shift {
    pub side: Side,
    pub offset: usize,
}

impl Shift {
    pub const NONE: Shift = Shift {
        side: Side::First,
        offset: 0,
    };

    pub fn new(side: Side, offset: usize) -> Self {
        Self { side, offset }
    }

    pub fn is_unshifted(&self) -> bool {
        self.offset == 0
    }

    /// The 0-based residue index the filler is placed before, if any.
    pub fn insertion_index(&self) -> Option<usize> {
        self.offset.checked_sub(1)
    }

    fn rank(&self) -> (usize, Side) {
        (self.offset, self.side)
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            0 => write!(f, "unshifted"),
            k => write!(f, "{}+{k}", self.side),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftResult {
    pub shift: Shift,
    pub score: f64,
}

impl ShiftResult {
    /// Whether this result is preferred over `other`: higher score first, then the smaller
    /// offset, then the first peptide over the second.
    pub fn beats(&self, other: &ShiftResult) -> bool {
        match self.score.total_cmp(&other.score) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Equal => self.shift.rank() < other.shift.rank(),
        }
    }
}

/// Every shift evaluated for a target and bound, in reporting order.
///
/// With [`ShiftTarget::Both`] the unshifted frame appears once, followed by the first
/// peptide's offsets and then the second's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftSequence {
    target: ShiftTarget,
    max_shift: usize,
    next: usize,
    end: usize,
}

impl ShiftSequence {
    /// Fails when the number of frames does not fit in a `usize`.
    pub fn new(target: ShiftTarget, max_shift: usize) -> Result<Self, EngineError> {
        let end = match target {
            ShiftTarget::First | ShiftTarget::Second => max_shift.checked_add(1),
            ShiftTarget::Both => max_shift.checked_mul(2).and_then(|n| n.checked_add(1)),
        }
        .ok_or(EngineError::ShiftBoundTooLarge(max_shift))?;
        Ok(Self {
            target,
            max_shift,
            next: 0,
            end,
        })
    }

    fn shift_at(&self, position: usize) -> Shift {
        match self.target {
            ShiftTarget::First => Shift::new(Side::First, position),
            ShiftTarget::Second => Shift::new(Side::Second, position),
            ShiftTarget::Both if position <= self.max_shift => Shift::new(Side::First, position),
            ShiftTarget::Both => Shift::new(Side::Second, position - self.max_shift),
        }
    }
}

impl Iterator for ShiftSequence {
    type Item = Shift;

    fn next(&mut self) -> Option<Shift> {
        if self.next >= self.end {
            return None;
        }
        let shift = self.shift_at(self.next);
        self.next += 1;
        Some(shift)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ShiftSequence {}

/// Scores one frame of a pair. Both framed sequences are cut to the shorter length, so
/// trailing positions without a partner are left out.
pub fn score_shift<S: ResidueScorer + ?Sized>(
    scorer: &S,
    first: &Peptide,
    second: &Peptide,
    shift: Shift,
) -> f64 {
    let index = shift.insertion_index();
    match shift.side {
        Side::First => score_aligned(scorer, first.framed(index), second.symbols()),
        Side::Second => score_aligned(scorer, first.symbols(), second.framed(index)),
    }
}

/// A lazy scan over the frames of one peptide pair.
///
/// Each call to `next` scores one more frame. Cloning before traversal gives an
/// independent scan over the same frames.
pub struct FrameshiftSearch<'a, S: ?Sized> {
    scorer: &'a S,
    first: &'a Peptide,
    second: &'a Peptide,
    shifts: ShiftSequence,
}

impl<S: ?Sized> Clone for FrameshiftSearch<'_, S> {
    fn clone(&self) -> Self {
        Self {
            scorer: self.scorer,
            first: self.first,
            second: self.second,
            shifts: self.shifts.clone(),
        }
    }
}

impl<S: ResidueScorer + ?Sized> Iterator for FrameshiftSearch<'_, S> {
    type Item = ShiftResult;

    fn next(&mut self) -> Option<ShiftResult> {
        let shift = self.shifts.next()?;
        Some(ShiftResult {
            shift,
            score: score_shift(self.scorer, self.first, self.second, shift),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.shifts.size_hint()
    }
}

impl<S: ResidueScorer + ?Sized> ExactSizeIterator for FrameshiftSearch<'_, S> {}

pub fn search<'a, S: ResidueScorer + ?Sized>(
    scorer: &'a S,
    first: &'a Peptide,
    second: &'a Peptide,
    target: ShiftTarget,
    max_shift: isize,
) -> Result<FrameshiftSearch<'a, S>, EngineError> {
    let max_shift = usize::try_from(max_shift).map_err(|_| EngineError::InvalidShift(max_shift))?;
    search_frames(scorer, first, second, target, max_shift)
}

pub(crate) fn search_frames<'a, S: ResidueScorer + ?Sized>(
    scorer: &'a S,
    first: &'a Peptide,
    second: &'a Peptide,
    target: ShiftTarget,
    max_shift: usize,
) -> Result<FrameshiftSearch<'a, S>, EngineError> {
    Ok(FrameshiftSearch {
        scorer,
        first,
        second,
        shifts: ShiftSequence::new(target, max_shift)?,
    })
}

/// Picks the preferred result under [`ShiftResult::beats`].
pub fn best_shift(results: impl IntoIterator<Item = ShiftResult>) -> Option<ShiftResult> {
    results.into_iter().fold(None, |best, candidate| match best {
        Some(current) if !candidate.beats(&current) => Some(current),
        _ => Some(candidate),
    })
}
