use super::aggregate::Frame;
use crate::core::models::protein::LoopIndex;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("At least one loop must be selected for comparison")]
    EmptyLoopSelection,

    #[error("Shift bound must be a non-negative integer, got {0}")]
    InvalidShift(isize),

    #[error("Invalid shift target '{0}'. Expected 'first', 'second' or 'both'.")]
    InvalidShiftTarget(String),

    #[error("Invalid side '{0}'. Expected 'first' or 'second'.")]
    InvalidSide(String),

    #[error("Invalid frame '{0}'. Expected LOOP:SIDE:OFFSET, e.g. 1:second:3.")]
    InvalidFrame(String),

    #[error("A fixed frame cannot be combined with a shift search (max shift {0})")]
    FrameWithShiftSearch(usize),
}

/// Which peptide of a compared pair may receive the frameshift filler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShiftTarget {
    First,
    Second,
    #[default]
    Both,
}

impl FromStr for ShiftTarget {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" | "a" => Ok(ShiftTarget::First),
            "second" | "b" => Ok(ShiftTarget::Second),
            "both" => Ok(ShiftTarget::Both),
            _ => Err(ConfigError::InvalidShiftTarget(s.to_string())),
        }
    }
}

impl fmt::Display for ShiftTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ShiftTarget::First => "first",
                ShiftTarget::Second => "second",
                ShiftTarget::Both => "both",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProteinSelection {
    #[default]
    All,
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonConfig {
    pub loops: BTreeSet<LoopIndex>,
    pub proteins_of_interest: ProteinSelection,
    pub max_shift: usize,
    pub collapse: bool,
    pub shift_target: ShiftTarget,
    /// A single loop shifted by a fixed amount instead of a shift search.
    pub frame: Option<Frame>,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            loops: BTreeSet::from([LoopIndex::FIRST]),
            proteins_of_interest: ProteinSelection::All,
            max_shift: 0,
            collapse: true,
            shift_target: ShiftTarget::Both,
            frame: None,
        }
    }
}

impl ComparisonConfig {
    pub fn loop_labels(&self) -> String {
        let labels: Vec<String> = self.loops.iter().map(ToString::to_string).collect();
        format!("[{}]", labels.join(", "))
    }
}

#[derive(Default)]
pub struct ComparisonConfigBuilder {
    loops: Option<BTreeSet<LoopIndex>>,
    proteins_of_interest: Option<Vec<String>>,
    max_shift: Option<isize>,
    collapse: Option<bool>,
    shift_target: Option<ShiftTarget>,
    frame: Option<Frame>,
}

impl ComparisonConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loops(mut self, loops: impl IntoIterator<Item = LoopIndex>) -> Self {
        self.loops = Some(loops.into_iter().collect());
        self
    }
    pub fn proteins_of_interest(mut self, ids: Vec<String>) -> Self {
        self.proteins_of_interest = Some(ids);
        self
    }
    pub fn max_shift(mut self, max_shift: isize) -> Self {
        self.max_shift = Some(max_shift);
        self
    }
    pub fn collapse(mut self, collapse: bool) -> Self {
        self.collapse = Some(collapse);
        self
    }
    pub fn shift_target(mut self, target: ShiftTarget) -> Self {
        self.shift_target = Some(target);
        self
    }
    pub fn frame(mut self, frame: Frame) -> Self {
        self.frame = Some(frame);
        self
    }

    pub fn build(self) -> Result<ComparisonConfig, ConfigError> {
        let defaults = ComparisonConfig::default();

        let loops = self.loops.unwrap_or(defaults.loops);
        if loops.is_empty() {
            return Err(ConfigError::EmptyLoopSelection);
        }

        let max_shift = match self.max_shift {
            Some(bound) => usize::try_from(bound).map_err(|_| ConfigError::InvalidShift(bound))?,
            None => defaults.max_shift,
        };
        if self.frame.is_some() && max_shift > 0 {
            return Err(ConfigError::FrameWithShiftSearch(max_shift));
        }

        Ok(ComparisonConfig {
            loops,
            proteins_of_interest: self
                .proteins_of_interest
                .map_or(ProteinSelection::All, ProteinSelection::List),
            max_shift,
            collapse: self.collapse.unwrap_or(defaults.collapse),
            shift_target: self.shift_target.unwrap_or(defaults.shift_target),
            frame: self.frame,
        })
    }
}
