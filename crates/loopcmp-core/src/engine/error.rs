use thiserror::Error;

use super::config::ConfigError;
use crate::core::models::error::ModelError;
use crate::core::models::protein::LoopIndex;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Invalid comparison configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Cannot compare peptides of different lengths ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error("{loop_index} is missing from protein '{protein}'")]
    MissingLoop {
        protein: String,
        loop_index: LoopIndex,
    },

    #[error("Shift bound must be a non-negative integer, got {0}")]
    InvalidShift(isize),

    #[error("Shift bound {0} is too large to enumerate")]
    ShiftBoundTooLarge(usize),

    #[error("Protein '{0}' is not in the catalogue")]
    UnknownProtein(String),
}
