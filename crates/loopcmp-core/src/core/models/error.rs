use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unknown residue symbol '{symbol}' at position {position}")]
    UnknownResidue { symbol: char, position: usize },

    #[error("Peptide sequence is empty")]
    EmptyPeptide,

    #[error("Loop indices start at 1, got {0}")]
    InvalidLoopIndex(usize),

    #[error("Protein '{protein}' defines loop {loop_index} more than once")]
    DuplicateLoop { protein: String, loop_index: usize },

    #[error("Protein '{0}' appears more than once in the catalogue")]
    DuplicateProtein(String),
}
