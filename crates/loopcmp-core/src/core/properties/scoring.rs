use super::table::{self, MAX_HYDROPHOBICITY, MAX_SIZE};
use crate::core::models::amino_acid::{AminoAcid, Symbol};
use crate::core::models::error::ModelError;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Score of the frameshift filler against any symbol, itself included.
pub const NEUTRAL_SCORE: f64 = 0.0;

/// A symmetric similarity model over amino acids.
///
/// Implementors only describe real residue pairs. The provided [`score`](Self::score)
/// method takes care of the filler, so every model is neutral towards it.
///
/// Implementations must be symmetric, and a residue's score against itself must be at least
/// as high as its score against any other residue.
pub trait ResidueScorer {
    fn score_residues(&self, a: AminoAcid, b: AminoAcid) -> f64;

    #[inline]
    fn score(&self, a: Symbol, b: Symbol) -> f64 {
        match (a, b) {
            (Symbol::Residue(a), Symbol::Residue(b)) => self.score_residues(a, b),
            _ => NEUTRAL_SCORE,
        }
    }
}

impl<S: ResidueScorer + ?Sized> ResidueScorer for &S {
    fn score_residues(&self, a: AminoAcid, b: AminoAcid) -> f64 {
        (**self).score_residues(a, b)
    }
}

/// Scores two one-letter codes, accepting the filler code.
pub fn score_codes<S: ResidueScorer + ?Sized>(
    scorer: &S,
    a: char,
    b: char,
) -> Result<f64, ModelError> {
    let parse = |symbol: char, position: usize| {
        Symbol::from_code(symbol).ok_or(ModelError::UnknownResidue { symbol, position })
    };
    Ok(scorer.score(parse(a, 0)?, parse(b, 1)?))
}

#[derive(Debug, Error)]
pub enum WeightsError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Weight '{name}' must be a finite, non-negative number (got {value})")]
    InvalidWeight { name: &'static str, value: f64 },
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ScoringWeights {
    pub misc: f64,
    pub hydrophobicity: f64,
    pub size: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            misc: 1.8,
            hydrophobicity: 1.0,
            size: 1.2,
        }
    }
}

impl ScoringWeights {
    /// Reads weights from a TOML file. Keys left out keep their default values.
    pub fn load(path: &Path) -> Result<Self, WeightsError> {
        let content = std::fs::read_to_string(path).map_err(|e| WeightsError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let weights: Self = toml::from_str(&content).map_err(|e| WeightsError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        weights.validate()?;
        Ok(weights)
    }

    pub fn validate(&self) -> Result<(), WeightsError> {
        for (name, value) in [
            ("misc", self.misc),
            ("hydrophobicity", self.hydrophobicity),
            ("size", self.size),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(WeightsError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

/// BLOSUM-like similarity built from hydrophobicity, side-chain size and categorical
/// similarity classes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhysicochemicalScorer {
    weights: ScoringWeights,
}

impl PhysicochemicalScorer {
    pub fn new(weights: ScoringWeights) -> Result<Self, WeightsError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }
}

impl ResidueScorer for PhysicochemicalScorer {
    fn score_residues(&self, a: AminoAcid, b: AminoAcid) -> f64 {
        let (pa, pb) = (table::properties(a), table::properties(b));
        let misc = table::similarity_class_score(a, b);
        let hydro = MAX_HYDROPHOBICITY - (pa.hydrophobicity - pb.hydrophobicity).abs();
        let size = MAX_SIZE - (pa.size - pb.size).abs();
        misc * self.weights.misc + hydro * self.weights.hydrophobicity + size * self.weights.size
    }
}
