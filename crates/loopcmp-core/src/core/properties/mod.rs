//! # Properties Module
//!
//! The residue property model shared by the comparison engine and the motif detector.
//!
//! - [`table`] - Process-wide physicochemical properties and similarity classes
//! - [`scoring`] - The [`scoring::ResidueScorer`] trait and the default physicochemical model
//! - [`matrix`] - Exhaustive residue-by-residue substitution matrix
//!
//! ```ignore
//! use loopcmp::core::properties::scoring::{PhysicochemicalScorer, ResidueScorer};
//!
//! let scorer = PhysicochemicalScorer::default();
//! let score = scorer.score_residues(AminoAcid::Tyrosine, AminoAcid::Phenylalanine);
//! ```

pub mod matrix;
pub mod scoring;
pub mod table;
