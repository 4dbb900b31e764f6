//! # Models Module
//!
//! Plain data types describing what gets compared: the amino-acid alphabet, peptides,
//! numbered loops, proteins, and the read-only catalogue of proteins.
//!
//! - [`amino_acid`] - The twenty residues plus the reserved frameshift filler
//! - [`peptide`] - Immutable residue sequences and their filler-inserted frames
//! - [`protein`] - Loop indices, loops, and proteins
//! - [`catalogue`] - Ordered, read-only protein collection
//! - [`table`] - Labeled score tables handed to output sinks

pub mod amino_acid;
pub mod catalogue;
pub mod error;
pub mod peptide;
pub mod protein;
pub mod table;
