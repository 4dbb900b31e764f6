//! # Motifs Module
//!
//! Rule-based detection of short structural signatures in a single peptide, such as
//! alpha-helix N-caps, C-caps, and salt bridges between residues three or four apart.
//!
//! Rules live in [`rules`] as process-wide statics. Each window rule is a set of conditions
//! on residues at fixed offsets; [`detector::find_motifs`] slides every rule across the
//! peptide and returns a structured [`detector::MotifReport`] listing all hits.

pub mod detector;
pub mod rules;
