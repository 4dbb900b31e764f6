use crate::core::models::amino_acid::AminoAcid;
use phf::{Map, phf_map};

pub const MAX_HYDROPHOBICITY: f64 = 6.0;
pub const MAX_SIZE: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidueProperties {
    /// Hydrophilicity class, 0 for the most hydrophobic (F, W) up to 6 for charged residues.
    pub hydrophobicity: f64,
    /// Side-chain size class, 0 (G, A, S, C) to 3 (W, Y, R).
    pub size: f64,
    /// Formal side-chain charge at neutral pH.
    pub charge: i8,
}

#[rustfmt::skip]
static PROPERTY_TABLE: Map<char, ResidueProperties> = phf_map! {
    // --- Aromatic, most hydrophobic ---
    'F' => ResidueProperties { hydrophobicity: 0.0,  size: 2.0, charge: 0 },
    'W' => ResidueProperties { hydrophobicity: 0.0,  size: 3.0, charge: 0 },

    // --- Aliphatic and sulfur-containing ---
    'I' => ResidueProperties { hydrophobicity: 0.75, size: 2.0, charge: 0 },
    'L' => ResidueProperties { hydrophobicity: 0.75, size: 2.0, charge: 0 },
    'M' => ResidueProperties { hydrophobicity: 0.75, size: 2.0, charge: 0 },
    'Y' => ResidueProperties { hydrophobicity: 0.75, size: 3.0, charge: 0 },
    'V' => ResidueProperties { hydrophobicity: 1.5,  size: 1.0, charge: 0 },
    'A' => ResidueProperties { hydrophobicity: 2.25, size: 0.0, charge: 0 },
    'P' => ResidueProperties { hydrophobicity: 2.25, size: 1.0, charge: 0 },
    'G' => ResidueProperties { hydrophobicity: 3.0,  size: 0.0, charge: 0 },

    // --- Small polar ---
    'S' => ResidueProperties { hydrophobicity: 4.0,  size: 0.0, charge: 0 },
    'T' => ResidueProperties { hydrophobicity: 4.0,  size: 1.0, charge: 0 },
    'C' => ResidueProperties { hydrophobicity: 4.0,  size: 0.0, charge: 0 },

    // --- Amides and histidine ---
    'N' => ResidueProperties { hydrophobicity: 5.0,  size: 1.0, charge: 0 },
    'Q' => ResidueProperties { hydrophobicity: 5.0,  size: 2.0, charge: 0 },
    'H' => ResidueProperties { hydrophobicity: 5.0,  size: 2.0, charge: 0 },

    // --- Charged ---
    'D' => ResidueProperties { hydrophobicity: 6.0,  size: 1.0, charge: -1 },
    'E' => ResidueProperties { hydrophobicity: 6.0,  size: 2.0, charge: -1 },
    'R' => ResidueProperties { hydrophobicity: 6.0,  size: 3.0, charge: 1 },
    'K' => ResidueProperties { hydrophobicity: 6.0,  size: 2.0, charge: 1 },
};

/// Similarity classes for non-identical residues, checked in order; the first class
/// holding both residues decides the score. "YF" must precede "HYWF".
pub static SIMILARITY_CLASSES: [(&str, f64); 7] = [
    ("RHK", 1.0),  // positively charged
    ("DE", 1.0),   // negatively charged
    ("ND", 1.5),   // Asx
    ("QE", 1.5),   // Glx
    ("TVLI", 1.0), // beta-branched
    ("YF", 1.5),
    ("HYWF", 1.0), // aromatic
];

/// Identity bonus for residues whose conservation matters most.
pub const CONSERVED_IDENTITY_SCORE: f64 = 3.0;
pub const IDENTITY_SCORE: f64 = 2.0;
const CONSERVED_RESIDUES: &str = "GPC";

pub fn properties(residue: AminoAcid) -> &'static ResidueProperties {
    // Every variant has a table entry; the test below checks the table is complete.
    &PROPERTY_TABLE[&residue.code()]
}

/// The categorical part of the similarity score between two residues.
pub fn similarity_class_score(a: AminoAcid, b: AminoAcid) -> f64 {
    if a == b {
        return if CONSERVED_RESIDUES.contains(a.code()) {
            CONSERVED_IDENTITY_SCORE
        } else {
            IDENTITY_SCORE
        };
    }
    SIMILARITY_CLASSES
        .iter()
        .find(|(class, _)| class.contains(a.code()) && class.contains(b.code()))
        .map_or(0.0, |&(_, score)| score)
}
