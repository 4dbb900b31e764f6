use super::error::ModelError;
use std::fmt;

/// The one-letter code reserved for the frameshift filler.
pub const FILLER_CODE: char = 'X';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AminoAcid {
    // --- Aliphatic, Nonpolar ---
    Alanine,    // A
    Glycine,    // G
    Isoleucine, // I
    Leucine,    // L
    Proline,    // P
    Valine,     // V

    // --- Aromatic ---
    Phenylalanine, // F
    Tryptophan,    // W
    Tyrosine,      // Y

    // --- Polar, Uncharged ---
    Asparagine, // N
    Cysteine,   // C
    Glutamine,  // Q
    Serine,     // S
    Threonine,  // T
    Methionine, // M

    // --- Positively Charged (Basic) ---
    Arginine,  // R
    Histidine, // H
    Lysine,    // K

    // --- Negatively Charged (Acidic) ---
    AsparticAcid, // D
    GlutamicAcid, // E
}

impl AminoAcid {
    /// All twenty residues, in the row/column order used for substitution matrices.
    pub const ALL: [AminoAcid; 20] = [
        AminoAcid::Alanine,
        AminoAcid::Cysteine,
        AminoAcid::AsparticAcid,
        AminoAcid::GlutamicAcid,
        AminoAcid::Phenylalanine,
        AminoAcid::Glycine,
        AminoAcid::Histidine,
        AminoAcid::Isoleucine,
        AminoAcid::Lysine,
        AminoAcid::Leucine,
        AminoAcid::Methionine,
        AminoAcid::Asparagine,
        AminoAcid::Glutamine,
        AminoAcid::Proline,
        AminoAcid::Arginine,
        AminoAcid::Serine,
        AminoAcid::Threonine,
        AminoAcid::Valine,
        AminoAcid::Tryptophan,
        AminoAcid::Tyrosine,
    ];

    pub fn from_code(code: char) -> Option<Self> {
        let residue = match code.to_ascii_uppercase() {
            'A' => AminoAcid::Alanine,
            'C' => AminoAcid::Cysteine,
            'D' => AminoAcid::AsparticAcid,
            'E' => AminoAcid::GlutamicAcid,
            'F' => AminoAcid::Phenylalanine,
            'G' => AminoAcid::Glycine,
            'H' => AminoAcid::Histidine,
            'I' => AminoAcid::Isoleucine,
            'K' => AminoAcid::Lysine,
            'L' => AminoAcid::Leucine,
            'M' => AminoAcid::Methionine,
            'N' => AminoAcid::Asparagine,
            'P' => AminoAcid::Proline,
            'Q' => AminoAcid::Glutamine,
            'R' => AminoAcid::Arginine,
            'S' => AminoAcid::Serine,
            'T' => AminoAcid::Threonine,
            'V' => AminoAcid::Valine,
            'W' => AminoAcid::Tryptophan,
            'Y' => AminoAcid::Tyrosine,
            _ => return None,
        };
        Some(residue)
    }

    pub fn code(self) -> char {
        match self {
            AminoAcid::Alanine => 'A',
            AminoAcid::Cysteine => 'C',
            AminoAcid::AsparticAcid => 'D',
            AminoAcid::GlutamicAcid => 'E',
            AminoAcid::Phenylalanine => 'F',
            AminoAcid::Glycine => 'G',
            AminoAcid::Histidine => 'H',
            AminoAcid::Isoleucine => 'I',
            AminoAcid::Lysine => 'K',
            AminoAcid::Leucine => 'L',
            AminoAcid::Methionine => 'M',
            AminoAcid::Asparagine => 'N',
            AminoAcid::Proline => 'P',
            AminoAcid::Glutamine => 'Q',
            AminoAcid::Arginine => 'R',
            AminoAcid::Serine => 'S',
            AminoAcid::Threonine => 'T',
            AminoAcid::Valine => 'V',
            AminoAcid::Tryptophan => 'W',
            AminoAcid::Tyrosine => 'Y',
        }
    }

    pub fn to_three_letter(self) -> &'static str {
        match self {
            AminoAcid::Alanine => "ALA",
            AminoAcid::Cysteine => "CYS",
            AminoAcid::AsparticAcid => "ASP",
            AminoAcid::GlutamicAcid => "GLU",
            AminoAcid::Phenylalanine => "PHE",
            AminoAcid::Glycine => "GLY",
            AminoAcid::Histidine => "HIS",
            AminoAcid::Isoleucine => "ILE",
            AminoAcid::Lysine => "LYS",
            AminoAcid::Leucine => "LEU",
            AminoAcid::Methionine => "MET",
            AminoAcid::Asparagine => "ASN",
            AminoAcid::Proline => "PRO",
            AminoAcid::Glutamine => "GLN",
            AminoAcid::Arginine => "ARG",
            AminoAcid::Serine => "SER",
            AminoAcid::Threonine => "THR",
            AminoAcid::Valine => "VAL",
            AminoAcid::Tryptophan => "TRP",
            AminoAcid::Tyrosine => "TYR",
        }
    }
}

impl TryFrom<char> for AminoAcid {
    type Error = ModelError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        AminoAcid::from_code(code).ok_or(ModelError::UnknownResidue {
            symbol: code,
            position: 0,
        })
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A position in a framed sequence: either a real residue or the frameshift filler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Residue(AminoAcid),
    Filler,
}

impl Symbol {
    /// Parses a one-letter code, accepting the filler code as well as real residues.
    pub fn from_code(code: char) -> Option<Self> {
        if code.eq_ignore_ascii_case(&FILLER_CODE) {
            Some(Symbol::Filler)
        } else {
            AminoAcid::from_code(code).map(Symbol::Residue)
        }
    }

    pub fn code(self) -> char {
        match self {
            Symbol::Residue(residue) => residue.code(),
            Symbol::Filler => FILLER_CODE,
        }
    }

    pub fn residue(self) -> Option<AminoAcid> {
        match self {
            Symbol::Residue(residue) => Some(residue),
            Symbol::Filler => None,
        }
    }
}

impl From<AminoAcid> for Symbol {
    fn from(residue: AminoAcid) -> Self {
        Symbol::Residue(residue)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
