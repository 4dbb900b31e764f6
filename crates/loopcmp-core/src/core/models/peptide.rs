use super::amino_acid::{AminoAcid, Symbol};
use super::error::ModelError;
use std::fmt;
use std::str::FromStr;

/// An immutable, ordered sequence of real residues.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Peptide {
    residues: Vec<AminoAcid>,
}

impl Peptide {
    /// Builds a peptide from residues. Unlike parsing, this permits an empty peptide.
    pub fn new(residues: Vec<AminoAcid>) -> Self {
        Self { residues }
    }

    pub fn residues(&self) -> &[AminoAcid] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn symbols(&self) -> impl ExactSizeIterator<Item = Symbol> + '_ {
        self.residues.iter().copied().map(Symbol::Residue)
    }

    /// Returns the peptide with a filler placed directly before the residue at `index`.
    ///
    /// An index at or past the end leaves the sequence untouched, so the frame is identical
    /// to the unshifted one.
    pub fn framed(&self, index: Option<usize>) -> Vec<Symbol> {
        let mut symbols = Vec::with_capacity(self.len() + 1);
        for (i, residue) in self.residues.iter().enumerate() {
            if index == Some(i) {
                symbols.push(Symbol::Filler);
            }
            symbols.push(Symbol::Residue(*residue));
        }
        symbols
    }
}

impl FromStr for Peptide {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(ModelError::EmptyPeptide);
        }
        let residues = text
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                AminoAcid::from_code(symbol)
                    .ok_or(ModelError::UnknownResidue { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { residues })
    }
}

impl From<Vec<AminoAcid>> for Peptide {
    fn from(residues: Vec<AminoAcid>) -> Self {
        Self::new(residues)
    }
}

impl fmt::Display for Peptide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for residue in &self.residues {
            write!(f, "{}", residue.code())?;
        }
        Ok(())
    }
}
