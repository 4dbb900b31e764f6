use super::error::ModelError;
use super::peptide::Peptide;
use std::collections::BTreeMap;
use std::fmt;

/// A 1-based loop number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoopIndex(usize);

impl LoopIndex {
    pub const FIRST: LoopIndex = LoopIndex(1);

    pub fn new(index: usize) -> Result<Self, ModelError> {
        if index == 0 {
            return Err(ModelError::InvalidLoopIndex(index));
        }
        Ok(Self(index))
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl TryFrom<usize> for LoopIndex {
    type Error = ModelError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl fmt::Display for LoopIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "loop_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loop {
    pub index: LoopIndex,
    pub peptide: Peptide,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Protein {
    pub id: String,
    loops: BTreeMap<LoopIndex, Loop>,
}

impl Protein {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            loops: BTreeMap::new(),
        }
    }

    /// Builds a protein whose loops are numbered from 1 in the order given.
    pub fn from_peptides(id: &str, peptides: impl IntoIterator<Item = Peptide>) -> Self {
        let loops = peptides
            .into_iter()
            .enumerate()
            .map(|(i, peptide)| {
                let index = LoopIndex(i + 1);
                (index, Loop { index, peptide })
            })
            .collect();
        Self {
            id: id.to_string(),
            loops,
        }
    }

    pub fn add_loop(&mut self, index: LoopIndex, peptide: Peptide) -> Result<(), ModelError> {
        if self.loops.contains_key(&index) {
            return Err(ModelError::DuplicateLoop {
                protein: self.id.clone(),
                loop_index: index.get(),
            });
        }
        self.loops.insert(index, Loop { index, peptide });
        Ok(())
    }

    pub fn get_loop(&self, index: LoopIndex) -> Option<&Loop> {
        self.loops.get(&index)
    }

    pub fn peptide(&self, index: LoopIndex) -> Option<&Peptide> {
        self.loops.get(&index).map(|l| &l.peptide)
    }

    pub fn has_loop(&self, index: LoopIndex) -> bool {
        self.loops.contains_key(&index)
    }

    pub fn loops(&self) -> impl Iterator<Item = &Loop> {
        self.loops.values()
    }

    pub fn loop_indices(&self) -> impl Iterator<Item = LoopIndex> + '_ {
        self.loops.keys().copied()
    }

    pub fn loop_count(&self) -> usize {
        self.loops.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peptide(text: &str) -> Peptide {
        text.parse().unwrap()
    }

    #[test]
    fn loop_index_rejects_zero() {
        assert_eq!(LoopIndex::new(0), Err(ModelError::InvalidLoopIndex(0)));
        assert_eq!(LoopIndex::new(3).unwrap().get(), 3);
    }

    #[test]
    fn loop_index_displays_with_loop_prefix() {
        assert_eq!(LoopIndex::new(2).unwrap().to_string(), "loop_2");
    }

    #[test]
    fn from_peptides_numbers_loops_from_one() {
        let protein = Protein::from_peptides("p1", [peptide("APT"), peptide("WYT")]);
        let indices: Vec<_> = protein.loop_indices().map(LoopIndex::get).collect();
        assert_eq!(indices, vec![1, 2]);
        assert_eq!(
            protein.peptide(LoopIndex::new(2).unwrap()).unwrap().to_string(),
            "WYT"
        );
    }

    #[test]
    fn add_loop_rejects_duplicate_index() {
        let mut protein = Protein::new("p1");
        let one = LoopIndex::new(1).unwrap();
        protein.add_loop(one, peptide("APT")).unwrap();
        let err = protein.add_loop(one, peptide("GGG")).unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateLoop {
                protein: "p1".to_string(),
                loop_index: 1
            }
        );
        assert_eq!(protein.loop_count(), 1);
    }

    #[test]
    fn loops_are_iterated_in_index_order_regardless_of_insertion_order() {
        let mut protein = Protein::new("p1");
        protein
            .add_loop(LoopIndex::new(3).unwrap(), peptide("CCC"))
            .unwrap();
        protein
            .add_loop(LoopIndex::new(1).unwrap(), peptide("AAA"))
            .unwrap();
        let order: Vec<_> = protein.loops().map(|l| l.index.get()).collect();
        assert_eq!(order, vec![1, 3]);
        assert!(!protein.has_loop(LoopIndex::new(2).unwrap()));
    }
}
