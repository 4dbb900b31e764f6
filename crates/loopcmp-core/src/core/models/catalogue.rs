use super::error::ModelError;
use super::protein::{LoopIndex, Protein};
use std::collections::{BTreeSet, HashMap};

/// An ordered, read-only collection of proteins keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct ProteinCatalogue {
    source: String,
    proteins: Vec<Protein>,
    index: HashMap<String, usize>,
}

impl ProteinCatalogue {
    pub fn builder(source: &str) -> CatalogueBuilder {
        CatalogueBuilder::new(source)
    }

    /// A short description of where the proteins came from, used in result titles.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn get(&self, id: &str) -> Option<&Protein> {
        self.index.get(id).map(|&i| &self.proteins[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Protein> {
        self.proteins.iter()
    }

    pub fn ids(&self) -> impl ExactSizeIterator<Item = &str> {
        self.proteins.iter().map(|p| p.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.proteins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proteins.is_empty()
    }

    /// Loop indices defined by every protein in the catalogue.
    pub fn common_loops(&self) -> BTreeSet<LoopIndex> {
        let mut proteins = self.proteins.iter();
        let Some(first) = proteins.next() else {
            return BTreeSet::new();
        };
        let mut common: BTreeSet<LoopIndex> = first.loop_indices().collect();
        for protein in proteins {
            common.retain(|&index| protein.has_loop(index));
        }
        common
    }
}

#[derive(Debug, Default)]
pub struct CatalogueBuilder {
    source: String,
    proteins: Vec<Protein>,
    index: HashMap<String, usize>,
}

impl CatalogueBuilder {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            ..Self::default()
        }
    }

    pub fn add_protein(&mut self, protein: Protein) -> Result<&mut Self, ModelError> {
        if self.index.contains_key(&protein.id) {
            return Err(ModelError::DuplicateProtein(protein.id));
        }
        self.index.insert(protein.id.clone(), self.proteins.len());
        self.proteins.push(protein);
        Ok(self)
    }

    pub fn build(self) -> ProteinCatalogue {
        ProteinCatalogue {
            source: self.source,
            proteins: self.proteins,
            index: self.index,
        }
    }
}
