use super::scoring::ResidueScorer;
use crate::core::models::amino_acid::AminoAcid;
use crate::core::models::table::ComparisonTable;

const ALPHABET_SIZE: usize = AminoAcid::ALL.len();

/// Pairwise scores of every real residue against every other, in [`AminoAcid::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyMatrix {
    scores: [[f64; ALPHABET_SIZE]; ALPHABET_SIZE],
}

pub fn build_matrix<S: ResidueScorer + ?Sized>(scorer: &S) -> PropertyMatrix {
    let mut scores = [[0.0; ALPHABET_SIZE]; ALPHABET_SIZE];
    for (i, &a) in AminoAcid::ALL.iter().enumerate() {
        for (j, &b) in AminoAcid::ALL.iter().enumerate() {
            scores[i][j] = scorer.score_residues(a, b);
        }
    }
    PropertyMatrix { scores }
}

fn position(residue: AminoAcid) -> usize {
    AminoAcid::ALL
        .iter()
        .position(|&r| r == residue)
        .unwrap_or_default()
}

impl PropertyMatrix {
    pub fn get(&self, a: AminoAcid, b: AminoAcid) -> f64 {
        self.scores[position(a)][position(b)]
    }

    /// Number of ordered residue pairs in the matrix.
    pub fn pair_count(&self) -> usize {
        ALPHABET_SIZE * ALPHABET_SIZE
    }

    pub fn iter(&self) -> impl Iterator<Item = (AminoAcid, AminoAcid, f64)> + '_ {
        AminoAcid::ALL.iter().enumerate().flat_map(move |(i, &a)| {
            AminoAcid::ALL
                .iter()
                .enumerate()
                .map(move |(j, &b)| (a, b, self.scores[i][j]))
        })
    }

    pub fn to_table(&self) -> ComparisonTable {
        let labels: Vec<String> = AminoAcid::ALL.iter().map(|r| r.code().to_string()).collect();
        ComparisonTable {
            title: "amino acid comparison matrix".to_string(),
            row_labels: labels.clone(),
            column_labels: labels,
            rows: self.scores.iter().map(|row| row.to_vec()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::properties::scoring::PhysicochemicalScorer;

    #[test]
    fn matrix_covers_every_ordered_pair_of_real_residues() {
        let matrix = build_matrix(&PhysicochemicalScorer::default());
        assert_eq!(matrix.pair_count(), 400);
        assert_eq!(matrix.iter().count(), 400);
    }

    #[test]
    fn matrix_matches_scorer_pointwise() {
        let scorer = PhysicochemicalScorer::default();
        let matrix = build_matrix(&scorer);
        for (a, b, score) in matrix.iter() {
            assert_eq!(score, scorer.score_residues(a, b));
            assert_eq!(matrix.get(a, b), score);
        }
    }

    #[test]
    fn matrix_is_symmetric_and_diagonal_maximal() {
        let matrix = build_matrix(&PhysicochemicalScorer::default());
        for a in AminoAcid::ALL {
            for b in AminoAcid::ALL {
                assert_eq!(matrix.get(a, b), matrix.get(b, a));
                assert!(matrix.get(a, a) >= matrix.get(a, b));
            }
        }
    }

    #[test]
    fn to_table_labels_rows_and_columns_with_one_letter_codes() {
        let table = build_matrix(&PhysicochemicalScorer::default()).to_table();
        assert_eq!(table.shape(), (20, 20));
        assert_eq!(table.row_labels.concat(), "ACDEFGHIKLMNQPRSTVWY");
        assert_eq!(table.column_labels, table.row_labels);
        assert!((table.get("G", "G").unwrap() - 15.0).abs() < 1e-9);
    }
}
