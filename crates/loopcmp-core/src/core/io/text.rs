use super::traits::CatalogueFile;
use crate::core::models::catalogue::ProteinCatalogue;
use crate::core::models::error::ModelError;
use crate::core::models::peptide::Peptide;
use crate::core::models::protein::Protein;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CatalogueReadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ModelError,
    },
    #[error("Protein '{protein}' on line {line} has no loops")]
    NoLoops { line: usize, protein: String },
}

/// One protein per line: the protein name followed by its loops, separated by tabs or
/// spaces. Loops are numbered from 1 in column order; blank lines are skipped.
///
/// ```text
/// prot_one    APTWYT    GSNKDE
/// prot_two    AVTWYT    GSRKDE
/// ```
pub struct WhitespaceCatalogue;

impl CatalogueFile for WhitespaceCatalogue {
    type Error = CatalogueReadError;

    fn read_from(
        reader: &mut impl BufRead,
        source: &str,
    ) -> Result<ProteinCatalogue, Self::Error> {
        let mut builder = ProteinCatalogue::builder(source);

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_no = line_num + 1;
            let mut words = line.split_whitespace();
            let Some(name) = words.next() else {
                continue;
            };

            let peptides = words
                .map(|word| word.parse::<Peptide>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| CatalogueReadError::Parse {
                    line: line_no,
                    source,
                })?;
            if peptides.is_empty() {
                return Err(CatalogueReadError::NoLoops {
                    line: line_no,
                    protein: name.to_string(),
                });
            }

            builder
                .add_protein(Protein::from_peptides(name, peptides))
                .map_err(|source| CatalogueReadError::Parse {
                    line: line_no,
                    source,
                })?;
        }

        let catalogue = builder.build();
        debug!(
            source,
            proteins = catalogue.len(),
            "Protein catalogue loaded."
        );
        Ok(catalogue)
    }
}
