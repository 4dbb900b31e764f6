use crate::core::models::catalogue::ProteinCatalogue;
use crate::core::models::peptide::Peptide;
use crate::core::models::protein::LoopIndex;
use crate::core::motifs::detector::{MotifReport, find_motifs};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopMotifs {
    pub loop_index: LoopIndex,
    pub peptide: Peptide,
    pub report: MotifReport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinMotifs {
    pub protein: String,
    pub loops: Vec<LoopMotifs>,
}

impl ProteinMotifs {
    pub fn hit_count(&self) -> usize {
        self.loops.iter().map(|l| l.report.len()).sum()
    }
}

/// Runs the motif detector over the requested loops of every protein.
///
/// Loops a protein does not define are skipped.
#[instrument(skip_all, name = "motif_scan_workflow")]
pub fn scan_catalogue(
    catalogue: &ProteinCatalogue,
    loops: &BTreeSet<LoopIndex>,
) -> Vec<ProteinMotifs> {
    let results: Vec<ProteinMotifs> = catalogue
        .iter()
        .map(|protein| ProteinMotifs {
            protein: protein.id.clone(),
            loops: loops
                .iter()
                .filter_map(|&index| protein.get_loop(index))
                .map(|l| LoopMotifs {
                    loop_index: l.index,
                    peptide: l.peptide.clone(),
                    report: find_motifs(&l.peptide),
                })
                .collect(),
        })
        .collect();

    debug!(
        proteins = results.len(),
        hits = results.iter().map(ProteinMotifs::hit_count).sum::<usize>(),
        "Motif scan complete."
    );
    results
}
