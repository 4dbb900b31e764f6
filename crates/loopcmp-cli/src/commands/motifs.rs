use super::load_catalogue;
use crate::cli::MotifsArgs;
use crate::config::parse_loops;
use crate::error::{CliError, Result};
use loopcmp::workflows::motifs::{ProteinMotifs, scan_catalogue};
use std::collections::BTreeSet;
use std::fmt::Write as _;
use tracing::info;

pub fn run(args: MotifsArgs) -> Result<()> {
    let loops: BTreeSet<_> = parse_loops(&args.loops)?.into_iter().collect();
    let catalogue = load_catalogue(&args.input)?;

    info!("Scanning {} protein(s) for structural motifs.", catalogue.len());
    let results = scan_catalogue(&catalogue, &loops);
    let report = render_report(&results);

    match &args.output {
        Some(path) => {
            std::fs::write(path, report).map_err(|e| CliError::Output {
                path: path.clone(),
                source: e.into(),
            })?;
            eprintln!("✓ Motif report written to: {}", path.display());
        }
        None => print!("{report}"),
    }
    Ok(())
}

/// One block per protein: a line per loop with its sequence, then one indented line per hit.
fn render_report(results: &[ProteinMotifs]) -> String {
    let mut out = String::new();
    for protein in results {
        let _ = writeln!(out, "{}", protein.protein);
        for entry in &protein.loops {
            let _ = writeln!(out, "  {} {}", entry.loop_index, entry.peptide);
            if entry.report.is_empty() {
                let _ = writeln!(out, "    (no motifs)");
            }
            for hit in entry.report.hits() {
                let _ = writeln!(
                    out,
                    "    {} at {}: {}",
                    hit.name, hit.start, hit.residues
                );
            }
        }
    }
    out
}
