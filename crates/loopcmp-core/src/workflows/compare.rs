use super::results::{ComparisonMatrix, FrameScan, ShiftScan};
use crate::core::models::catalogue::ProteinCatalogue;
use crate::core::models::protein::{LoopIndex, Protein};
use crate::core::properties::scoring::ResidueScorer;
use crate::engine::aggregate::{Aggregate, Frame, aggregate, loop_frames, score_fixed_frame};
use crate::engine::config::{ComparisonConfig, ProteinSelection};
use crate::engine::error::EngineError;
use crate::engine::frameshift::{Shift, ShiftSequence};
use crate::engine::progress::{Progress, ProgressReporter};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

/// Compares each protein of interest against the whole catalogue.
///
/// Each cell is the aggregate over `config.loops`: with `collapse` every loop contributes its
/// best frame, otherwise the cell holds the best shift shared by all loops. With the default
/// `max_shift` of 0 this is a plain, unshifted comparison. A `config.frame` replaces the
/// shift search with that one fixed frame.
#[instrument(skip_all, name = "full_comparison_workflow")]
pub fn full_prot_comparison<S: ResidueScorer + ?Sized>(
    catalogue: &ProteinCatalogue,
    config: &ComparisonConfig,
    scorer: &S,
    reporter: &ProgressReporter,
) -> Result<ComparisonMatrix, EngineError> {
    let rows = resolve_selection(catalogue, &config.proteins_of_interest)?;

    if let Some(frame) = config.frame {
        let title = format!("{} {} {}", catalogue.source(), config.loop_labels(), frame);
        info!(
            %frame,
            proteins = rows.len(),
            "Starting fixed-frame protein comparison."
        );
        let matrix = frame_matrix(catalogue, &rows, &config.loops, frame, scorer, reporter, title)?;
        info!("Fixed-frame protein comparison complete.");
        return Ok(matrix);
    }

    let title = format!(
        "{} {} max shift {}",
        catalogue.source(),
        config.loop_labels(),
        config.max_shift
    );
    info!(
        proteins = rows.len(),
        catalogue = catalogue.len(),
        "Starting full protein comparison."
    );
    reporter.report(Progress::ComparisonStart {
        title: title.clone(),
        total_rows: rows.len() as u64,
    });

    let mut scores = Vec::with_capacity(rows.len());
    for protein in &rows {
        let row = catalogue
            .iter()
            .map(|other| {
                aggregate(
                    scorer,
                    protein,
                    other,
                    &config.loops,
                    config.max_shift,
                    config.shift_target,
                    config.collapse,
                )
                .map(|result| result.best_score())
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(protein = %protein.id, "Row complete.");
        reporter.report(Progress::RowFinished {
            label: protein.id.clone(),
        });
        scores.push(row);
    }

    reporter.report(Progress::ComparisonFinish);
    info!("Full protein comparison complete.");
    Ok(ComparisonMatrix::new(
        title,
        rows.iter().map(|p| p.id.clone()).collect(),
        catalogue.ids().map(str::to_string).collect(),
        scores,
    ))
}

/// Scores one protein against the catalogue at every shift, summing the loops frame by
/// frame.
#[instrument(skip_all, name = "shift_scan_workflow", fields(protein = %protein_id))]
pub fn one_prot_all_shifts<S: ResidueScorer + ?Sized>(
    catalogue: &ProteinCatalogue,
    protein_id: &str,
    config: &ComparisonConfig,
    scorer: &S,
    reporter: &ProgressReporter,
) -> Result<ShiftScan, EngineError> {
    let protein = lookup(catalogue, protein_id)?;
    let shifts: Vec<Shift> = ShiftSequence::new(config.shift_target, config.max_shift)?.collect();
    let title = format!("{} protein {} all shifts", catalogue.source(), protein.id);
    info!(
        max_shift = config.max_shift,
        target = %config.shift_target,
        "Scanning all shifts."
    );
    reporter.report(Progress::ComparisonStart {
        title: title.clone(),
        total_rows: catalogue.len() as u64,
    });

    let scores = scan_rows(catalogue, protein, config, scorer, reporter)?;

    reporter.report(Progress::ComparisonFinish);
    Ok(ShiftScan::new(
        title,
        protein.id.clone(),
        shifts,
        catalogue.ids().map(str::to_string).collect(),
        scores,
    ))
}

/// Scores one protein against the catalogue with each requested loop shifted on its own,
/// the other loops left unshifted.
///
/// Columns follow [`loop_frames`]: the unshifted frame, then every shift of
/// `config.shift_target` up to `config.max_shift` for each loop in turn.
#[instrument(skip_all, name = "frame_scan_workflow", fields(protein = %protein_id))]
pub fn one_prot_all_frames<S: ResidueScorer + ?Sized>(
    catalogue: &ProteinCatalogue,
    protein_id: &str,
    config: &ComparisonConfig,
    scorer: &S,
    reporter: &ProgressReporter,
) -> Result<FrameScan, EngineError> {
    let protein = lookup(catalogue, protein_id)?;
    let frames = loop_frames(&config.loops, config.shift_target, config.max_shift)?;
    let title = format!("{} protein {} all frames", catalogue.source(), protein.id);
    info!(frames = frames.len(), "Scanning single-loop frames.");
    reporter.report(Progress::ComparisonStart {
        title: title.clone(),
        total_rows: catalogue.len() as u64,
    });

    let mut scores = Vec::with_capacity(catalogue.len());
    for other in catalogue.iter() {
        let row = frames
            .iter()
            .map(|&frame| score_fixed_frame(scorer, protein, other, &config.loops, frame))
            .collect::<Result<Vec<_>, _>>()?;
        reporter.report(Progress::RowFinished {
            label: other.id.clone(),
        });
        scores.push(row);
    }

    reporter.report(Progress::ComparisonFinish);
    Ok(FrameScan::new(
        title,
        protein.id.clone(),
        frames,
        catalogue.ids().map(str::to_string).collect(),
        scores,
    ))
}

/// Runs the shift scan for every catalogue member and keeps the best shift per pair.
#[instrument(skip_all, name = "best_shift_workflow")]
pub fn all_prots_all_shifts<S: ResidueScorer + ?Sized>(
    catalogue: &ProteinCatalogue,
    config: &ComparisonConfig,
    scorer: &S,
    reporter: &ProgressReporter,
) -> Result<ComparisonMatrix, EngineError> {
    let shifts: Vec<Shift> = ShiftSequence::new(config.shift_target, config.max_shift)?.collect();
    let title = format!("highest scores over all shifts, {}", catalogue.source());
    info!(
        proteins = catalogue.len(),
        max_shift = config.max_shift,
        "Starting best-shift comparison."
    );
    reporter.report(Progress::ComparisonStart {
        title: title.clone(),
        total_rows: catalogue.len() as u64,
    });

    // Rows are reported once per protein, not once per inner scan row.
    let silent = ProgressReporter::new();
    let mut scores = Vec::with_capacity(catalogue.len());
    for protein in catalogue.iter() {
        let row: Vec<f64> = scan_rows(catalogue, protein, config, scorer, &silent)?
            .iter()
            .map(|per_shift| Aggregate::PerShift(shift_pairs(&shifts, per_shift)).best_score())
            .collect();
        reporter.report(Progress::RowFinished {
            label: protein.id.clone(),
        });
        scores.push(row);
    }

    reporter.report(Progress::ComparisonFinish);
    info!("Best-shift comparison complete.");
    Ok(ComparisonMatrix::new(
        title,
        catalogue.ids().map(str::to_string).collect(),
        catalogue.ids().map(str::to_string).collect(),
        scores,
    ))
}

fn frame_matrix<S: ResidueScorer + ?Sized>(
    catalogue: &ProteinCatalogue,
    rows: &[&Protein],
    loops: &BTreeSet<LoopIndex>,
    frame: Frame,
    scorer: &S,
    reporter: &ProgressReporter,
    title: String,
) -> Result<ComparisonMatrix, EngineError> {
    reporter.report(Progress::ComparisonStart {
        title: title.clone(),
        total_rows: rows.len() as u64,
    });

    let mut scores = Vec::with_capacity(rows.len());
    for protein in rows {
        let row = catalogue
            .iter()
            .map(|other| score_fixed_frame(scorer, protein, other, loops, frame))
            .collect::<Result<Vec<_>, _>>()?;
        reporter.report(Progress::RowFinished {
            label: protein.id.clone(),
        });
        scores.push(row);
    }

    reporter.report(Progress::ComparisonFinish);
    Ok(ComparisonMatrix::new(
        title,
        rows.iter().map(|p| p.id.clone()).collect(),
        catalogue.ids().map(str::to_string).collect(),
        scores,
    ))
}

fn scan_rows<S: ResidueScorer + ?Sized>(
    catalogue: &ProteinCatalogue,
    protein: &Protein,
    config: &ComparisonConfig,
    scorer: &S,
    reporter: &ProgressReporter,
) -> Result<Vec<Vec<f64>>, EngineError> {
    let mut rows = Vec::with_capacity(catalogue.len());
    for other in catalogue.iter() {
        let result = aggregate(
            scorer,
            protein,
            other,
            &config.loops,
            config.max_shift,
            config.shift_target,
            false,
        )?;
        let row = match result {
            Aggregate::PerShift(per_shift) => per_shift.into_iter().map(|(_, s)| s).collect(),
            Aggregate::Collapsed(score) => vec![score],
        };
        reporter.report(Progress::RowFinished {
            label: other.id.clone(),
        });
        rows.push(row);
    }
    Ok(rows)
}

fn shift_pairs(shifts: &[Shift], scores: &[f64]) -> Vec<(Shift, f64)> {
    shifts.iter().copied().zip(scores.iter().copied()).collect()
}

fn lookup<'c>(catalogue: &'c ProteinCatalogue, id: &str) -> Result<&'c Protein, EngineError> {
    catalogue
        .get(id)
        .ok_or_else(|| EngineError::UnknownProtein(id.to_string()))
}

fn resolve_selection<'c>(
    catalogue: &'c ProteinCatalogue,
    selection: &ProteinSelection,
) -> Result<Vec<&'c Protein>, EngineError> {
    match selection {
        ProteinSelection::All => Ok(catalogue.iter().collect()),
        ProteinSelection::List(ids) => ids.iter().map(|id| lookup(catalogue, id)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::protein::LoopIndex;
    use crate::core::properties::scoring::PhysicochemicalScorer;
    use crate::engine::config::{ComparisonConfigBuilder, ShiftTarget};
    use crate::engine::frameshift::Side;
    use std::sync::{Arc, Mutex};

    const EPS: f64 = 1e-9;

    fn catalogue() -> ProteinCatalogue {
        let mut builder = ProteinCatalogue::builder("demo");
        for (id, loops) in [
            ("p1", ["GAPT", "APT"]),
            ("p2", ["APTW", "WYT"]),
            ("p3", ["KDES", "GGS"]),
        ] {
            builder
                .add_protein(Protein::from_peptides(
                    id,
                    loops.iter().map(|l| l.parse().unwrap()),
                ))
                .unwrap();
        }
        builder.build()
    }

    fn both_loops() -> ComparisonConfigBuilder {
        ComparisonConfigBuilder::new()
            .loops([LoopIndex::new(1).unwrap(), LoopIndex::new(2).unwrap()])
    }

    #[test]
    fn full_comparison_defaults_to_all_proteins_and_loop_one() {
        let catalogue = catalogue();
        let config = ComparisonConfigBuilder::new().build().unwrap();
        let scorer = PhysicochemicalScorer::default();
        let matrix =
            full_prot_comparison(&catalogue, &config, &scorer, &ProgressReporter::new()).unwrap();

        assert_eq!(matrix.shape(), (3, 3));
        assert_eq!(matrix.title, "demo [loop_1] max shift 0");
        // GAPT vs APTW unshifted: G-A 8.85, A-P 8.4, P-T 7.85, T-W 3.2
        assert!((matrix.get("p1", "p2").unwrap() - 28.3).abs() < EPS);
    }

    #[test]
    fn self_pairs_score_highest_in_each_row() {
        let catalogue = catalogue();
        let config = both_loops().build().unwrap();
        let scorer = PhysicochemicalScorer::default();
        let matrix =
            full_prot_comparison(&catalogue, &config, &scorer, &ProgressReporter::new()).unwrap();
        for id in catalogue.ids() {
            let own = matrix.get(id, id).unwrap();
            for (column, score) in matrix.column_ids.iter().zip(matrix.row(id).unwrap()) {
                assert!(own >= *score, "{id} vs {column}");
            }
        }
    }

    #[test]
    fn proteins_of_interest_select_rows() {
        let catalogue = catalogue();
        let config = ComparisonConfigBuilder::new()
            .proteins_of_interest(vec!["p3".to_string()])
            .build()
            .unwrap();
        let scorer = PhysicochemicalScorer::default();
        let matrix =
            full_prot_comparison(&catalogue, &config, &scorer, &ProgressReporter::new()).unwrap();
        assert_eq!(matrix.row_ids, vec!["p3"]);
        assert_eq!(matrix.column_ids, vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn unknown_protein_of_interest_fails_the_whole_request() {
        let catalogue = catalogue();
        let config = ComparisonConfigBuilder::new()
            .proteins_of_interest(vec!["p1".to_string(), "nope".to_string()])
            .build()
            .unwrap();
        let scorer = PhysicochemicalScorer::default();
        let result = full_prot_comparison(&catalogue, &config, &scorer, &ProgressReporter::new());
        assert_eq!(result, Err(EngineError::UnknownProtein("nope".to_string())));
    }

    #[test]
    fn missing_loop_fails_the_whole_request() {
        let mut builder = ProteinCatalogue::builder("gaps");
        let long = ["APT", "GGS"].map(|l| l.parse().unwrap());
        builder
            .add_protein(Protein::from_peptides("long", long))
            .unwrap();
        builder
            .add_protein(Protein::from_peptides("short", ["WYT".parse().unwrap()]))
            .unwrap();
        let catalogue = builder.build();
        let config = both_loops().build().unwrap();
        let scorer = PhysicochemicalScorer::default();
        let result = full_prot_comparison(&catalogue, &config, &scorer, &ProgressReporter::new());
        assert!(matches!(result, Err(EngineError::MissingLoop { .. })));
    }

    #[test]
    fn shift_scan_has_one_column_per_shift() {
        let catalogue = catalogue();
        let config = both_loops().max_shift(2).build().unwrap();
        let scorer = PhysicochemicalScorer::default();
        let scan =
            one_prot_all_shifts(&catalogue, "p1", &config, &scorer, &ProgressReporter::new())
                .unwrap();

        assert_eq!(scan.title, "demo protein p1 all shifts");
        assert_eq!(scan.shifts.len(), 5);
        assert_eq!(scan.targets, vec!["p1", "p2", "p3"]);
        assert!(scan.best("p1").unwrap().shift.is_unshifted());
        assert_eq!(
            scan.to_table().column_labels,
            vec!["unshifted", "first+1", "first+2", "second+1", "second+2"]
        );
    }

    #[test]
    fn shift_scan_rejects_unknown_protein() {
        let catalogue = catalogue();
        let config = ComparisonConfigBuilder::new().build().unwrap();
        let scorer = PhysicochemicalScorer::default();
        let result =
            one_prot_all_shifts(&catalogue, "ghost", &config, &scorer, &ProgressReporter::new());
        assert_eq!(result, Err(EngineError::UnknownProtein("ghost".to_string())));
    }

    #[test]
    fn best_shift_matrix_keeps_each_pairs_best_scan_value() {
        let catalogue = catalogue();
        let config = ComparisonConfigBuilder::new()
            .max_shift(1)
            .shift_target(ShiftTarget::Both)
            .build()
            .unwrap();
        let scorer = PhysicochemicalScorer::default();
        let reporter = ProgressReporter::new();
        let matrix = all_prots_all_shifts(&catalogue, &config, &scorer, &reporter).unwrap();
        let scan = one_prot_all_shifts(&catalogue, "p1", &config, &scorer, &reporter).unwrap();

        let best = scan.best("p2").unwrap();
        assert_eq!(best.shift, Shift::new(Side::Second, 1));
        assert!((matrix.get("p1", "p2").unwrap() - best.score).abs() < EPS);
        assert_eq!(matrix.shape(), (3, 3));
    }

    #[test]
    fn progress_reports_one_row_per_protein_of_interest() {
        let catalogue = catalogue();
        let config = ComparisonConfigBuilder::new().max_shift(1).build().unwrap();
        let scorer = PhysicochemicalScorer::default();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            sink.lock().unwrap().push(event);
        }));

        all_prots_all_shifts(&catalogue, &config, &scorer, &reporter).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 5);
        assert!(matches!(
            seen[0],
            Progress::ComparisonStart { total_rows: 3, .. }
        ));
        assert_eq!(seen[4], Progress::ComparisonFinish);
    }

    #[test]
    fn fixed_frame_comparison_shifts_only_the_chosen_loop() {
        let catalogue = catalogue();
        let frame: Frame = "1:second:2".parse().unwrap();
        let config = both_loops().frame(frame).build().unwrap();
        let scorer = PhysicochemicalScorer::default();
        let matrix =
            full_prot_comparison(&catalogue, &config, &scorer, &ProgressReporter::new()).unwrap();

        assert_eq!(matrix.title, "demo [loop_1, loop_2] loop_1 second+2");
        // GAPT against AXPTW is 37.05; APT against WYT stays at 22.65.
        assert!((matrix.get("p1", "p2").unwrap() - (37.05 + 22.65)).abs() < EPS);
        // Shifting p1's own loop 1 against itself: GAPT against GXAPT.
        let own = score_fixed_frame(
            &scorer,
            catalogue.get("p1").unwrap(),
            catalogue.get("p1").unwrap(),
            &config.loops,
            frame,
        )
        .unwrap();
        assert!((matrix.get("p1", "p1").unwrap() - own).abs() < EPS);
    }

    #[test]
    fn unshifted_fixed_frame_matches_the_plain_comparison() {
        let catalogue = catalogue();
        let scorer = PhysicochemicalScorer::default();
        let plain = full_prot_comparison(
            &catalogue,
            &both_loops().build().unwrap(),
            &scorer,
            &ProgressReporter::new(),
        )
        .unwrap();
        let framed = full_prot_comparison(
            &catalogue,
            &both_loops()
                .frame(Frame::unshifted(LoopIndex::FIRST))
                .build()
                .unwrap(),
            &scorer,
            &ProgressReporter::new(),
        )
        .unwrap();
        for id in catalogue.ids() {
            assert_eq!(plain.row(id), framed.row(id));
        }
    }

    #[test]
    fn frame_scan_shifts_one_loop_at_a_time() {
        let catalogue = catalogue();
        let config = both_loops()
            .max_shift(2)
            .shift_target(ShiftTarget::Second)
            .build()
            .unwrap();
        let scorer = PhysicochemicalScorer::default();
        let scan =
            one_prot_all_frames(&catalogue, "p1", &config, &scorer, &ProgressReporter::new())
                .unwrap();

        assert_eq!(scan.title, "demo protein p1 all frames");
        assert_eq!(
            scan.to_table().column_labels,
            vec![
                "unshifted",
                "loop_1 second+1",
                "loop_1 second+2",
                "loop_2 second+1",
                "loop_2 second+2",
            ]
        );

        let at = |text: &str| scan.get("p2", text.parse().unwrap()).unwrap();
        // Loop 1 frames, loop 2 unshifted at 22.65.
        assert!((at("1:second:0") - (28.3 + 22.65)).abs() < EPS);
        // GAPT against XAPTW: G-X 0, A-A 13.2, P-P 15, T-T 13.2.
        assert!((at("1:second:1") - (41.4 + 22.65)).abs() < EPS);
        assert!((at("1:second:2") - (37.05 + 22.65)).abs() < EPS);
        // Loop 2 frames, loop 1 unshifted at 28.3. APT against XWYT, then WXYT.
        assert!((at("2:second:1") - (28.3 + 8.9)).abs() < EPS);
        assert!((at("2:second:2") - (28.3 + 7.7)).abs() < EPS);

        let (best, score) = scan.best("p2").unwrap();
        assert_eq!(best.to_string(), "loop_1 second+1");
        assert!((score - (41.4 + 22.65)).abs() < EPS);
    }

    #[test]
    fn frame_scan_rejects_unknown_protein_and_missing_loops() {
        let catalogue = catalogue();
        let scorer = PhysicochemicalScorer::default();
        let config = both_loops().build().unwrap();
        let result =
            one_prot_all_frames(&catalogue, "ghost", &config, &scorer, &ProgressReporter::new());
        assert_eq!(result, Err(EngineError::UnknownProtein("ghost".to_string())));

        let config = ComparisonConfigBuilder::new()
            .loops([LoopIndex::new(3).unwrap()])
            .build()
            .unwrap();
        let result =
            one_prot_all_frames(&catalogue, "p1", &config, &scorer, &ProgressReporter::new());
        assert!(matches!(result, Err(EngineError::MissingLoop { .. })));
    }

    #[test]
    fn oversized_shift_bound_fails_instead_of_panicking() {
        let catalogue = catalogue();
        let config = ComparisonConfig {
            max_shift: usize::MAX,
            ..ComparisonConfig::default()
        };
        let scorer = PhysicochemicalScorer::default();
        let reporter = ProgressReporter::new();
        for result in [
            one_prot_all_shifts(&catalogue, "p1", &config, &scorer, &reporter).map(|_| ()),
            all_prots_all_shifts(&catalogue, &config, &scorer, &reporter).map(|_| ()),
            full_prot_comparison(&catalogue, &config, &scorer, &reporter).map(|_| ()),
            one_prot_all_frames(&catalogue, "p1", &config, &scorer, &reporter).map(|_| ()),
        ] {
            assert_eq!(result, Err(EngineError::ShiftBoundTooLarge(usize::MAX)));
        }
    }
}
