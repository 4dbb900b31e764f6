use super::compare::full_prot_comparison;
use super::results::ComparisonMatrix;
use crate::core::models::catalogue::ProteinCatalogue;
use crate::core::models::protein::LoopIndex;
use crate::core::properties::scoring::ResidueScorer;
use crate::engine::aggregate::Frame;
use crate::engine::config::{ComparisonConfig, ConfigError};
use crate::engine::error::EngineError;
use crate::engine::frameshift::{Shift, Side};
use crate::engine::progress::{Progress, ProgressReporter};
use std::collections::BTreeSet;
use tracing::{info, instrument};

/// Offset of the quick analysis frames: the filler goes before the second residue.
pub const QUICK_SHIFT_OFFSET: usize = 2;

/// Loops compared by a quick analysis when the caller does not choose.
pub fn default_quick_loops() -> BTreeSet<LoopIndex> {
    BTreeSet::from([LoopIndex::FIRST, LoopIndex::FIRST.next()])
}

/// The unshifted frame, then each loop shifted on its own at [`QUICK_SHIFT_OFFSET`] on
/// either side.
pub fn quick_frames(loops: &BTreeSet<LoopIndex>) -> Vec<Frame> {
    let Some(&first) = loops.first() else {
        return Vec::new();
    };
    let mut frames = vec![Frame::unshifted(first)];
    for &loop_index in loops {
        for side in [Side::First, Side::Second] {
            frames.push(Frame {
                loop_index,
                shift: Shift::new(side, QUICK_SHIFT_OFFSET),
            });
        }
    }
    frames
}

/// Every protein against every protein in a handful of fixed frames, one matrix per frame.
#[instrument(skip_all, name = "quick_analysis_workflow")]
pub fn quick_analysis<S: ResidueScorer + ?Sized>(
    catalogue: &ProteinCatalogue,
    loops: &BTreeSet<LoopIndex>,
    scorer: &S,
    reporter: &ProgressReporter,
) -> Result<Vec<(Frame, ComparisonMatrix)>, EngineError> {
    if loops.is_empty() {
        return Err(ConfigError::EmptyLoopSelection.into());
    }
    let frames = quick_frames(loops);
    info!(
        frames = frames.len(),
        proteins = catalogue.len(),
        "Starting quick analysis."
    );

    let mut results = Vec::with_capacity(frames.len());
    for (i, frame) in frames.iter().copied().enumerate() {
        reporter.report(Progress::Message(format!(
            "Frame {}/{}: {}",
            i + 1,
            frames.len(),
            frame
        )));
        let config = ComparisonConfig {
            loops: loops.clone(),
            frame: Some(frame),
            ..ComparisonConfig::default()
        };
        results.push((frame, full_prot_comparison(catalogue, &config, scorer, reporter)?));
    }

    info!("Quick analysis complete.");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::protein::Protein;
    use crate::core::properties::scoring::PhysicochemicalScorer;
    use std::sync::{Arc, Mutex};

    const EPS: f64 = 1e-9;

    fn catalogue() -> ProteinCatalogue {
        let mut builder = ProteinCatalogue::builder("demo");
        for (id, loops) in [("p1", ["GAPT", "APT"]), ("p2", ["APTW", "WYT"])] {
            builder
                .add_protein(Protein::from_peptides(
                    id,
                    loops.iter().map(|l| l.parse().unwrap()),
                ))
                .unwrap();
        }
        builder.build()
    }

    #[test]
    fn default_frames_cover_both_loops_on_both_sides() {
        let labels: Vec<String> = quick_frames(&default_quick_loops())
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            labels,
            vec![
                "unshifted",
                "loop_1 first+2",
                "loop_1 second+2",
                "loop_2 first+2",
                "loop_2 second+2",
            ]
        );
    }

    #[test]
    fn quick_analysis_returns_one_matrix_per_frame() {
        let scorer = PhysicochemicalScorer::default();
        let results = quick_analysis(
            &catalogue(),
            &default_quick_loops(),
            &scorer,
            &ProgressReporter::new(),
        )
        .unwrap();
        assert_eq!(results.len(), 5);
        for (_, matrix) in &results {
            assert_eq!(matrix.shape(), (2, 2));
        }
        assert_eq!(results[0].1.title, "demo [loop_1, loop_2] unshifted");

        // p2's first loop becomes AXPTW: G-A 8.85, A-X 0, P-P 15, T-T 13.2.
        let (frame, matrix) = &results[2];
        assert_eq!(frame.shift, Shift::new(Side::Second, QUICK_SHIFT_OFFSET));
        assert_eq!(matrix.title, "demo [loop_1, loop_2] loop_1 second+2");
        assert!((matrix.get("p1", "p2").unwrap() - (37.05 + 22.65)).abs() < EPS);
        assert!((results[0].1.get("p1", "p2").unwrap() - (28.3 + 22.65)).abs() < EPS);
    }

    #[test]
    fn quick_analysis_announces_each_frame() {
        let scorer = PhysicochemicalScorer::default();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            sink.lock().unwrap().push(event);
        }));

        quick_analysis(&catalogue(), &default_quick_loops(), &scorer, &reporter).unwrap();

        let seen = seen.lock().unwrap();
        let messages: Vec<&str> = seen
            .iter()
            .filter_map(|event| match event {
                Progress::Message(text) => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[0], "Frame 1/5: unshifted");
        assert_eq!(messages[4], "Frame 5/5: loop_2 second+2");
        // Each frame: a message, a start, two rows and a finish.
        assert_eq!(seen.len(), 5 * 5);
    }

    #[test]
    fn quick_analysis_requires_loops() {
        let scorer = PhysicochemicalScorer::default();
        let result = quick_analysis(
            &catalogue(),
            &BTreeSet::new(),
            &scorer,
            &ProgressReporter::new(),
        );
        assert_eq!(
            result.unwrap_err(),
            EngineError::Config(ConfigError::EmptyLoopSelection)
        );
    }
}
