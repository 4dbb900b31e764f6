pub mod compare;
pub mod matrix;
pub mod motifs;
pub mod quick;
pub mod shifts;

use crate::cli::ComparisonArgs;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use loopcmp::core::io::csv_table::{write_tables, write_tables_to_path};
use loopcmp::core::io::text::WhitespaceCatalogue;
use loopcmp::core::io::traits::CatalogueFile;
use loopcmp::core::models::catalogue::ProteinCatalogue;
use loopcmp::core::models::table::ComparisonTable;
use loopcmp::engine::config::{ComparisonConfig, ProteinSelection};
use loopcmp::engine::progress::ProgressReporter;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub(crate) fn load_catalogue(path: &Path) -> Result<ProteinCatalogue> {
    info!("Loading protein catalogue from {:?}", path);
    let catalogue =
        WhitespaceCatalogue::read_from_path(path).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
    if catalogue.is_empty() {
        return Err(CliError::Argument(format!(
            "No proteins found in '{}'.",
            path.display()
        )));
    }
    info!("Loaded {} protein(s).", catalogue.len());
    Ok(catalogue)
}

/// Writes tables as CSV to `output`, or to standard output when no path is given.
pub(crate) fn write_output(tables: &[ComparisonTable], output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            write_tables_to_path(tables, path).map_err(|e| CliError::Output {
                path: path.clone(),
                source: e.into(),
            })?;
            eprintln!("✓ Results written to: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            write_tables(tables, stdout.lock()).map_err(|e| CliError::Other(e.into()))?;
        }
    }
    Ok(())
}

/// Scans cover the whole catalogue at every shift or frame, so they take no row selection,
/// collapse mode or fixed frame. Flags for these are errors; config file values are ignored.
pub(crate) fn check_scan_options(
    command: &str,
    args: &ComparisonArgs,
    config: &ComparisonConfig,
) -> Result<()> {
    let mut rejected = Vec::new();
    if !args.proteins.is_empty() {
        rejected.push("--protein");
    }
    if args.no_collapse {
        rejected.push("--no-collapse");
    }
    if args.frame.is_some() {
        rejected.push("--frame");
    }
    if !rejected.is_empty() {
        return Err(CliError::Argument(format!(
            "'{}' does not accept {}.",
            command,
            rejected.join(", ")
        )));
    }

    if config.proteins_of_interest != ProteinSelection::All
        || !config.collapse
        || config.frame.is_some()
    {
        warn!(
            "'{}' ignores proteins-of-interest, collapse and frame from the configuration.",
            command
        );
    }
    Ok(())
}

pub(crate) fn progress_reporter(quiet: bool) -> ProgressReporter<'static> {
    let handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    ProgressReporter::with_callback(handler.get_callback())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn compare_command_writes_a_titled_csv() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("proteins.txt");
        let output = dir.path().join("result.csv");
        fs::write(&input, "p1 GAPT APT\np2 APTW WYT\n").unwrap();

        let cli = Cli::parse_from([
            "loopcmp",
            "compare",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-l",
            "1,2",
        ]);
        let Commands::Compare(args) = cli.command else {
            panic!("Expected 'compare' subcommand");
        };
        compare::run(args, true).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert!(lines[0].contains("[loop_1, loop_2] max shift 0"));
        assert_eq!(lines[1], ",p1,p2");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn quick_command_writes_one_table_per_frame() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("proteins.txt");
        let output = dir.path().join("quick.csv");
        fs::write(&input, "p1 GAPT APT\np2 APTW WYT\n").unwrap();

        let cli = Cli::parse_from([
            "loopcmp",
            "quick",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ]);
        let Commands::Quick(args) = cli.command else {
            panic!("Expected 'quick' subcommand");
        };
        quick::run(args, true).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert_eq!(text.lines().count(), 5 * 4);
        assert!(text.contains("loop_2 second+2"));
    }

    #[test]
    fn compare_command_accepts_a_fixed_frame() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("proteins.txt");
        let output = dir.path().join("frame.csv");
        fs::write(&input, "p1 GAPT APT\np2 APTW WYT\n").unwrap();

        let cli = Cli::parse_from([
            "loopcmp",
            "compare",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-l",
            "1,2",
            "-f",
            "1:second:2",
        ]);
        let Commands::Compare(args) = cli.command else {
            panic!("Expected 'compare' subcommand");
        };
        compare::run(args, true).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert!(lines[0].contains("[loop_1, loop_2] loop_1 second+2"));
        // 37.05 + 22.65
        assert_eq!(lines[2].split(',').nth(2), Some("59.7"));
    }

    #[test]
    fn frames_command_writes_one_column_per_frame() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("proteins.txt");
        let output = dir.path().join("frames.csv");
        fs::write(&input, "p1 GAPT APT\np2 APTW WYT\n").unwrap();

        let cli = Cli::parse_from([
            "loopcmp",
            "frames",
            "p1",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-l",
            "1,2",
            "-s",
            "1",
            "-t",
            "first",
        ]);
        let Commands::Frames(args) = cli.command else {
            panic!("Expected 'frames' subcommand");
        };
        shifts::run_frames(args, true).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[1], ",unshifted,loop_1 first+1,loop_2 first+1");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn scans_reject_flags_they_cannot_use() {
        for argv in [
            &["loopcmp", "shifts", "p1", "-i", "missing.txt", "-p", "p2"][..],
            &["loopcmp", "frames", "p1", "-i", "missing.txt", "--no-collapse"][..],
            &["loopcmp", "best-shifts", "-i", "missing.txt", "-f", "1:first:1"][..],
        ] {
            let result = match Cli::parse_from(argv).command {
                Commands::Shifts(args) => shifts::run(args, true),
                Commands::Frames(args) => shifts::run_frames(args, true),
                Commands::BestShifts(args) => compare::run_best_shifts(args, true),
                _ => panic!("unexpected subcommand"),
            };
            assert!(
                matches!(&result, Err(CliError::Argument(msg)) if msg.contains("does not accept")),
                "{argv:?} gave {result:?}"
            );
        }
    }

    #[test]
    fn empty_catalogue_is_an_argument_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.txt");
        fs::write(&input, "\n\n").unwrap();
        assert!(matches!(
            load_catalogue(&input),
            Err(CliError::Argument(_))
        ));
    }

    #[test]
    fn unreadable_catalogue_is_a_parsing_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.txt");
        fs::write(&input, "p1 AB1\n").unwrap();
        assert!(matches!(
            load_catalogue(&input),
            Err(CliError::FileParsing { .. })
        ));
    }

    #[test]
    fn output_to_missing_directory_is_reported_with_its_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope/out.csv");
        let table = ComparisonTable {
            title: "t".to_string(),
            row_labels: vec![],
            column_labels: vec![],
            rows: vec![],
        };
        let result = write_output(&[table], Some(&path));
        assert!(matches!(result, Err(CliError::Output { path: p, .. }) if p == path));
    }
}
