use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "The loopcmp developers",
    version,
    about = "loopcmp - Compare proteins loop by loop with physicochemical residue scoring and frameshift search.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress bars
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare proteins of interest against every protein in the catalogue.
    Compare(CompareArgs),
    /// Score one protein against the catalogue at every shift.
    Shifts(ShiftsArgs),
    /// Score one protein against the catalogue with each loop shifted on its own.
    Frames(ShiftsArgs),
    /// Compare every pair of proteins, keeping each pair's best shift.
    BestShifts(CompareArgs),
    /// Compare all proteins unshifted, then with each loop shifted by one residue.
    Quick(QuickArgs),
    /// Print the 20x20 amino acid comparison matrix.
    Matrix(MatrixArgs),
    /// Report structural motifs found in each protein's loops.
    Motifs(MotifsArgs),
}

/// Input catalogue and output destination shared by the comparison commands.
#[derive(Args, Debug)]
pub struct IoArgs {
    /// Path to the protein catalogue: one protein per line, name followed by its loops.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Write the result as CSV to this file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct ScorerArgs {
    /// Path to a TOML file with scoring weights (misc, hydrophobicity, size).
    #[arg(short, long, value_name = "PATH")]
    pub weights: Option<PathBuf>,
}

/// Comparison settings. Every flag overrides the matching key of the config file.
#[derive(Args, Debug, Default)]
pub struct ComparisonArgs {
    /// Path to a comparison configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Loop numbers to compare, e.g. `-l 1,2`.
    #[arg(short, long, value_name = "N,...", value_delimiter = ',')]
    pub loops: Vec<usize>,

    /// Restrict the rows of the result to these proteins, e.g. `-p prot_a,prot_b`.
    #[arg(short, long = "protein", value_name = "ID,...", value_delimiter = ',')]
    pub proteins: Vec<String>,

    /// Largest frameshift offset to try (0 disables frameshift).
    #[arg(short = 's', long, value_name = "INT", allow_negative_numbers = true)]
    pub max_shift: Option<isize>,

    /// Which peptide of each pair receives the filler: first, second or both.
    #[arg(short = 't', long, value_name = "SIDE")]
    pub shift_target: Option<String>,

    /// Keep the best shift shared by all loops instead of each loop's own best shift.
    #[arg(long)]
    pub no_collapse: bool,

    /// Shift a single loop by a fixed amount instead of searching, e.g. `-f 1:second:3`.
    #[arg(short, long, value_name = "LOOP:SIDE:OFFSET")]
    pub frame: Option<String>,

    #[command(flatten)]
    pub scorer: ScorerArgs,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S max-shift=3
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    #[command(flatten)]
    pub io: IoArgs,

    #[command(flatten)]
    pub comparison: ComparisonArgs,
}

#[derive(Args, Debug)]
pub struct ShiftsArgs {
    /// The protein to scan against the catalogue.
    #[arg(required = true, value_name = "PROTEIN")]
    pub protein: String,

    #[command(flatten)]
    pub io: IoArgs,

    #[command(flatten)]
    pub comparison: ComparisonArgs,
}

#[derive(Args, Debug)]
pub struct QuickArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Loop numbers to compare.
    #[arg(short, long, value_name = "N,...", value_delimiter = ',', default_values_t = [1, 2])]
    pub loops: Vec<usize>,

    #[command(flatten)]
    pub scorer: ScorerArgs,
}

#[derive(Args, Debug)]
pub struct MatrixArgs {
    /// Write the matrix as CSV to this file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub scorer: ScorerArgs,
}

#[derive(Args, Debug)]
pub struct MotifsArgs {
    /// Path to the protein catalogue.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Write the report to this file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Loop numbers to scan.
    #[arg(short, long, value_name = "N,...", value_delimiter = ',', default_values_t = [1, 2])]
    pub loops: Vec<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_accepts_comma_separated_lists() {
        let cli = Cli::parse_from([
            "loopcmp", "compare", "-i", "in.txt", "-l", "1,2", "-p", "a,b", "-s", "3",
        ]);
        let Commands::Compare(args) = cli.command else {
            panic!("expected 'compare' subcommand");
        };
        assert_eq!(args.comparison.loops, vec![1, 2]);
        assert_eq!(args.comparison.proteins, vec!["a", "b"]);
        assert_eq!(args.comparison.max_shift, Some(3));
        assert!(args.io.output.is_none());
    }

    #[test]
    fn negative_shift_reaches_validation() {
        let cli = Cli::parse_from(["loopcmp", "best-shifts", "-i", "in.txt", "-s", "-1"]);
        let Commands::BestShifts(args) = cli.command else {
            panic!("expected 'best-shifts' subcommand");
        };
        assert_eq!(args.comparison.max_shift, Some(-1));
    }

    #[test]
    fn quick_and_motifs_default_to_the_first_two_loops() {
        let cli = Cli::parse_from(["loopcmp", "quick", "-i", "in.txt"]);
        let Commands::Quick(args) = cli.command else {
            panic!("expected 'quick' subcommand");
        };
        assert_eq!(args.loops, vec![1, 2]);

        let cli = Cli::parse_from(["loopcmp", "-vv", "motifs", "-i", "in.txt", "-l", "3"]);
        assert_eq!(cli.verbose, 2);
        let Commands::Motifs(args) = cli.command else {
            panic!("expected 'motifs' subcommand");
        };
        assert_eq!(args.loops, vec![3]);
    }

    #[test]
    fn shifts_takes_the_protein_as_a_positional_argument() {
        let cli = Cli::parse_from(["loopcmp", "shifts", "prot_a", "-i", "in.txt", "-t", "first"]);
        let Commands::Shifts(args) = cli.command else {
            panic!("expected 'shifts' subcommand");
        };
        assert_eq!(args.protein, "prot_a");
        assert_eq!(args.comparison.shift_target.as_deref(), Some("first"));
    }

    #[test]
    fn frames_shares_the_scan_arguments() {
        let cli = Cli::parse_from(["loopcmp", "frames", "prot_a", "-i", "in.txt", "-s", "7"]);
        let Commands::Frames(args) = cli.command else {
            panic!("expected 'frames' subcommand");
        };
        assert_eq!(args.protein, "prot_a");
        assert_eq!(args.comparison.max_shift, Some(7));

        let cli = Cli::parse_from(["loopcmp", "compare", "-i", "in.txt", "-f", "1:second:3"]);
        let Commands::Compare(args) = cli.command else {
            panic!("expected 'compare' subcommand");
        };
        assert_eq!(args.comparison.frame.as_deref(), Some("1:second:3"));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["loopcmp", "-q", "-v", "matrix"]);
        assert!(result.is_err());
    }
}
