mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("🚀 loopcmp CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let quiet = cli.quiet;
    let command_result = match cli.command {
        Commands::Compare(args) => {
            info!("Dispatching to 'compare' command.");
            commands::compare::run(args, quiet)
        }
        Commands::Shifts(args) => {
            info!("Dispatching to 'shifts' command.");
            commands::shifts::run(args, quiet)
        }
        Commands::Frames(args) => {
            info!("Dispatching to 'frames' command.");
            commands::shifts::run_frames(args, quiet)
        }
        Commands::BestShifts(args) => {
            info!("Dispatching to 'best-shifts' command.");
            commands::compare::run_best_shifts(args, quiet)
        }
        Commands::Quick(args) => {
            info!("Dispatching to 'quick' command.");
            commands::quick::run(args, quiet)
        }
        Commands::Matrix(args) => {
            info!("Dispatching to 'matrix' command.");
            commands::matrix::run(args)
        }
        Commands::Motifs(args) => {
            info!("Dispatching to 'motifs' command.");
            commands::motifs::run(args)
        }
    };

    match &command_result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    command_result
}
