//! # loopcmp Core Library
//!
//! Scores how similar proteins are by comparing their loops residue by residue, with an
//! optional frameshift that slides one loop against the other by a neutral filler residue.
//!
//! ## Architecture
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Peptide`, `Protein`,
//!   `ProteinCatalogue`), the residue property table and scorers, the substitution matrix
//!   builder, the structural motif detector, and file I/O.
//!
//! - **[`engine`]: The Comparison Logic.** Pairwise peptide scoring, the lazy frameshift
//!   search, loop aggregation, comparison settings, and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Catalogue-wide comparisons that return labeled
//!   matrices and shift scans, the quick fixed-frame analysis, and catalogue motif scans.
//!
//! ```no_run
//! use loopcmp::core::io::text::WhitespaceCatalogue;
//! use loopcmp::core::io::traits::CatalogueFile;
//! use loopcmp::core::properties::scoring::PhysicochemicalScorer;
//! use loopcmp::engine::config::ComparisonConfigBuilder;
//! use loopcmp::engine::progress::ProgressReporter;
//! use loopcmp::workflows::compare::full_prot_comparison;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalogue = WhitespaceCatalogue::read_from_path("proteins.txt")?;
//! let config = ComparisonConfigBuilder::new().max_shift(2).build()?;
//! let scorer = PhysicochemicalScorer::default();
//! let matrix = full_prot_comparison(&catalogue, &config, &scorer, &ProgressReporter::new())?;
//! println!("{}", matrix.title);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
