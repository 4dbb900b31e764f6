//! # Core Module
//!
//! Stateless building blocks of the comparison tool: the data model, the residue property
//! model, the structural motif detector, and file I/O boundaries.
//!
//! ## Architecture
//!
//! - **Data Model** ([`models`]) - Residues, peptides, loops, proteins, and the catalogue
//! - **Residue Properties** ([`properties`]) - Physicochemical table, pairwise scoring, and the
//!   substitution matrix builder
//! - **Structural Motifs** ([`motifs`]) - Sliding-window motif rules and their scanner
//! - **File I/O** ([`io`]) - Reading protein catalogues and writing result tables
//!
//! Everything here is a pure function of its inputs; the tables in [`properties`] and
//! [`motifs`] are process-wide constants.

pub mod io;
pub mod models;
pub mod motifs;
pub mod properties;
