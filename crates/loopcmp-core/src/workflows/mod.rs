//! # Workflows Module
//!
//! Top-level entry points that run the engine over a whole protein catalogue and return
//! labeled results.
//!
//! - [`compare`] - Proteins of interest against the catalogue (shift search or one fixed
//!   frame), one protein across every shift or every single-loop frame, and the best shift
//!   for every pair.
//! - [`quick`] - A fixed set of frames (unshifted, then each loop shifted by one residue on
//!   either side), one matrix per frame.
//! - [`motifs`] - The structural motif detector applied to every protein's loops.
//! - [`results`] - Typed result containers, convertible into plain tables for output.
//!
//! Comparison workflows fail as a whole on the first error; no partial results are returned.

pub mod compare;
pub mod motifs;
pub mod quick;
pub mod results;
