//! # Engine Module
//!
//! The comparison engine: how two peptides are scored against each other, how alternative
//! frames are enumerated, and how per-loop scores combine into one value per protein pair.
//!
//! - [`pairwise`] sums per-position residue scores of equal-length sequences.
//! - [`frameshift`] enumerates filler insertions lazily and picks the best frame.
//! - [`aggregate`] combines loops, either collapsing each loop to its best frame or keeping
//!   one total per shift.
//! - [`config`] holds the explicit comparison settings and their builder.
//! - [`progress`] forwards progress events to an optional callback.
//!
//! Nothing here touches files or global state; every function is a pure computation over
//! borrowed, immutable inputs.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod frameshift;
pub mod pairwise;
pub mod progress;
