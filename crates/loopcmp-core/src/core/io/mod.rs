//! Reading protein catalogues and writing result tables.
//!
//! The comparison engine never touches files; these modules sit at the boundary and convert
//! between text formats and the in-memory [`crate::core::models`] types.

pub mod csv_table;
pub mod text;
pub mod traits;
