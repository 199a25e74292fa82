//! Mesh convergence studies for radiant floor-heating simulations
//!
//! The finite element solve itself is delegated to an external engine. This crate runs the
//! same solve over a sequence of refined meshes, compares consecutive solutions, and reports
//! how the differences decrease with the mesh size.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod convergence;
mod error;
pub mod fem;
pub mod prelude;
pub mod util;
pub use crate::error::*;
