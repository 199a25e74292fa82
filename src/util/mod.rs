//! Contains some utility functions and structures

mod convergence_results;

pub use convergence_results::*;
