//! Implements the convergence test and the measures comparing consecutive solutions

mod measure;
pub use crate::convergence::convergence_test::*;
pub use crate::convergence::measure::*;
