//! Makes available common structures needed to run a convergence test
//!
//! You may write `use floorsim::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{CaseStudy, ConvergenceConfig, FilePath, DEFAULT_TEST_DIR, GEOMETRY_DRY, GEOMETRY_WET};
pub use crate::convergence::{ConvergenceTest, Measure, Stage};
pub use crate::fem::{DomainMesh, FemMesh, FunctionSpace, LagrangeSpace, NodalField, Solution, SolutionFile};
pub use crate::util::ConvergenceResults;
pub use crate::{Error, StrError};
