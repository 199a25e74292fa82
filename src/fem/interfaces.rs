use crate::StrError;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Defines a numerical solution computed by the finite element engine
pub trait Solution {
    /// Evaluates the solution at the point with coordinates `x`
    fn value_at(&self, x: &[f64]) -> Result<f64, StrError>;
}

/// Defines the function space in which a solution has been found
pub trait FunctionSpace<S> {
    /// Interpolates a solution (possibly defined on another mesh) onto this space
    fn interpolate(&self, other: &S) -> Result<S, StrError>;

    /// Returns the L2 norm of the difference `a - b` (both belonging to this space)
    fn error_norm(&self, a: &S, b: &S) -> Result<f64, StrError>;
}

/// Defines the mesh data needed by the convergence measures
pub trait DomainMesh<S> {
    /// Returns the maximum cell diameter
    fn hmax(&self) -> f64;

    /// Returns the map of boundary names to facet markers
    fn facet_markers(&self) -> &BTreeMap<String, usize>;

    /// Integrates the solution over all facets with the given marker
    fn facet_integral(&self, solution: &S, marker: usize) -> Result<f64, StrError>;
}

impl<S, M> DomainMesh<S> for Arc<M>
where
    M: DomainMesh<S>,
{
    fn hmax(&self) -> f64 {
        (**self).hmax()
    }

    fn facet_markers(&self) -> &BTreeMap<String, usize> {
        (**self).facet_markers()
    }

    fn facet_integral(&self, solution: &S, marker: usize) -> Result<f64, StrError> {
        (**self).facet_integral(solution, marker)
    }
}
