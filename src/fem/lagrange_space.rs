use super::{FemMesh, FunctionSpace, NodalField};
use crate::StrError;
use std::sync::Arc;

/// Implements the space of continuous piecewise-linear functions on a mesh of triangles
#[derive(Clone, Debug)]
pub struct LagrangeSpace {
    mesh: Arc<FemMesh>,
}

impl LagrangeSpace {
    /// Allocates a new instance
    pub fn new(mesh: Arc<FemMesh>) -> Self {
        LagrangeSpace { mesh }
    }

    /// Returns the mesh
    pub fn mesh(&self) -> &Arc<FemMesh> {
        &self.mesh
    }

    /// Returns the dimension of the space (number of degrees of freedom)
    pub fn dim(&self) -> usize {
        self.mesh.npoint()
    }

    fn check_member(&self, field: &NodalField) -> Result<(), StrError> {
        if !Arc::ptr_eq(field.mesh(), &self.mesh) {
            return Err("the field does not belong to this function space");
        }
        Ok(())
    }
}

impl FunctionSpace<NodalField> for LagrangeSpace {
    /// Evaluates the other field at the points of this space
    ///
    /// Points falling outside the other mesh (e.g., along curved boundaries discretized
    /// differently) take the value extrapolated from the closest cell.
    fn interpolate(&self, other: &NodalField) -> Result<NodalField, StrError> {
        if Arc::ptr_eq(other.mesh(), &self.mesh) {
            return Ok(other.clone());
        }
        let npoint = self.mesh.npoint();
        let mut values = vec![0.0; npoint];
        for p in 0..npoint {
            values[p] = other.extrapolated_value_at(self.mesh.coords(p))?;
        }
        NodalField::new(self.mesh.clone(), &values)
    }

    /// Computes the exact L2 norm of the (piecewise-linear) difference
    fn error_norm(&self, a: &NodalField, b: &NodalField) -> Result<f64, StrError> {
        self.check_member(a)?;
        self.check_member(b)?;
        let (ua, ub) = (a.values(), b.values());
        let mut sum = 0.0;
        for (c, cell) in self.mesh.mesh.cells.iter().enumerate() {
            let d: Vec<_> = cell.points.iter().map(|p| ua[*p] - ub[*p]).collect();
            let squares = d[0] * d[0] + d[1] * d[1] + d[2] * d[2];
            let products = d[0] * d[1] + d[1] * d[2] + d[2] * d[0];
            sum += self.mesh.cell_area(c) * (squares + products) / 6.0;
        }
        Ok(f64::sqrt(sum))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
