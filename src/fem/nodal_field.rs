use super::{FemMesh, Solution};
use crate::StrError;
use russell_lab::Vector;
use std::sync::Arc;

/// Holds a scalar field (e.g., the temperature) defined by its values at the mesh points
///
/// The field varies linearly within each triangle.
#[derive(Clone, Debug)]
pub struct NodalField {
    mesh: Arc<FemMesh>,
    values: Vector,
}

impl NodalField {
    /// Allocates a new instance
    pub fn new(mesh: Arc<FemMesh>, values: &[f64]) -> Result<Self, StrError> {
        if values.len() != mesh.npoint() {
            return Err("the number of values must equal the number of points");
        }
        Ok(NodalField {
            mesh,
            values: Vector::from(&values.to_vec()),
        })
    }

    /// Allocates a new instance by evaluating a function at the mesh points
    pub fn from_fn<F>(mesh: Arc<FemMesh>, f: F) -> Self
    where
        F: Fn(&[f64]) -> f64,
    {
        let npoint = mesh.npoint();
        let mut values = Vector::new(npoint);
        for p in 0..npoint {
            values[p] = f(mesh.coords(p));
        }
        NodalField { mesh, values }
    }

    /// Returns the mesh
    pub fn mesh(&self) -> &Arc<FemMesh> {
        &self.mesh
    }

    /// Returns the nodal values
    pub fn values(&self) -> &[f64] {
        self.values.as_data()
    }

    /// Evaluates the field at x using the closest cell if x falls outside the mesh
    pub fn extrapolated_value_at(&self, x: &[f64]) -> Result<f64, StrError> {
        let location = self.mesh.locate(x)?;
        Ok(self.interpolate_in_cell(location.cell, &location.bary))
    }

    fn interpolate_in_cell(&self, cell: usize, bary: &[f64; 3]) -> f64 {
        let points = &self.mesh.mesh.cells[cell].points;
        bary[0] * self.values[points[0]] + bary[1] * self.values[points[1]] + bary[2] * self.values[points[2]]
    }
}

impl Solution for NodalField {
    fn value_at(&self, x: &[f64]) -> Result<f64, StrError> {
        let location = self.mesh.locate(x)?;
        if !location.inside {
            return Err("the point is outside the mesh");
        }
        Ok(self.interpolate_in_cell(location.cell, &location.bary))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
