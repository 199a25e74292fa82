use crate::fem::{DomainMesh, FunctionSpace, Solution};
use crate::Error;
use russell_lab::{vec_add, vec_norm, Norm, Vector};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Defines the measures of the difference between two consecutive solutions
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum Measure {
    /// L2 norm of the difference after interpolating the previous solution onto the current space
    Global,

    /// Euclidean norm of the difference of the values at a set of points
    Local,

    /// Absolute difference of the integral of the solution over all named boundaries
    FacetIntegral,

    /// Difference of the integral of the solution over the domain (not available)
    DomainIntegral,
}

impl Measure {
    /// Returns the measure with the given name
    pub fn from(name: &str) -> Result<Self, Error> {
        match name {
            "global" => Ok(Measure::Global),
            "local" => Ok(Measure::Local),
            "facet_integral" => Ok(Measure::FacetIntegral),
            "domain_integral" => Ok(Measure::DomainIntegral),
            _ => Err(Error::UnknownMeasure(name.to_string())),
        }
    }

    /// Returns the name of the measure
    pub fn name(&self) -> &'static str {
        match self {
            Measure::Global => "global",
            Measure::Local => "local",
            Measure::FacetIntegral => "facet_integral",
            Measure::DomainIntegral => "domain_integral",
        }
    }

    /// Returns the label of the y-axis of the convergence figure
    pub fn ylabel(&self) -> &'static str {
        match self {
            Measure::Global => "errornorm(solution - LagrangeInterpolator(previous_solution))",
            Measure::Local => "L2_norm(solution(points) - previous_solution(points))",
            Measure::FacetIntegral => "facet_integral(solution) - facet_integral(previous_solution)",
            Measure::DomainIntegral => "domain_integral(solution) - domain_integral(previous_solution)",
        }
    }

    /// Returns true if the measure needs the coordinates of sample points
    pub fn requires_points(&self) -> bool {
        matches!(self, Measure::Local)
    }

    /// Allocates the state carried by the measure from one refinement to the next
    pub fn state(&self) -> MeasureState {
        match self {
            Measure::Global => MeasureState::Global,
            Measure::Local => MeasureState::Local { previous_values: None },
            Measure::FacetIntegral => MeasureState::FacetIntegral { previous_integral: None },
            Measure::DomainIntegral => MeasureState::DomainIntegral,
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Holds the data computed on one refinement and needed on the next one
#[derive(Clone, Debug)]
pub enum MeasureState {
    Global,

    Local { previous_values: Option<Vector> },

    FacetIntegral { previous_integral: Option<f64> },

    DomainIntegral,
}

impl MeasureState {
    /// Returns the measure this state belongs to
    pub fn measure(&self) -> Measure {
        match self {
            MeasureState::Global => Measure::Global,
            MeasureState::Local { .. } => Measure::Local,
            MeasureState::FacetIntegral { .. } => Measure::FacetIntegral,
            MeasureState::DomainIntegral => Measure::DomainIntegral,
        }
    }

    /// Compares the current solution with the previous one
    ///
    /// Returns None when there is no previous solution (first refinement). The carried data
    /// (point values, facet integral) is always updated, including on the first refinement.
    ///
    /// # Input
    ///
    /// * `points` -- coordinates of the sample points (required by the local measure)
    /// * `current` -- the solution on the current refinement
    /// * `space` -- the function space of the current solution
    /// * `mesh` -- the current mesh
    /// * `previous` -- the solution on the previous refinement, if any
    pub fn evaluate<S, V, M>(
        &mut self,
        points: Option<&[Vec<f64>]>,
        current: &S,
        space: &V,
        mesh: &M,
        previous: Option<&S>,
    ) -> Result<Option<f64>, Error>
    where
        S: Solution,
        V: FunctionSpace<S>,
        M: DomainMesh<S>,
    {
        debug!(measure = self.measure().name(), "computing convergence measure");
        match self {
            MeasureState::Global => match previous {
                Some(prev) => {
                    let interpolated = space.interpolate(prev).map_err(Error::upstream)?;
                    let difference = space.error_norm(&interpolated, current).map_err(Error::upstream)?;
                    Ok(Some(difference))
                }
                None => Ok(None),
            },

            MeasureState::Local { previous_values } => {
                let points = points.ok_or(Error::MissingInput {
                    measure: "local",
                    input: "point coordinates",
                })?;
                let mut values = Vector::new(points.len());
                for (i, x) in points.iter().enumerate() {
                    values[i] = current.value_at(x).map_err(Error::upstream)?;
                }
                let difference = match (previous, previous_values.as_ref()) {
                    (Some(_), Some(prev)) => {
                        let mut diff = Vector::new(values.dim());
                        vec_add(&mut diff, 1.0, &values, -1.0, prev).map_err(Error::upstream)?;
                        Some(vec_norm(&diff, Norm::Euc))
                    }
                    _ => None,
                };
                *previous_values = Some(values);
                Ok(difference)
            }

            MeasureState::FacetIntegral { previous_integral } => {
                let mut integral = 0.0;
                for marker in mesh.facet_markers().values() {
                    integral += mesh.facet_integral(current, *marker).map_err(Error::upstream)?;
                }
                let difference = match (previous, *previous_integral) {
                    (Some(_), Some(prev)) => Some(f64::abs(prev - integral)),
                    _ => None,
                };
                *previous_integral = Some(integral);
                Ok(difference)
            }

            MeasureState::DomainIntegral => Err(Error::NotImplemented("domain_integral")),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
