//! Defines the interface to the finite element engine and a piecewise-linear backend
//!
//! The convergence test only talks to the engine through the [Solution], [FunctionSpace],
//! and [DomainMesh] traits. The backend implements these traits for temperature fields
//! exported (as JSON) by the engine on meshes of linear triangles.

mod fem_mesh;
mod interfaces;
mod lagrange_space;
mod nodal_field;
mod sample_meshes;
mod solution_file;
pub use crate::fem::fem_mesh::*;
pub use crate::fem::interfaces::*;
pub use crate::fem::lagrange_space::*;
pub use crate::fem::nodal_field::*;
pub use crate::fem::sample_meshes::*;
pub use crate::fem::solution_file::*;
