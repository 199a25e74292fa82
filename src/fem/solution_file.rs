use super::{FemMesh, LagrangeSpace, NodalField};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

/// Holds a temperature field exported by the finite element engine together with its mesh
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SolutionFile {
    /// The mesh
    pub mesh: FemMesh,

    /// Temperature at each point of the mesh
    pub temperature: Vec<f64>,
}

impl SolutionFile {
    /// Reads a JSON file containing the mesh and the temperature field
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let data: SolutionFile = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        data.mesh.validate()?;
        if data.temperature.len() != data.mesh.npoint() {
            return Err("the number of temperature values must equal the number of points");
        }
        Ok(data)
    }

    /// Writes a JSON file with the mesh and the temperature field
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }

    /// Reads a solution file and returns the (solution, function space, mesh) triple
    ///
    /// The three items share the same mesh.
    pub fn load<P>(full_path: &P) -> Result<(NodalField, LagrangeSpace, Arc<FemMesh>), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let data = SolutionFile::read_json(full_path)?;
        let mesh = Arc::new(data.mesh);
        let solution = NodalField::new(mesh.clone(), &data.temperature)?;
        let space = LagrangeSpace::new(mesh.clone());
        Ok((solution, space, mesh))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SolutionFile;
    use crate::fem::{FunctionSpace, SampleMeshes, Solution};
    use crate::StrError;
    use russell_lab::approx_eq;

    #[test]
    fn load_works() -> Result<(), StrError> {
        let data = SolutionFile {
            mesh: SampleMeshes::two_tri3(),
            temperature: vec![20.0, 21.0, 22.0, 21.0],
        };
        let path = "/tmp/floorsim/test/solution_file_load_works.json";
        data.write_json(path)?;
        let (solution, space, mesh) = SolutionFile::load(path)?;
        assert_eq!(solution.values(), &[20.0, 21.0, 22.0, 21.0]);
        approx_eq(solution.value_at(&[0.5, 0.5])?, 21.0, 1e-14);
        approx_eq(space.error_norm(&solution, &solution)?, 0.0, 1e-15);
        approx_eq(mesh.hmax(), f64::sqrt(2.0), 1e-15);
        Ok(())
    }

    #[test]
    fn read_json_captures_errors() -> Result<(), StrError> {
        let data = SolutionFile {
            mesh: SampleMeshes::two_tri3(),
            temperature: vec![20.0],
        };
        let path = "/tmp/floorsim/test/solution_file_read_json_captures_errors.json";
        data.write_json(path)?;
        assert_eq!(
            SolutionFile::read_json(path).err(),
            Some("the number of temperature values must equal the number of points")
        );
        assert_eq!(
            SolutionFile::read_json("/tmp/floorsim/test/__not_found__.json").err(),
            Some("file not found")
        );
        Ok(())
    }
}
