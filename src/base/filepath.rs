use crate::StrError;
use std::env;
use std::path::{Path, PathBuf};

pub struct FilePath {}

impl FilePath {
    /// Returns the filepath of the mesh (geometry) of a refinement level
    ///
    /// # Input
    ///
    /// * `mesh_dir` -- the root directory of all meshes, e.g., "meshes"
    /// * `refinement` -- the name of the refinement level, e.g., "coarse"
    /// * `geo_name` -- the name of the geometry file, e.g., "segment.geo"
    pub fn mesh(mesh_dir: &str, refinement: &str, geo_name: &str) -> PathBuf {
        Path::new(mesh_dir).join(refinement).join(geo_name)
    }

    /// Returns the filepath of the solution (.json) exported for a mesh file
    pub fn solution(mesh_path: &Path) -> PathBuf {
        mesh_path.with_extension("json")
    }

    /// Returns the filepath of the convergence figure of a measure
    ///
    /// # Input
    ///
    /// * `out_dir` -- the (resolved) output directory
    /// * `measure` -- the name of the convergence measure
    /// * `geo_name` -- the name of the geometry file
    /// * `extension` -- the figure extension without the dot, e.g., "svg"
    pub fn figure(out_dir: &Path, measure: &str, geo_name: &str, extension: &str) -> PathBuf {
        out_dir.join(format!("convergence_test_{}_{}.{}", measure, geo_name, extension))
    }

    /// Returns the filepath of the convergence results (.json)
    pub fn results(out_dir: &Path, geo_name: &str) -> PathBuf {
        out_dir.join(format!("convergence_test_{}.json", geo_name))
    }

    /// Resolves the output directory as an absolute path
    ///
    /// A relative directory is joined to the current directory; no directory given
    /// means the current directory.
    pub fn out_dir(out_dir: Option<&str>) -> Result<PathBuf, StrError> {
        let current = env::current_dir().map_err(|_| "cannot get the current directory")?;
        match out_dir {
            Some(dir) => {
                let path = Path::new(dir);
                if path.is_absolute() {
                    Ok(path.to_path_buf())
                } else {
                    Ok(current.join(path))
                }
            }
            None => Ok(current),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
