use crate::StrError;
use russell_lab::Matrix;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds numerical results from a convergence analysis with varying mesh sizes
///
/// Row `i` compares the solution on refinement `i + 1` with the solution on refinement `i`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceResults {
    pub geo_name: String,           // name of the geometry file
    pub refinements: Vec<String>,   // names of the refinement levels
    pub measures: Vec<String>,      // names of the convergence measures (columns)
    pub mesh_sizes: Vec<f64>,       // hmax of the finer mesh of each comparison
    pub differences: Vec<Vec<f64>>, // [ncomparison][nmeasure] differences
}

impl ConvergenceResults {
    /// Allocates a new structure from the table of differences
    pub fn new(
        geo_name: &str,
        refinements: &[String],
        measures: &[String],
        mesh_sizes: Vec<f64>,
        table: &Matrix,
    ) -> Result<Self, StrError> {
        let (nrow, ncol) = table.dims();
        if mesh_sizes.len() != nrow {
            return Err("the number of mesh sizes must equal the number of rows of the table");
        }
        if measures.len() != ncol {
            return Err("the number of measures must equal the number of columns of the table");
        }
        let differences = (0..nrow)
            .map(|i| (0..ncol).map(|j| table.get(i, j)).collect())
            .collect();
        Ok(ConvergenceResults {
            geo_name: geo_name.to_string(),
            refinements: refinements.to_vec(),
            measures: measures.to_vec(),
            mesh_sizes,
            differences,
        })
    }

    /// Returns the number of comparisons (rows)
    pub fn nrow(&self) -> usize {
        self.differences.len()
    }

    /// Returns the number of measures (columns)
    pub fn ncol(&self) -> usize {
        self.measures.len()
    }

    /// Returns the differences computed by one measure
    pub fn column(&self, j: usize) -> Vec<f64> {
        self.differences.iter().map(|row| row[j]).collect()
    }

    /// Reads a JSON file containing the results
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
        let results = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        Ok(results)
    }

    /// Writes a JSON file with the results
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
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

impl fmt::Display for ConvergenceResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>16}", "hmax")?;
        for measure in &self.measures {
            write!(f, "{:>16}", measure)?;
        }
        writeln!(f)?;
        for (hmax, row) in self.mesh_sizes.iter().zip(&self.differences) {
            write!(f, "{:>16.6e}", hmax)?;
            for value in row {
                write!(f, "{:>16.6e}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
