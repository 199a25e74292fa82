use super::{DEFAULT_FIGURE_EXTENSION, DEFAULT_MESH_DIR};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Holds the configuration of a convergence test
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConvergenceConfig {
    /// Name of the geometry file, identical for all refinement levels
    pub geo_name: String,

    /// Names of the refinement levels, from the coarsest to the finest
    pub refinements: Vec<String>,

    /// Names of the convergence measures to compute
    pub measures: Vec<String>,

    /// Root directory of the meshes (one subdirectory per refinement)
    pub mesh_dir: String,

    /// Directory for the figures and results (current directory if None)
    pub out_dir: Option<String>,

    /// Coordinates of the points used by the local measure
    pub points: Option<Vec<Vec<f64>>>,

    /// Extension (format) of the figures
    pub figure_extension: String,
}

impl Default for ConvergenceConfig {
    fn default() -> Self {
        ConvergenceConfig {
            geo_name: String::new(),
            refinements: Vec::new(),
            measures: Vec::new(),
            mesh_dir: DEFAULT_MESH_DIR.to_string(),
            out_dir: None,
            points: None,
            figure_extension: DEFAULT_FIGURE_EXTENSION.to_string(),
        }
    }
}

impl ConvergenceConfig {
    /// Allocates a new instance
    pub fn new(geo_name: &str) -> Self {
        ConvergenceConfig {
            geo_name: geo_name.to_string(),
            ..Default::default()
        }
    }

    /// Reads a JSON file containing the configuration
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
        let config = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        Ok(config)
    }

    /// Sets the refinement levels (from the coarsest to the finest)
    pub fn set_refinements(&mut self, refinements: &[&str]) -> Result<&mut Self, StrError> {
        if refinements.len() < 2 {
            return Err("there must be at least two refinements");
        }
        if refinements.iter().any(|r| r.is_empty()) {
            return Err("refinement names must not be empty");
        }
        self.refinements = refinements.iter().map(|r| r.to_string()).collect();
        Ok(self)
    }

    /// Sets the names of the convergence measures
    pub fn set_measures(&mut self, measures: &[&str]) -> Result<&mut Self, StrError> {
        if measures.is_empty() {
            return Err("at least one convergence measure is required");
        }
        self.measures = measures.iter().map(|m| m.to_string()).collect();
        Ok(self)
    }

    /// Sets the root directory of the meshes
    pub fn set_mesh_dir(&mut self, mesh_dir: &str) -> Result<&mut Self, StrError> {
        if mesh_dir.is_empty() {
            return Err("mesh_dir must not be empty");
        }
        self.mesh_dir = mesh_dir.to_string();
        Ok(self)
    }

    /// Sets the output directory
    pub fn set_out_dir(&mut self, out_dir: &str) -> Result<&mut Self, StrError> {
        if out_dir.is_empty() {
            return Err("out_dir must not be empty");
        }
        self.out_dir = Some(out_dir.to_string());
        Ok(self)
    }

    /// Sets the coordinates of the points used by the local measure
    pub fn set_points(&mut self, points: &[&[f64]]) -> Result<&mut Self, StrError> {
        if points.is_empty() {
            return Err("at least one point is required");
        }
        let ndim = points[0].len();
        if ndim < 1 || points.iter().any(|x| x.len() != ndim) {
            return Err("all points must have the same (non-zero) number of coordinates");
        }
        self.points = Some(points.iter().map(|x| x.to_vec()).collect());
        Ok(self)
    }

    /// Sets the extension (format) of the figures, e.g., "svg" or "pdf"
    pub fn set_figure_extension(&mut self, extension: &str) -> Result<&mut Self, StrError> {
        if extension.is_empty() || extension.starts_with('.') {
            return Err("the extension must be given without the dot");
        }
        self.figure_extension = extension.to_string();
        Ok(self)
    }
}

impl fmt::Display for ConvergenceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Convergence test configuration")?;
        writeln!(f, "==============================")?;
        writeln!(f, "geo_name = {:?}", self.geo_name)?;
        writeln!(f, "refinements = {:?}", self.refinements)?;
        writeln!(f, "measures = {:?}", self.measures)?;
        writeln!(f, "mesh_dir = {:?}", self.mesh_dir)?;
        writeln!(f, "out_dir = {:?}", self.out_dir)?;
        match &self.points {
            Some(points) => writeln!(f, "points = {} points", points.len())?,
            None => writeln!(f, "points = None")?,
        }
        writeln!(f, "figure_extension = {:?}", self.figure_extension)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
