use super::{DomainMesh, NodalField};
use crate::base::INSIDE_TOLERANCE;
use crate::StrError;
use gemlab::mesh::{Mesh, PointId};
use gemlab::shapes::GeoKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds a boundary facet (a line segment in 2D)
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Facet {
    /// Marker of the boundary the facet belongs to
    pub marker: usize,

    /// The two points of the facet
    pub points: Vec<PointId>,
}

/// Holds the result of locating a point in the mesh
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Location {
    /// Index of the cell containing the point (or the closest cell)
    pub cell: usize,

    /// Barycentric coordinates of the point with respect to the cell
    pub bary: [f64; 3],

    /// Indicates that the point lies inside the cell (within tolerance)
    pub inside: bool,
}

/// Holds a mesh of linear triangles with named boundaries and subdomains
///
/// The subdomain (cell) markers correspond to the attribute of the cells.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FemMesh {
    /// The mesh
    pub mesh: Mesh,

    /// The boundary facets
    pub facets: Vec<Facet>,

    /// Maps boundary names to facet markers
    pub facet_markers: BTreeMap<String, usize>,

    /// Maps subdomain names to cell markers (attributes)
    pub cell_markers: BTreeMap<String, usize>,
}

impl FemMesh {
    /// Allocates a new instance
    pub fn new(
        mesh: Mesh,
        facets: Vec<Facet>,
        facet_markers: BTreeMap<String, usize>,
        cell_markers: BTreeMap<String, usize>,
    ) -> Result<Self, StrError> {
        let fem_mesh = FemMesh {
            mesh,
            facets,
            facet_markers,
            cell_markers,
        };
        fem_mesh.validate()?;
        Ok(fem_mesh)
    }

    /// Reads a JSON file containing the mesh
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
        let fem_mesh: FemMesh = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        fem_mesh.validate()?;
        Ok(fem_mesh)
    }

    /// Writes a JSON file with the mesh
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

    /// Checks the consistency of the mesh data
    pub fn validate(&self) -> Result<(), StrError> {
        if self.mesh.ndim != 2 {
            return Err("only 2D meshes are supported");
        }
        if self.mesh.cells.is_empty() {
            return Err("there must be at least one cell");
        }
        let npoint = self.mesh.points.len();
        if self.mesh.points.iter().any(|p| p.coords.len() != 2) {
            return Err("all points must have two coordinates");
        }
        for cell in &self.mesh.cells {
            if cell.kind != GeoKind::Tri3 {
                return Err("only Tri3 cells are supported");
            }
            if cell.points.len() != 3 || cell.points.iter().any(|p| *p >= npoint) {
                return Err("cell connectivity is invalid");
            }
        }
        for c in 0..self.mesh.cells.len() {
            if self.cell_area(c) <= 0.0 {
                return Err("cells must have a positive area");
            }
        }
        for facet in &self.facets {
            if facet.points.len() != 2 || facet.points.iter().any(|p| *p >= npoint) {
                return Err("facet connectivity is invalid");
            }
        }
        Ok(())
    }

    /// Returns the number of points
    pub fn npoint(&self) -> usize {
        self.mesh.points.len()
    }

    /// Returns the coordinates of a point
    pub fn coords(&self, p: PointId) -> &[f64] {
        &self.mesh.points[p].coords
    }

    /// Returns the area of a cell
    pub fn cell_area(&self, c: usize) -> f64 {
        let pts = &self.mesh.cells[c].points;
        let (a, b, c) = (self.coords(pts[0]), self.coords(pts[1]), self.coords(pts[2]));
        0.5 * f64::abs((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1]))
    }

    /// Returns the largest distance between two points of the same cell (maximum cell diameter)
    pub fn hmax(&self) -> f64 {
        let mut hmax = 0.0;
        for cell in &self.mesh.cells {
            let n = cell.points.len();
            for i in 0..n {
                for j in (i + 1)..n {
                    hmax = f64::max(hmax, self.distance(cell.points[i], cell.points[j]));
                }
            }
        }
        hmax
    }

    /// Returns the width and height of the bounding box of the domain
    pub fn domain_sizes(&self) -> (f64, f64) {
        let mut min = [f64::MAX, f64::MAX];
        let mut max = [f64::MIN, f64::MIN];
        for point in &self.mesh.points {
            for i in 0..2 {
                min[i] = f64::min(min[i], point.coords[i]);
                max[i] = f64::max(max[i], point.coords[i]);
            }
        }
        (max[0] - min[0], max[1] - min[1])
    }

    /// Returns the facet marker of a named boundary
    pub fn facet_marker(&self, name: &str) -> Result<usize, StrError> {
        self.facet_markers.get(name).copied().ok_or("unknown boundary name")
    }

    /// Returns the barycentric coordinates of x with respect to a cell
    pub fn barycentric(&self, c: usize, x: &[f64]) -> [f64; 3] {
        let pts = &self.mesh.cells[c].points;
        let (a, b, c) = (self.coords(pts[0]), self.coords(pts[1]), self.coords(pts[2]));
        let det = (b[1] - c[1]) * (a[0] - c[0]) + (c[0] - b[0]) * (a[1] - c[1]);
        let l0 = ((b[1] - c[1]) * (x[0] - c[0]) + (c[0] - b[0]) * (x[1] - c[1])) / det;
        let l1 = ((c[1] - a[1]) * (x[0] - c[0]) + (a[0] - c[0]) * (x[1] - c[1])) / det;
        [l0, l1, 1.0 - l0 - l1]
    }

    /// Finds the cell containing x
    ///
    /// If x is outside the mesh, returns the closest cell (in the barycentric sense)
    /// with `inside = false`.
    pub fn locate(&self, x: &[f64]) -> Result<Location, StrError> {
        if x.len() != 2 {
            return Err("the point must have two coordinates");
        }
        let mut best: Option<(f64, Location)> = None;
        for c in 0..self.mesh.cells.len() {
            let bary = self.barycentric(c, x);
            let worst = f64::min(bary[0], f64::min(bary[1], bary[2]));
            if worst >= -INSIDE_TOLERANCE {
                return Ok(Location { cell: c, bary, inside: true });
            }
            if best.map_or(true, |(w, _)| worst > w) {
                best = Some((worst, Location { cell: c, bary, inside: false }));
            }
        }
        best.map(|(_, location)| location).ok_or("there are no cells in the mesh")
    }

    /// Integrates nodal values (linear along each facet) over all facets with the given marker
    pub fn integrate_on_facets(&self, values: &[f64], marker: usize) -> Result<f64, StrError> {
        if values.len() != self.npoint() {
            return Err("the number of values must equal the number of points");
        }
        if !self.facet_markers.values().any(|m| *m == marker) {
            return Err("the facet marker does not correspond to any named boundary");
        }
        let mut integral = 0.0;
        for facet in self.facets.iter().filter(|f| f.marker == marker) {
            let (a, b) = (facet.points[0], facet.points[1]);
            integral += self.distance(a, b) * (values[a] + values[b]) / 2.0;
        }
        Ok(integral)
    }

    fn distance(&self, a: PointId, b: PointId) -> f64 {
        let (xa, xb) = (self.coords(a), self.coords(b));
        f64::sqrt((xb[0] - xa[0]) * (xb[0] - xa[0]) + (xb[1] - xa[1]) * (xb[1] - xa[1]))
    }
}

impl DomainMesh<NodalField> for FemMesh {
    fn hmax(&self) -> f64 {
        FemMesh::hmax(self)
    }

    fn facet_markers(&self) -> &BTreeMap<String, usize> {
        &self.facet_markers
    }

    fn facet_integral(&self, solution: &NodalField, marker: usize) -> Result<f64, StrError> {
        self.integrate_on_facets(solution.values(), marker)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
