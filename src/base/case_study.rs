use super::{ncc_boundaries, neumann_boundaries, subdomain_material, ConvergenceConfig};
use crate::fem::FemMesh;
use crate::StrError;

/// Defines the geometry of the floor-heating segment with wet screed
pub const GEOMETRY_WET: &str = "FussbodenheizungSegmentNass.geo";

/// Defines the geometry of the floor-heating segment with dry construction
pub const GEOMETRY_DRY: &str = "FussbodenheizungSegmentTrocken.geo";

/// Defines the output directory of the case study
pub const CASE_STUDY_OUT_DIR: &str = "convergence_tests";

/// Defines the convergence measures computed in the case study
pub const CASE_STUDY_MEASURES: [&str; 3] = ["global", "facet_integral", "local"];

/// Holds the data of the floor-heating case study
pub struct CaseStudy {}

impl CaseStudy {
    /// Returns the refinement levels, from the coarsest to the finest
    pub fn mesh_refinements() -> Vec<&'static str> {
        vec![
            "coarse",
            "coarse_medium",
            "medium",
            "medium_fine",
            "fine",
            "fine-1",
            "fine-2",
            "fine-3",
            "fine-4",
            "fine-5",
            "fine-6",
            "fine-7",
        ]
    }

    /// Returns the coordinates (mm) of the points used by the local measure
    ///
    /// The points are the corners of the segment, points next to the pipes, and points along
    /// the left and right sides.
    #[rustfmt::skip]
    pub fn point_coordinates() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 0.0],
            vec![300.0, 0.0],
            vec![0.0, 87.0],
            vec![300.0, 87.0],
            vec![79.5, 39.5],
            vec![81.0, 39.5],
            vec![229.5, 39.5],
            vec![231.0, 39.5],
            vec![300.0, 62.0],
            vec![300.0, 32.0],
            vec![300.0, 30.0],
            vec![0.0, 62.0],
            vec![0.0, 32.0],
            vec![0.0, 30.0],
        ]
    }

    /// Returns the configuration of the convergence test of a geometry
    pub fn convergence_config(geo_name: &str) -> Result<ConvergenceConfig, StrError> {
        let points = CaseStudy::point_coordinates();
        let points: Vec<_> = points.iter().map(|x| x.as_slice()).collect();
        let mut config = ConvergenceConfig::new(geo_name);
        config
            .set_refinements(&CaseStudy::mesh_refinements())?
            .set_measures(&CASE_STUDY_MEASURES)?
            .set_out_dir(CASE_STUDY_OUT_DIR)?
            .set_points(&points)?;
        Ok(config)
    }

    /// Checks that a mesh can be used with the material and boundary tables
    ///
    /// Every subdomain must have a material, every cell must belong to a named subdomain,
    /// and every boundary with a prescribed condition must exist in the mesh.
    pub fn check_mesh(mesh: &FemMesh) -> Result<(), StrError> {
        for name in mesh.cell_markers.keys() {
            subdomain_material(name)?;
        }
        for cell in &mesh.mesh.cells {
            if !mesh.cell_markers.values().any(|m| *m == cell.attribute) {
                return Err("a cell attribute does not correspond to any named subdomain");
            }
        }
        let ncc = ncc_boundaries();
        let neumann = neumann_boundaries();
        let names = ncc.iter().map(|(name, _)| *name).chain(neumann.iter().map(|(name, _)| *name));
        for name in names {
            if !mesh.facet_markers.contains_key(name) {
                return Err("a boundary condition refers to a boundary missing in the mesh");
            }
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{CaseStudy, GEOMETRY_WET};
    use crate::fem::{FemMesh, SampleMeshes};
    use crate::StrError;
    use std::collections::BTreeMap;

    fn floor_like_mesh() -> FemMesh {
        let mut mesh = SampleMeshes::two_tri3();
        mesh.facet_markers = BTreeMap::from([
            ("Underfloor".to_string(), 1),
            ("Hot Inlet".to_string(), 2),
            ("Coverfloor".to_string(), 3),
            ("Cold Outlet".to_string(), 4),
        ]);
        mesh
    }

    #[test]
    fn tables_are_correct() {
        let refinements = CaseStudy::mesh_refinements();
        assert_eq!(refinements.len(), 12);
        assert_eq!(refinements[0], "coarse");
        assert_eq!(refinements[11], "fine-7");
        let points = CaseStudy::point_coordinates();
        assert_eq!(points.len(), 14);
        assert_eq!(points[3], &[300.0, 87.0]);
        assert_eq!(points[13], &[0.0, 30.0]);
    }

    #[test]
    fn convergence_config_works() -> Result<(), StrError> {
        let config = CaseStudy::convergence_config(GEOMETRY_WET)?;
        assert_eq!(config.geo_name, "FussbodenheizungSegmentNass.geo");
        assert_eq!(config.measures, &["global", "facet_integral", "local"]);
        assert_eq!(config.refinements.len(), 12);
        assert_eq!(config.out_dir, Some("convergence_tests".to_string()));
        assert_eq!(config.points.as_ref().map(|p| p.len()), Some(14));
        Ok(())
    }

    #[test]
    fn check_mesh_works() {
        let mesh = floor_like_mesh();
        assert_eq!(CaseStudy::check_mesh(&mesh), Ok(()));
    }

    #[test]
    fn check_mesh_captures_errors() {
        let mut mesh = floor_like_mesh();
        mesh.cell_markers = BTreeMap::from([("Basement".to_string(), 1)]);
        assert_eq!(
            CaseStudy::check_mesh(&mesh).err(),
            Some("the subdomain has no material assigned")
        );

        let mut mesh = floor_like_mesh();
        mesh.mesh.cells[1].attribute = 2;
        assert_eq!(
            CaseStudy::check_mesh(&mesh).err(),
            Some("a cell attribute does not correspond to any named subdomain")
        );

        let mesh = SampleMeshes::two_tri3();
        assert_eq!(
            CaseStudy::check_mesh(&mesh).err(),
            Some("a boundary condition refers to a boundary missing in the mesh")
        );
    }
}
