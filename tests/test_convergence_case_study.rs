use floorsim::fem::SampleMeshes;
use floorsim::prelude::*;
use russell_lab::approx_eq;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

type Triple = (NodalField, LagrangeSpace, Arc<FemMesh>);

// unit square with the boundaries of the floor segment:
// Underfloor (bottom), Hot Inlet (right), Coverfloor (top), Cold Outlet (left)
fn floor_like(mut mesh: FemMesh) -> FemMesh {
    mesh.facet_markers = BTreeMap::from([
        ("Underfloor".to_string(), 1),
        ("Hot Inlet".to_string(), 2),
        ("Coverfloor".to_string(), 3),
        ("Cold Outlet".to_string(), 4),
    ]);
    mesh
}

fn load_and_check(mesh_path: &Path) -> Result<Triple, StrError> {
    let (solution, space, mesh) = SolutionFile::load(&FilePath::solution(mesh_path))?;
    CaseStudy::check_mesh(&mesh)?;
    Ok((solution, space, mesh))
}

fn write_solutions(mesh_dir: &str, meshes: Vec<(&str, FemMesh)>) -> Result<(), Error> {
    for (refinement, mesh) in meshes {
        // linear temperature from the underfloor (50) to the cover floor (22)
        let temperature = (0..mesh.npoint()).map(|p| 50.0 - 28.0 * mesh.coords(p)[1]).collect();
        let data = SolutionFile { mesh, temperature };
        let path = FilePath::solution(&FilePath::mesh(mesh_dir, refinement, GEOMETRY_WET));
        data.write_json(&path).map_err(|e| Error::Io(e.to_string()))?;
    }
    Ok(())
}

#[test]
fn test_convergence_case_study_config_file() -> Result<(), Error> {
    let root = format!("{}/case_study", DEFAULT_TEST_DIR);
    let mesh_dir = format!("{}/meshes", root);
    write_solutions(
        &mesh_dir,
        vec![
            ("coarse", floor_like(SampleMeshes::two_tri3())),
            ("coarse_medium", floor_like(SampleMeshes::four_tri3())),
        ],
    )?;

    // configuration file derived from the case study
    let mut config = CaseStudy::convergence_config(GEOMETRY_WET).map_err(|e| Error::Config(e.to_string()))?;
    config.refinements.truncate(2);
    config.measures = vec!["global".to_string(), "facet_integral".to_string()];
    config.mesh_dir = mesh_dir.clone();
    config.out_dir = Some(root.clone());
    let config_path = format!("{}/config.json", root);
    let json = serde_json::to_string_pretty(&config).map_err(|e| Error::Io(e.to_string()))?;
    fs::write(&config_path, json).map_err(|e| Error::Io(e.to_string()))?;
    let config = ConvergenceConfig::read_json(&config_path).map_err(|e| Error::Config(e.to_string()))?;
    assert_eq!(config.refinements, &["coarse", "coarse_medium"]);

    // run
    let mut test = ConvergenceTest::new(load_and_check, config)?;
    let results = test.run()?;

    // linear fields are represented exactly on both meshes
    approx_eq(results.differences[0][0], 0.0, 1e-13);
    approx_eq(results.differences[0][1], 0.0, 1e-13);
    assert_eq!(test.mesh_sizes()?, &[1.0]);

    let path = test.write_results()?;
    assert_eq!(
        path,
        Path::new(&root).join("convergence_test_FussbodenheizungSegmentNass.geo.json")
    );
    Ok(())
}

#[test]
fn test_convergence_case_study_rejects_unlabeled_mesh() -> Result<(), Error> {
    let mesh_dir = format!("{}/case_study_unlabeled/meshes", DEFAULT_TEST_DIR);
    write_solutions(
        &mesh_dir,
        vec![
            ("coarse", SampleMeshes::two_tri3()),
            ("medium", SampleMeshes::four_tri3()),
        ],
    )?;
    let mut config = ConvergenceConfig::new(GEOMETRY_WET);
    config
        .set_refinements(&["coarse", "medium"])
        .and_then(|c| c.set_measures(&["facet_integral"]))
        .and_then(|c| c.set_mesh_dir(&mesh_dir))
        .map_err(|e| Error::Config(e.to_string()))?;
    let mut test = ConvergenceTest::new(load_and_check, config)?;
    assert_eq!(
        test.run().err(),
        Some(Error::Upstream(
            "a boundary condition refers to a boundary missing in the mesh".to_string()
        ))
    );
    Ok(())
}

#[test]
fn test_convergence_case_study_requires_points() {
    let mut config = CaseStudy::convergence_config(GEOMETRY_DRY).unwrap();
    config.points = None;
    assert_eq!(
        ConvergenceTest::new(load_and_check, config).err(),
        Some(Error::MissingInput {
            measure: "local",
            input: "point coordinates"
        })
    );
}
