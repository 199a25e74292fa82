/// Defines the directory holding the meshes (one subdirectory per refinement)
pub const DEFAULT_MESH_DIR: &str = "meshes";

/// Defines the extension (file format) of the convergence figures
pub const DEFAULT_FIGURE_EXTENSION: &str = "svg";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/floorsim/test";

/// Defines the label of the x-axis of the convergence figures
pub const HMAX_LABEL: &str = "Maximum Cell Size (hmax)";

/// Defines the tolerance to decide whether a point lies inside a cell (barycentric coordinates)
pub const INSIDE_TOLERANCE: f64 = 1e-8;
