use floorsim::prelude::*;
use std::path::Path;
use std::sync::Arc;
use structopt::StructOpt;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "floorsim_convergence",
    about = "Runs a mesh convergence test of the floor-heating segment"
)]
struct Options {
    /// JSON file with the convergence configuration (the case study is used if omitted)
    config: Option<String>,

    /// Geometry of the case study: wet or dry
    #[structopt(long, default_value = "wet")]
    geometry: String,

    /// Directory for the figures and results
    #[structopt(long)]
    out_dir: Option<String>,

    /// Skip the generation of figures
    #[structopt(long)]
    no_plots: bool,
}

// loads the temperature field exported next to the mesh file
fn load_solution(mesh_path: &Path) -> Result<(NodalField, LagrangeSpace, Arc<FemMesh>), StrError> {
    let (solution, space, mesh) = SolutionFile::load(&FilePath::solution(mesh_path))?;
    CaseStudy::check_mesh(&mesh)?;
    Ok((solution, space, mesh))
}

fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // parse options
    let options = Options::from_args();

    // configuration
    let mut config = match &options.config {
        Some(path) => ConvergenceConfig::read_json(path),
        None => match options.geometry.as_str() {
            "wet" => CaseStudy::convergence_config(GEOMETRY_WET),
            "dry" => CaseStudy::convergence_config(GEOMETRY_DRY),
            _ => Err("geometry must be wet or dry"),
        },
    }
    .map_err(|e| Error::Config(e.to_string()))?;
    if let Some(out_dir) = &options.out_dir {
        config.set_out_dir(out_dir).map_err(|e| Error::Config(e.to_string()))?;
    }

    // run
    let mut test = ConvergenceTest::new(load_solution, config)?;
    let results = test.run()?;
    let thin_line = format!("{:─^1$}", "", 16 * (results.ncol() + 1));
    println!("\n{}", thin_line);
    print!("{}", results);
    println!("{}\n", thin_line);

    // output
    let path = test.write_results()?;
    println!("results written to {}", path.display());
    if !options.no_plots {
        for path in test.save_plots()? {
            println!("figure saved to {}", path.display());
        }
    }
    Ok(())
}
