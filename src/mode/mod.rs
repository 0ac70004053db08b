//! CLI mode implementations

mod layout;
mod render;

pub(crate) use layout::run_layout;
pub(crate) use render::run_render;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::diagram::{self, Diagram, DiagramConfig, DiagramError};
use crate::input::load_flows;
use crate::output::{print_diagram_warnings, print_error};

/// Read a flow file and plan its diagram. A fixed seed makes the palette
/// choices reproducible.
pub(crate) fn plan_file(
    filename: &str,
    config: &DiagramConfig,
    seed: Option<u64>,
) -> Result<Diagram, DiagramError> {
    let data = load_flows(filename)?;
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    diagram::plan(&data, config, rng)
}

/// Plan or exit with the error reported
fn plan_or_exit(filename: &str, config: &DiagramConfig, seed: Option<u64>) -> Diagram {
    let diagram = plan_file(filename, config, seed).unwrap_or_else(|e| {
        print_error(&e.to_string());
        std::process::exit(1);
    });
    print_diagram_warnings(&diagram);
    diagram
}
