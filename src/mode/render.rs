//! Image output mode

use std::path::Path;

use crate::diagram::DiagramConfig;
use crate::output::print_error;
use crate::render::{OutputFormat, SvgCanvas, save_image};

use super::plan_or_exit;

/// Render the diagram for `filename` and save it as SVG or PNG
pub(crate) fn run_render(
    filename: &str,
    config: &DiagramConfig,
    seed: Option<u64>,
    output: &Path,
    format: OutputFormat,
    quiet: bool,
) {
    let diagram = plan_or_exit(filename, config, seed);

    let mut canvas = SvgCanvas::new(diagram.width, diagram.height, &diagram.title);
    diagram.emit(&mut canvas);

    if let Err(e) = save_image(canvas, format, output) {
        print_error(&e.to_string());
        std::process::exit(1);
    }

    if !quiet {
        eprintln!(
            "Diagram saved to: {} ({} flows)",
            output.display(),
            diagram.bands.len()
        );
    }
}
