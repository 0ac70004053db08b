//! Layout inspection mode (prints the computed bands instead of drawing)

use crate::diagram::DiagramConfig;
use crate::output::{print_band_table, print_diagram_info};
use crate::render::DrawCommand;

use super::plan_or_exit;

/// Print the planned layout for `filename`
pub(crate) fn run_layout(filename: &str, config: &DiagramConfig, seed: Option<u64>, quiet: bool) {
    let diagram = plan_or_exit(filename, config, seed);

    if !quiet {
        print_diagram_info(filename, &diagram);
    }

    print_band_table(&diagram);

    if !quiet {
        let mut commands: Vec<DrawCommand> = Vec::new();
        diagram.emit(&mut commands);
        println!();
        println!("Drawing commands: {}", commands.len());
    }
}
