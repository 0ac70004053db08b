mod diagram;
mod input;
mod mode;
mod output;
mod render;

use std::path::{Path, PathBuf};

use clap::Parser;

use diagram::{ColorMode, DiagramConfig, LayoutConfig, PathStyle};
use output::print_error;
use render::OutputFormat;

#[derive(Parser)]
#[command(
    name = "sankey",
    version,
    about = "Sankey flow diagram renderer: one source split into proportional, gradient-shaded ribbons",
    after_help = "Input format:
  line 1   window title
  line 2   source label, optionally followed by a colour (Words, 96, 96, 96)
  line 3+  name, value[, colour]   colour = palette index, or R, G[, B]

Examples:
  sankey goals.txt                              Write goals.svg
  sankey goals.txt -o goals.png                 Rasterise to PNG
  sankey goals.txt --style straight             Straight ribbons
  sankey goals.txt --colors random --seed 7     Reproducible random colours
  sankey goals.txt --layout                     Print the computed layout"
)]
struct Args {
    /// Flow data file (".txt" is appended if the bare name does not exist)
    file: String,

    /// Output image (.svg or .png). Defaults to the input name with .svg
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long, default_value = "1000", value_name = "PX")]
    width: f64,

    /// Window height in pixels
    #[arg(long, default_value = "700", value_name = "PX")]
    height: f64,

    /// Minimum distance between the diagram and the window edges
    #[arg(long, default_value = "100", value_name = "PX")]
    border: f64,

    /// Gap between destination arrows
    #[arg(long, default_value = "25", value_name = "PX")]
    gap: f64,

    /// Ribbon shape
    #[arg(long, value_enum, default_value_t = PathStyle::Curve)]
    style: PathStyle,

    /// Colour assignment
    #[arg(long, value_enum, default_value_t = ColorMode::Custom)]
    colors: ColorMode,

    /// Seed for palette selection (random if omitted)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Print the computed layout instead of writing an image
    #[arg(long)]
    layout: bool,

    /// Suppress informational output
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

/// Largest window edge accepted, in pixels
const MAX_DIMENSION: f64 = 16384.0;

/// `data/goals.txt` -> `goals.svg`
fn default_output(file: &str) -> PathBuf {
    let stem = Path::new(file)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("sankey");
    PathBuf::from(format!("{}.svg", stem))
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    // Validate geometry
    for (name, value) in [("--width", args.width), ("--height", args.height)] {
        if !value.is_finite() || value <= 0.0 {
            print_error(&format!("{} must be positive", name));
            std::process::exit(1);
        }
        if value > MAX_DIMENSION {
            print_error(&format!("{} must be at most {} px", name, MAX_DIMENSION));
            std::process::exit(1);
        }
    }
    for (name, value) in [("--border", args.border), ("--gap", args.gap)] {
        if !value.is_finite() || value < 0.0 {
            print_error(&format!("{} cannot be negative", name));
            std::process::exit(1);
        }
    }

    // Validate option combinations
    if args.layout && args.output.is_some() {
        print_error("--output cannot be used with --layout");
        std::process::exit(1);
    }

    let config = DiagramConfig {
        layout: LayoutConfig {
            width: args.width,
            height: args.height,
            border: args.border,
            gap: args.gap,
        },
        style: args.style,
        colors: args.colors,
    };

    if args.layout {
        mode::run_layout(&args.file, &config, args.seed, args.quiet);
        return;
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.file));

    let Some(format) = OutputFormat::from_path(&output) else {
        print_error(&format!(
            "unsupported output format: {} (use .svg or .png)",
            output.display()
        ));
        std::process::exit(1);
    };

    // Validate image output path
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        print_error(&format!("Directory does not exist: {}", parent.display()));
        std::process::exit(1);
    }

    mode::run_render(&args.file, &config, args.seed, &output, format, args.quiet);
}
