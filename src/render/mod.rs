//! Drawing commands and the sinks that consume them

mod raster;
mod svg;

use std::fmt;
use std::path::{Path, PathBuf};

pub(crate) use svg::SvgCanvas;

/// 8-bit RGB colour
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Rgb {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Rgb {
    pub(crate) const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub(crate) const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub(crate) const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Per-channel 255 complement, used for label contrast
    pub(crate) fn inverse(self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b)
    }

    pub(crate) fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS: rgb(r,g,b)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// A single drawing primitive. Later commands paint over earlier ones.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum DrawCommand {
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Rgb,
        outline: Rgb,
    },
    FillPolygon {
        points: Vec<(f64, f64)>,
        fill: Rgb,
        outline: Rgb,
    },
    DrawLine {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Rgb,
    },
    /// Text anchored at its centre
    DrawText {
        x: f64,
        y: f64,
        text: String,
        color: Rgb,
    },
}

/// Consumer of drawing commands, applied in emission order
pub(crate) trait RenderSink {
    fn draw(&mut self, command: &DrawCommand);
}

/// Recording sink
impl RenderSink for Vec<DrawCommand> {
    fn draw(&mut self, command: &DrawCommand) {
        self.push(command.clone());
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum RenderError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse SVG for PNG rendering: {0}")]
    Svg(String),
    #[error("failed to allocate a {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },
    #[error("failed to encode PNG: {0}")]
    Png(String),
}

/// Image formats the renderer can write
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    /// Pick the format from the file extension (case-insensitive)
    pub(crate) fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "svg" => Some(Self::Svg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }
}

/// Write a finished canvas to `path` in the given format
pub(crate) fn save_image(
    canvas: SvgCanvas,
    format: OutputFormat,
    path: &Path,
) -> Result<(), RenderError> {
    let svg = canvas.finish();
    let bytes = match format {
        OutputFormat::Svg => svg.into_bytes(),
        OutputFormat::Png => raster::render_png(&svg)?,
    };
    std::fs::write(path, bytes).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })
}
