//! Errors raised while reading flows and planning a diagram

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub(crate) enum DiagramError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {what} is missing")]
    MissingField { line: usize, what: &'static str },
    #[error("line {line}: value provided is not a positive number ({text})")]
    InvalidNumericValue { line: usize, text: String },
    #[error("line {line}: colour components must be integers, got {text:?}")]
    InvalidColorComponent { line: usize, text: String },
    #[error("line {line}: colour index {index} is outside the palette (0-{max})")]
    InvalidColorIndex { line: usize, index: i64, max: usize },
    #[error("line {line}: RGB component {value} is outside the range 0-255")]
    InvalidRgbComponent { line: usize, value: i64 },
    #[error("line {line}: at most 3 colour components are allowed, got {count}")]
    TooManyColorComponents { line: usize, count: usize },
    #[error(
        "line {line}: not enough colours in the palette ({size} entries); {needed} more needed"
    )]
    PaletteExhausted {
        line: usize,
        size: usize,
        needed: usize,
    },
    #[error("{available} pixels available for {flows} flows; {}", gap_hint(.suggested_gap))]
    InsufficientPixels {
        available: f64,
        flows: usize,
        suggested_gap: Option<f64>,
    },
    #[error("window height {height} leaves no room for the ribbons (border {border})")]
    InsufficientHeight { height: f64, border: f64 },
    #[error("no flows found after the title and label lines")]
    NoFlows,
}

fn gap_hint(suggested_gap: &Option<f64>) -> String {
    match suggested_gap {
        Some(gap) => format!("the gap is too large for this many flows, try a gap of {gap}"),
        None => "the border is too large for the window width".to_string(),
    }
}

pub(crate) type Result<T> = std::result::Result<T, DiagramError>;
