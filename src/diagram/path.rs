//! Row-by-row ribbon trajectories from the source block to an arrowhead

use std::f64::consts::PI;

use super::layout::BandGeometry;

/// Rows at the arrowhead end that get nudged to meet the triangle cleanly
const TERMINAL_ROWS: usize = 2;
const TERMINAL_LEFT_SHIFT: f64 = 1.0;
const TERMINAL_RIGHT_TRIM: f64 = 0.8;
/// Right-edge trim per terminal row for bands running straight down
const VERTICAL_RIGHT_TRIM: f64 = 0.4;

/// Shape of the ribbon between source and arrowhead
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum PathStyle {
    /// Half-cosine ease in and out
    #[default]
    Curve,
    /// Constant slope
    Straight,
}

/// Horizontal extent of the coloured segment in one pixel row
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct RowSpan {
    pub(crate) left: f64,
    pub(crate) right: f64,
}

/// Plan `rows` spans for a band, row 0 at the source side
pub(crate) fn plan_path(rows: usize, style: PathStyle, band: &BandGeometry) -> Vec<RowSpan> {
    if band.is_vertical() {
        let start = match style {
            PathStyle::Curve => band.source_x_left,
            PathStyle::Straight => band.source_x_left + 1.0,
        };
        return plan_vertical(rows, start, band.source_x_left + band.width);
    }
    match style {
        PathStyle::Curve => plan_curve(rows, band),
        PathStyle::Straight => plan_straight(rows, band),
    }
}

fn is_terminal(row: usize, rows: usize) -> bool {
    row + TERMINAL_ROWS >= rows
}

/// Half-cosine ease: 0 at p = 0, 1 at p = 1
fn ease(p: f64) -> f64 {
    ((p * PI - PI / 2.0).sin() + 1.0) / 2.0
}

fn plan_vertical(rows: usize, mut left: f64, mut right: f64) -> Vec<RowSpan> {
    (0..rows)
        .map(|row| {
            if is_terminal(row, rows) {
                left += TERMINAL_LEFT_SHIFT;
                right -= VERTICAL_RIGHT_TRIM;
            }
            RowSpan { left, right }
        })
        .collect()
}

fn plan_curve(rows: usize, band: &BandGeometry) -> Vec<RowSpan> {
    let travel = band.source_x_left - band.dest_x_left;
    (0..rows)
        .map(|row| {
            let p = row as f64 / rows as f64;
            let mut left = band.source_x_left - ease(p) * travel;
            let mut right = left + band.width;
            if is_terminal(row, rows) {
                left += TERMINAL_LEFT_SHIFT;
                if band.slope > 0.0 {
                    right -= TERMINAL_RIGHT_TRIM;
                }
            }
            RowSpan { left, right }
        })
        .collect()
}

fn plan_straight(rows: usize, band: &BandGeometry) -> Vec<RowSpan> {
    let step = 1.0 / band.slope;
    let mut left = band.source_x_left;
    let mut right = left + band.width;
    (0..rows)
        .map(|row| {
            if is_terminal(row, rows) {
                left += TERMINAL_LEFT_SHIFT;
                if band.slope > 0.0 {
                    right -= TERMINAL_RIGHT_TRIM;
                }
            } else {
                left += step;
                right = left + band.width;
            }
            RowSpan { left, right }
        })
        .collect()
}
