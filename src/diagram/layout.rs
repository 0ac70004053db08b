//! Proportional band widths and anchor positions

use super::error::{DiagramError, Result};
use super::flow::FlowRecord;

/// Height of the source block in pixels
pub(crate) const SOURCE_HEIGHT: f64 = 40.0;

/// Window geometry
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct LayoutConfig {
    pub(crate) width: f64,
    pub(crate) height: f64,
    /// Minimum distance between the diagram and the window edges
    pub(crate) border: f64,
    /// Horizontal gap between neighbouring destination arrows
    pub(crate) gap: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 700.0,
            border: 100.0,
            gap: 25.0,
        }
    }
}

/// Anchors of one band, in window pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct BandGeometry {
    pub(crate) source_x_left: f64,
    pub(crate) source_x_right: f64,
    pub(crate) dest_x_left: f64,
    pub(crate) dest_x_right: f64,
    pub(crate) dest_x_center: f64,
    /// Bottom of the source block, where ribbon row 0 is drawn
    pub(crate) top_y: f64,
    /// Top of the arrowhead
    pub(crate) bottom_y: f64,
    pub(crate) width: f64,
    /// dy/dx between source and arrowhead, 0 when the band runs straight down
    pub(crate) slope: f64,
}

impl BandGeometry {
    pub(crate) fn is_vertical(&self) -> bool {
        self.slope == 0.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Layout {
    pub(crate) source_width: f64,
    /// Left edge of the source block
    pub(crate) source_x: f64,
    pub(crate) source_y: f64,
    pub(crate) arrow_tip: f64,
    /// Number of pixel rows in every ribbon
    pub(crate) rows: usize,
    pub(crate) bands: Vec<BandGeometry>,
}

/// Lay out one band per flow, left to right in record order
pub(crate) fn layout(flows: &[FlowRecord], config: &LayoutConfig) -> Result<Layout> {
    let count = flows.len();
    if count == 0 {
        return Err(DiagramError::NoFlows);
    }

    let available = config.width - 2.0 * config.border - (count - 1) as f64 * config.gap;
    if available < 1.0 {
        return Err(DiagramError::InsufficientPixels {
            available,
            flows: count,
            suggested_gap: suggested_gap(config.width, config.border, count),
        });
    }

    let top_y = config.border + SOURCE_HEIGHT;
    let arrow_top = config.height - (config.border + config.border / 3.0);
    let arrow_tip = config.height - config.border;
    let span = (arrow_top - top_y).round_ties_even();
    if span < 0.0 {
        return Err(DiagramError::InsufficientHeight {
            height: config.height,
            border: config.border,
        });
    }

    let total: f64 = flows.iter().map(|f| f.value).sum();
    let pixels_per_unit = available / total;
    let source_width = total * pixels_per_unit;

    // Source anchors share the centreline of the destination span
    let source_start = (config.width - available) / 2.0;
    let mut offset = 0.0;
    let mut bands = Vec::with_capacity(count);

    for (i, flow) in flows.iter().enumerate() {
        let width = flow.value * pixels_per_unit;
        let dest_x_left = config.border + offset + config.gap * i as f64;
        let source_x_left = source_start + offset;
        let slope = if source_x_left != dest_x_left {
            (top_y - arrow_top) / (source_x_left - dest_x_left)
        } else {
            0.0
        };

        bands.push(BandGeometry {
            source_x_left,
            source_x_right: source_x_left + width,
            dest_x_left,
            dest_x_right: dest_x_left + width,
            dest_x_center: dest_x_left + width / 2.0,
            top_y,
            bottom_y: arrow_top,
            width,
            slope,
        });
        offset += width;
    }

    Ok(Layout {
        source_width,
        source_x: (config.width - source_width) / 2.0,
        source_y: config.border,
        arrow_tip,
        rows: span as usize + 1,
        bands,
    })
}

/// Gap that leaves exactly one available pixel for `count` flows.
/// `None` when the gap is not the problem (a single flow, or a border that
/// already eats the whole width).
pub(crate) fn suggested_gap(width: f64, border: f64, count: usize) -> Option<f64> {
    if count < 2 {
        return None;
    }
    Some((width - 2.0 * border - 1.0) / (count - 1) as f64).filter(|gap| *gap >= 0.0)
}
