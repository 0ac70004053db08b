//! Plans a whole diagram and emits it as drawing commands

use rand::Rng;

use super::color::{ColorResolver, ColorSpec, ResolvedColor, split_label_color};
use super::error::{DiagramError, Result};
use super::flow::{FlowData, FlowRecord};
use super::gradient::build_gradient;
use super::layout::{BandGeometry, LayoutConfig, SOURCE_HEIGHT, layout};
use super::palette::Palette;
use super::path::{PathStyle, RowSpan, plan_path};
use crate::render::{DrawCommand, RenderSink, Rgb};

/// The axis label sits on line 2 of the input
const AXIS_LABEL_LINE: usize = 2;

/// How band colours are chosen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum ColorMode {
    /// Honour colour specs on flows and on the axis label
    #[default]
    Custom,
    /// Ignore colour specs, every band gets a random palette colour
    Random,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct DiagramConfig {
    pub(crate) layout: LayoutConfig,
    pub(crate) style: PathStyle,
    pub(crate) colors: ColorMode,
}

/// A band ready to draw
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PlannedBand {
    pub(crate) name: String,
    pub(crate) value: f64,
    pub(crate) line: usize,
    pub(crate) geometry: BandGeometry,
    pub(crate) color: ResolvedColor,
    pub(crate) gradient: Vec<Rgb>,
    pub(crate) path: Vec<RowSpan>,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SourceBlock {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) label: String,
    pub(crate) label_color: Rgb,
}

/// Fully resolved diagram. Emitting it cannot fail.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Diagram {
    pub(crate) title: String,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) style: PathStyle,
    pub(crate) source: SourceBlock,
    pub(crate) arrow_tip: f64,
    pub(crate) bands: Vec<PlannedBand>,
}

/// Resolve layout, colours, gradients and paths for every flow.
/// Nothing is drawn here, so a failure leaves no partial diagram behind.
pub(crate) fn plan<R: Rng>(data: &FlowData, config: &DiagramConfig, rng: R) -> Result<Diagram> {
    let geometry = layout(&data.flows, &config.layout)?;

    let mut resolver = ColorResolver::new(Palette::default(), rng);

    let (label, label_spec) = match config.colors {
        ColorMode::Custom => split_label_color(&data.axis_label, AXIS_LABEL_LINE)?,
        ColorMode::Random => (data.axis_label.trim_end().to_string(), None),
    };
    check_palette(&data.flows, label_spec.as_ref(), config.colors, &resolver)?;

    let mut bands = Vec::with_capacity(data.flows.len());
    for (flow, band) in data.flows.iter().zip(&geometry.bands) {
        let color = resolver.resolve(&flow_spec(flow, config.colors), flow.line)?;
        bands.push(PlannedBand {
            name: flow.name.clone(),
            value: flow.value,
            line: flow.line,
            geometry: *band,
            color,
            gradient: build_gradient(color.rgb, geometry.rows),
            path: plan_path(geometry.rows, config.style, band),
        });
    }

    // Resolved last so flows get first claim on explicit palette indices
    let label_color = match label_spec {
        Some(spec) => resolver.resolve(&spec, AXIS_LABEL_LINE)?.rgb,
        None => Rgb::WHITE,
    };

    Ok(Diagram {
        title: data.title.trim_end().to_string(),
        width: config.layout.width,
        height: config.layout.height,
        style: config.style,
        source: SourceBlock {
            x: geometry.source_x,
            y: geometry.source_y,
            width: geometry.source_width,
            height: SOURCE_HEIGHT,
            label,
            label_color,
        },
        arrow_tip: geometry.arrow_tip,
        bands,
    })
}

fn flow_spec(flow: &FlowRecord, mode: ColorMode) -> ColorSpec {
    match mode {
        ColorMode::Custom => flow.color,
        ColorMode::Random => ColorSpec::None,
    }
}

/// Walk the colour specs in resolution order before any colour is assigned.
/// The first invalid spec wins unless the palette already ran out earlier;
/// running out reports the whole shortfall.
fn check_palette<R>(
    flows: &[FlowRecord],
    label: Option<&ColorSpec>,
    mode: ColorMode,
    resolver: &ColorResolver<R>,
) -> Result<()> {
    let size = resolver.palette_len();
    let specs = flows
        .iter()
        .map(|f| (flow_spec(f, mode), f.line))
        .chain(label.map(|spec| (*spec, AXIS_LABEL_LINE)));

    let mut used = 0;
    let mut overflow_line = None;
    for (spec, line) in specs {
        if let Err(e) = resolver.validate(&spec, line) {
            if overflow_line.is_none() {
                return Err(e);
            }
            continue;
        }
        if spec.needs_palette() {
            used += 1;
            if used > size && overflow_line.is_none() {
                overflow_line = Some(line);
            }
        }
    }

    match overflow_line {
        Some(line) => Err(DiagramError::PaletteExhausted {
            line,
            size,
            needed: used - size,
        }),
        None => Ok(()),
    }
}

impl Diagram {
    /// Emit every drawing command in paint order
    pub(crate) fn emit<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        sink.draw(&DrawCommand::FillRect {
            x: self.source.x,
            y: self.source.y,
            width: self.source.width,
            height: self.source.height,
            fill: Rgb::BLACK,
            outline: Rgb::BLACK,
        });

        for band in &self.bands {
            self.emit_band(band, sink);
        }

        sink.draw(&DrawCommand::DrawText {
            x: self.source.x + self.source.width / 2.0,
            y: self.source.y + self.source.height / 2.0,
            text: self.source.label.clone(),
            color: self.source.label_color,
        });
    }

    fn emit_band<S: RenderSink + ?Sized>(&self, band: &PlannedBand, sink: &mut S) {
        let g = &band.geometry;
        sink.draw(&DrawCommand::FillPolygon {
            points: vec![
                (g.dest_x_left, g.bottom_y),
                (g.dest_x_right, g.bottom_y),
                (g.dest_x_center, self.arrow_tip),
            ],
            fill: band.color.rgb,
            outline: Rgb::BLACK,
        });

        for (row, (span, color)) in band.path.iter().zip(&band.gradient).enumerate() {
            let y = g.top_y + row as f64;
            // Black outline one pixel wider on each side, colour on top
            sink.draw(&DrawCommand::DrawLine {
                x1: span.left - 1.0,
                y1: y,
                x2: span.right + 1.0,
                y2: y,
                color: Rgb::BLACK,
            });
            sink.draw(&DrawCommand::DrawLine {
                x1: span.left,
                y1: y,
                x2: span.right,
                y2: y,
                color: *color,
            });
        }

        sink.draw(&DrawCommand::DrawText {
            x: g.dest_x_center,
            y: g.bottom_y,
            text: band.name.clone(),
            color: band.color.inverse,
        });
    }
}
