//! SVG document sink

use super::{DrawCommand, RenderSink, Rgb};

const BACKGROUND: Rgb = Rgb::WHITE;
const FONT_FAMILY: &str = "Arial, Helvetica, sans-serif";
const FONT_SIZE: u32 = 14;

/// Accumulates drawing commands as SVG elements
pub(crate) struct SvgCanvas {
    body: String,
}

impl SvgCanvas {
    pub(crate) fn new(width: f64, height: f64, title: &str) -> Self {
        let mut body = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"0 0 {w} {h}\" shape-rendering=\"crispEdges\">\n",
            w = fmt_num(width),
            h = fmt_num(height),
        );
        body.push_str(&format!("<title>{}</title>\n", escape_xml(title)));
        body.push_str(&format!(
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
            fmt_num(width),
            fmt_num(height),
            BACKGROUND
        ));
        Self { body }
    }

    /// Close the document and return the SVG text
    pub(crate) fn finish(mut self) -> String {
        self.body.push_str("</svg>\n");
        self.body
    }
}

impl RenderSink for SvgCanvas {
    fn draw(&mut self, command: &DrawCommand) {
        let element = match command {
            DrawCommand::FillRect {
                x,
                y,
                width,
                height,
                fill,
                outline,
            } => format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{fill}\" stroke=\"{outline}\"/>",
                fmt_num(*x),
                fmt_num(*y),
                fmt_num(*width),
                fmt_num(*height),
            ),
            DrawCommand::FillPolygon {
                points,
                fill,
                outline,
            } => {
                let points = points
                    .iter()
                    .map(|(x, y)| format!("{},{}", fmt_num(*x), fmt_num(*y)))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("<polygon points=\"{points}\" fill=\"{fill}\" stroke=\"{outline}\"/>")
            }
            DrawCommand::DrawLine {
                x1,
                y1,
                x2,
                y2,
                color,
            } => format!(
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{color}\" stroke-width=\"1\"/>",
                fmt_num(*x1),
                fmt_num(*y1),
                fmt_num(*x2),
                fmt_num(*y2),
            ),
            DrawCommand::DrawText { x, y, text, color } => format!(
                "<text x=\"{}\" y=\"{}\" fill=\"{color}\" font-family=\"{FONT_FAMILY}\" \
                 font-size=\"{FONT_SIZE}\" text-anchor=\"middle\" dominant-baseline=\"central\">{}</text>",
                fmt_num(*x),
                fmt_num(*y),
                escape_xml(text),
            ),
        };
        self.body.push_str(&element);
        self.body.push('\n');
    }
}

/// Format a coordinate with at most 2 decimals, trailing zeros dropped
fn fmt_num(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
