//! Colour specifications and their resolution against the palette

use rand::Rng;

use super::error::{DiagramError, Result};
use super::palette::Palette;
use crate::render::Rgb;

/// Colour requested by a flow record (or the axis label)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ColorSpec {
    /// Random unused palette colour
    None,
    /// Palette slot
    Index(i64),
    /// Red and green, blue defaults to 0
    PartialRgb(i64, i64),
    FullRgb(i64, i64, i64),
}

impl ColorSpec {
    pub(crate) fn from_components(components: &[i64], line: usize) -> Result<Self> {
        match *components {
            [] => Ok(Self::None),
            [i] => Ok(Self::Index(i)),
            [r, g] => Ok(Self::PartialRgb(r, g)),
            [r, g, b] => Ok(Self::FullRgb(r, g, b)),
            _ => Err(DiagramError::TooManyColorComponents {
                line,
                count: components.len(),
            }),
        }
    }

    /// Whether resolving this spec reserves a palette entry
    pub(crate) fn needs_palette(&self) -> bool {
        matches!(self, Self::None | Self::Index(_))
    }
}

/// Parse comma-separated colour components as integers
pub(crate) fn parse_components(parts: &[&str], line: usize) -> Result<Vec<i64>> {
    parts
        .iter()
        .map(|part| {
            let trimmed = part.trim();
            trimmed
                .parse::<i64>()
                .map_err(|_| DiagramError::InvalidColorComponent {
                    line,
                    text: trimmed.to_string(),
                })
        })
        .collect()
}

/// Split an axis label of the form `Words, 96, 96, 96` into its text and colour.
/// A label without a comma has no colour override.
pub(crate) fn split_label_color(label: &str, line: usize) -> Result<(String, Option<ColorSpec>)> {
    let label = label.trim_end_matches(['\r', '\n']);
    let mut parts = label.split(',');
    let text = parts.next().unwrap_or_default().to_string();
    let rest: Vec<&str> = parts.collect();
    if rest.is_empty() {
        return Ok((text, None));
    }
    let components = parse_components(&rest, line)?;
    Ok((text, Some(ColorSpec::from_components(&components, line)?)))
}

/// A committed colour and its contrast colour
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ResolvedColor {
    pub(crate) rgb: Rgb,
    pub(crate) inverse: Rgb,
    /// An explicit index was already taken and a random colour was used instead
    pub(crate) fell_back: bool,
}

impl ResolvedColor {
    fn new(rgb: Rgb) -> Self {
        Self {
            rgb,
            inverse: rgb.inverse(),
            fell_back: false,
        }
    }
}

/// Turns colour specs into colours, reserving palette entries as it goes.
/// Owns the palette for the duration of one render.
pub(crate) struct ColorResolver<R> {
    palette: Palette,
    rng: R,
}

impl<R> ColorResolver<R> {
    pub(crate) fn new(palette: Palette, rng: R) -> Self {
        Self { palette, rng }
    }

    pub(crate) fn palette_len(&self) -> usize {
        self.palette.len()
    }

    /// Check an index or literal RGB without reserving anything
    pub(crate) fn validate(&self, spec: &ColorSpec, line: usize) -> Result<()> {
        match *spec {
            ColorSpec::None => {}
            ColorSpec::Index(index) => {
                self.slot(index, line)?;
            }
            ColorSpec::PartialRgb(r, g) => {
                self.component(r, line)?;
                self.component(g, line)?;
            }
            ColorSpec::FullRgb(r, g, b) => {
                self.component(r, line)?;
                self.component(g, line)?;
                self.component(b, line)?;
            }
        }
        Ok(())
    }

    fn slot(&self, index: i64, line: usize) -> Result<usize> {
        let max = self.palette.len().saturating_sub(1);
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.palette.len())
            .ok_or(DiagramError::InvalidColorIndex { line, index, max })
    }

    /// Literal RGB component. Values that would pass as a palette index are
    /// accepted too; either way the value is used as the channel itself.
    fn component(&self, value: i64, line: usize) -> Result<u8> {
        let max_index = self.palette.len() as i64 - 1;
        let in_range = value >= 0 && (value <= 255 || value <= max_index);
        in_range
            .then(|| u8::try_from(value).ok())
            .flatten()
            .ok_or(DiagramError::InvalidRgbComponent { line, value })
    }
}

impl<R: Rng> ColorResolver<R> {
    pub(crate) fn resolve(&mut self, spec: &ColorSpec, line: usize) -> Result<ResolvedColor> {
        match *spec {
            ColorSpec::None => self.random_unused(line),
            ColorSpec::Index(index) => {
                let slot = self.slot(index, line)?;
                match self.palette.take(slot) {
                    Some(rgb) => Ok(ResolvedColor::new(rgb)),
                    None => {
                        let mut color = self.random_unused(line)?;
                        color.fell_back = true;
                        Ok(color)
                    }
                }
            }
            ColorSpec::PartialRgb(r, g) => Ok(ResolvedColor::new(Rgb::new(
                self.component(r, line)?,
                self.component(g, line)?,
                0,
            ))),
            ColorSpec::FullRgb(r, g, b) => Ok(ResolvedColor::new(Rgb::new(
                self.component(r, line)?,
                self.component(g, line)?,
                self.component(b, line)?,
            ))),
        }
    }

    fn random_unused(&mut self, line: usize) -> Result<ResolvedColor> {
        self.palette
            .take_random(&mut self.rng)
            .map(|(_, rgb)| ResolvedColor::new(rgb))
            .ok_or(DiagramError::PaletteExhausted {
                line,
                size: self.palette.len(),
                needed: 1,
            })
    }
}
