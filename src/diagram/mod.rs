//! Sankey diagram core: palette, colour resolution, gradients, layout and ribbon paths

mod color;
mod compose;
mod error;
mod flow;
mod gradient;
mod layout;
mod palette;
mod path;

pub(crate) use color::{ColorSpec, parse_components};
pub(crate) use compose::{ColorMode, Diagram, DiagramConfig, plan};
pub(crate) use error::{DiagramError, Result};
pub(crate) use flow::{FlowData, FlowRecord};
pub(crate) use layout::LayoutConfig;
pub(crate) use path::PathStyle;
