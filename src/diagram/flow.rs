//! Flow records as handed over by the input parser

use super::color::ColorSpec;

/// One destination flow: name, magnitude and requested colour
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FlowRecord {
    pub(crate) name: String,
    pub(crate) value: f64,
    pub(crate) color: ColorSpec,
    /// 1-based line in the input file
    pub(crate) line: usize,
}

/// Everything needed to draw one diagram
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FlowData {
    pub(crate) title: String,
    pub(crate) axis_label: String,
    pub(crate) flows: Vec<FlowRecord>,
}
