//! Flow data file reader
//!
//! Line 1 is the window title, line 2 the source block label, and every
//! following line one flow: `name, value[, c1[, c2[, c3]]]`.

use std::path::{Path, PathBuf};

use crate::diagram::{
    ColorSpec, DiagramError, FlowData, FlowRecord, Result, parse_components,
};

/// First physical line holding flow data
const FIRST_FLOW_LINE: usize = 3;

pub(crate) fn load_flows(filename: &str) -> Result<FlowData> {
    let path = resolve_path(filename);
    let text = std::fs::read_to_string(&path).map_err(|source| DiagramError::Io {
        path: path.clone(),
        source,
    })?;
    parse_flows(&text)
}

/// `data` falls back to `data.txt` when only the latter exists
fn resolve_path(filename: &str) -> PathBuf {
    let path = Path::new(filename);
    if !path.exists() && path.extension().is_none() {
        path.with_extension("txt")
    } else {
        path.to_path_buf()
    }
}

pub(crate) fn parse_flows(text: &str) -> Result<FlowData> {
    let mut lines = text.lines();
    let title = lines.next().ok_or(DiagramError::MissingField {
        line: 1,
        what: "title",
    })?;
    let axis_label = lines.next().ok_or(DiagramError::MissingField {
        line: 2,
        what: "axis label",
    })?;

    let mut flows = Vec::new();
    for (i, raw) in lines.enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        flows.push(parse_flow_line(raw, FIRST_FLOW_LINE + i)?);
    }
    if flows.is_empty() {
        return Err(DiagramError::NoFlows);
    }

    Ok(FlowData {
        title: title.trim_end().to_string(),
        axis_label: axis_label.trim_end_matches('\r').to_string(),
        flows,
    })
}

fn parse_flow_line(raw: &str, line: usize) -> Result<FlowRecord> {
    let parts: Vec<&str> = raw.trim_end_matches('\r').split(',').collect();

    let name = parts[0];
    if name.trim().is_empty() {
        return Err(DiagramError::MissingField { line, what: "name" });
    }

    let value_text: String = parts
        .get(1)
        .map(|v| v.chars().filter(|c| !c.is_whitespace()).collect())
        .unwrap_or_default();
    if value_text.is_empty() {
        return Err(DiagramError::MissingField {
            line,
            what: "value",
        });
    }
    let value = value_text
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or(DiagramError::InvalidNumericValue {
            line,
            text: value_text.clone(),
        })?;

    let components = parse_components(parts.get(2..).unwrap_or_default(), line)?;

    Ok(FlowRecord {
        name: name.to_string(),
        value,
        color: ColorSpec::from_components(&components, line)?,
        line,
    })
}
