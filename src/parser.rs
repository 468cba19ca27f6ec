//! JSON input and output for the command line driver

use anyhow::{bail, Context, Result};
use boxsieve_nms::{BBox, BBoxCollection, SuppressionConfig};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Boxes to filter plus an optional per-document threshold.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Request {
    pub boxes: BBoxCollection,
    #[serde(default)]
    pub threshold: Option<f64>,
}

/// Read a request from `path`, or from stdin when `path` is `-`.
pub fn load_request(path: &Path) -> Result<Request> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read boxes from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to open boxes file: {:?}", path))?
    };

    parse_request(&text).with_context(|| format!("Invalid boxes document: {:?}", path))
}

/// Accepts either a bare array of boxes or `{"boxes": [...], "threshold": t}`.
pub fn parse_request(text: &str) -> Result<Request> {
    let value: Value = serde_json::from_str(text).context("Malformed JSON")?;

    match value {
        Value::Array(_) => Ok(Request {
            boxes: serde_json::from_value(value)?,
            threshold: None,
        }),
        Value::Object(_) => Ok(serde_json::from_value(value)?),
        other => bail!("expected an array of boxes or an object, found {}", kind(&other)),
    }
}

pub fn load_config(path: &Path) -> Result<SuppressionConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to open config file: {:?}", path))?;

    serde_json::from_str(&text).with_context(|| format!("Invalid config file: {:?}", path))
}

/// Write kept boxes as a JSON array to `output`, or stdout when absent.
pub fn write_boxes(boxes: &[BBox], output: Option<&Path>, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(boxes)
    } else {
        serde_json::to_string(boxes)
    }
    .context("Failed to serialize boxes")?;

    match output {
        Some(path) => fs::write(path, json + "\n")
            .with_context(|| format!("Failed to write boxes to: {:?}", path))?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}").context("Failed to write boxes to stdout")?;
        }
    }

    Ok(())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
