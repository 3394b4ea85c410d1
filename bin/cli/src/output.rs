use std::collections::HashMap;
use std::fmt::Display;

use anyhow::Result;
use lazy_static::lazy_static;
use serde::Serialize;
use thiserror::Error;

lazy_static! {
    static ref OUTPUT_TYPES: HashMap<&'static str, Output> = {
        let mut map = HashMap::new();
        map.insert("json", Output::Json);
        map.insert("text", Output::Text);
        map
    };
}

#[remain::sorted]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub enum Output {
    /// Pretty printed JSON, one document per invocation.
    Json,

    /// One line per version.
    #[default]
    Text,
}

#[derive(Error, Debug)]
#[error("Unsupported output: \"{value}\". Supported values: {supported:?}")]
pub struct OutputError {
    value: String,
    supported: Vec<&'static str>,
}

pub(crate) fn parse_output(src: &str) -> Result<Output, OutputError> {
    match OUTPUT_TYPES.get(src) {
        Some(output) => Ok(*output),
        None => {
            let mut supported: Vec<&'static str> = OUTPUT_TYPES.keys().copied().collect();
            supported.sort_unstable();
            Err(OutputError {
                value: src.to_string(),
                supported,
            })
        }
    }
}

pub(crate) fn render_output<A: Display + Serialize>(output: Output, value: &A) -> Result<String> {
    match output {
        Output::Json => Ok(serde_json::to_string_pretty(value)?),
        Output::Text => Ok(value.to_string()),
    }
}
