//! Output formatting for the command-line tool

use crate::gcp::ResourceId;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Render a parsed identifier.
///
/// Text output is one tab-separated line: relative name, collection, key.
pub fn render_id(id: &ResourceId, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let key = id
                .key()
                .map(|k| k.to_string())
                .unwrap_or_else(|| "-".to_string());
            Ok(format!("{}\t{}\t{}", id, id.resource(), key))
        }
        _ => render_serialized(id, format),
    }
}

/// Render an arbitrary JSON document
pub fn render_value(value: &Value, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            serde_json::to_string(value).context("Failed to serialize JSON output")
        }
        _ => render_serialized(value, format),
    }
}

fn render_serialized<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(value).context("Failed to serialize YAML output")?;
            Ok(yaml.trim_end().to_string())
        }
        _ => serde_json::to_string_pretty(value).context("Failed to serialize JSON output"),
    }
}
