//! Map source documents.
//!
//! A map file is YAML or JSON and holds either a single map object, a list
//! of maps, or an object with a `maps` list.

use std::path::Path;

use serde_json::Value;

use crate::error::{MapError, Result};

use super::types::MapInput;

/// Source syntax of a map file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Yaml,
    Json,
}

impl SourceFormat {
    /// Pick the format from a file name (`.json` is JSON, anything else YAML).
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SourceFormat::Json,
            _ => SourceFormat::Yaml,
        }
    }
}

/// A map entry whose fields did not match the map schema.
#[derive(Debug)]
pub struct RejectedMap {
    pub map_id: String,
    pub error: MapError,
}

/// Maps read from one source, plus the entries that could not be read.
#[derive(Debug, Default)]
pub struct ParsedSource {
    pub maps: Vec<MapInput>,
    pub rejected: Vec<RejectedMap>,
}

/// Parse every map in a source string.
///
/// Only a syntax error fails the whole source. Each map entry is decoded on
/// its own, so a schema error rejects that entry and the rest still parse.
pub fn parse_map_source(source: &str, format: SourceFormat) -> Result<ParsedSource> {
    let mut parsed = ParsedSource::default();
    if source.trim().is_empty() {
        return Ok(parsed);
    }

    let value: Value = match format {
        SourceFormat::Json => serde_json::from_str(source).map_err(|e| MapError::Parse {
            message: format!("Invalid JSON: {}", e),
            help: None,
        })?,
        SourceFormat::Yaml => serde_yaml::from_str(source).map_err(|e| MapError::Parse {
            message: format!("Invalid YAML: {}", e),
            help: None,
        })?,
    };

    let entries = match value {
        Value::Array(items) => items,
        Value::Object(mut object) if object.contains_key("maps") && !object.contains_key("id") => {
            match object.remove("maps") {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(MapError::Parse {
                        message: "`maps` must be a list".to_string(),
                        help: None,
                    })
                }
            }
        }
        Value::Null => Vec::new(),
        single => vec![single],
    };

    for (index, entry) in entries.into_iter().enumerate() {
        let map_id = raw_map_id(&entry).unwrap_or_else(|| format!("map #{}", index + 1));
        match serde_json::from_value::<MapInput>(entry) {
            Ok(input) => parsed.maps.push(input),
            Err(e) => {
                tracing::debug!(map = %map_id, error = %e, "rejected map entry");
                parsed.rejected.push(RejectedMap {
                    error: MapError::structural(&map_id, format!("invalid map definition: {}", e))
                        .with_help("Each map needs an `id`, and grid rows must be strings"),
                    map_id,
                });
            }
        }
    }

    Ok(parsed)
}

/// The `id` of an undecoded entry, if it has a usable one.
fn raw_map_id(entry: &Value) -> Option<String> {
    let id = match entry.get("id")? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!id.is_empty()).then_some(id)
}
