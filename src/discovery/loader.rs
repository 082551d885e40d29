//! Map loader - parses discovered files into a registry builder.

use std::fs;
use std::path::Path;

use crate::error::{MapError, Result};
use crate::parser::{parse_map_source, CompileOptions, ParsedSource, SourceFormat};
use crate::registry::{MapFailure, RegistryBuilder};

use super::scanner::ScanResult;

/// Load every discovered map file into a RegistryBuilder.
///
/// Files that fail to read or hold invalid YAML/JSON are collected and
/// reported together. A malformed map entry inside a readable file is
/// recorded as a failure for that map only.
pub fn load_maps(scan: &ScanResult, options: CompileOptions) -> Result<RegistryBuilder> {
    let mut builder = RegistryBuilder::new().with_options(options);
    let mut errors: Vec<String> = Vec::new();

    for path in &scan.maps {
        match load_map_file(path) {
            Ok(parsed) => {
                tracing::debug!(
                    path = %path.display(),
                    maps = parsed.maps.len(),
                    rejected = parsed.rejected.len(),
                    "loaded map source"
                );
                builder.add_inputs(parsed.maps);
                for rejected in parsed.rejected {
                    builder.add_failure(MapFailure {
                        map_id: rejected.map_id,
                        error: rejected.error,
                    });
                }
            }
            Err(e) => errors.push(format!("{}: {}", path.display(), e)),
        }
    }

    if !errors.is_empty() {
        return Err(MapError::Build {
            message: format!(
                "Failed to load {} file(s):\n  {}",
                errors.len(),
                errors.join("\n  ")
            ),
            help: Some("Fix the errors above and try again".to_string()),
        });
    }

    Ok(builder)
}

/// Read and parse a single map source file.
pub fn load_map_file(path: &Path) -> Result<ParsedSource> {
    let content = fs::read_to_string(path).map_err(|e| MapError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    parse_map_source(&content, SourceFormat::from_path(path))
}
