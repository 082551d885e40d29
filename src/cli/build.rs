//! Build command implementation.
//!
//! Compiles every discovered map and writes one `<id>.json` per map.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{MapError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::WorldMap;
use crate::validation::{print_diagnostics, validate_registry};

use super::{compile_sources, print_compile_report};

/// Compile map sources to JSON
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Map files or directories (default: current project)
    pub files: Vec<PathBuf>,

    /// Output directory (default: manifest `output`, else dist)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Reject non-numeric and duplicate layer ids
    #[arg(long)]
    pub strict: bool,

    /// Write single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Run cross-map checks before writing
    #[arg(long)]
    pub validate: bool,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let compiled = compile_sources(&args.files, args.strict, printer)?;
    print_compile_report(&compiled, printer);

    let registry = &compiled.build.registry;

    if args.validate {
        let result = validate_registry(registry);
        if !result.is_empty() {
            print_diagnostics(&result);
        }
        if result.has_errors() {
            return Err(MapError::Validation {
                message: plural(result.error_count(), "error", "errors"),
                help: Some("Run `worldmap validate` for details".to_string()),
            });
        }
    }

    let output = args
        .output
        .or(compiled.manifest_output)
        .unwrap_or_else(|| PathBuf::from("dist"));
    let pretty = compiled.pretty && !args.compact;

    if !registry.is_empty() {
        fs::create_dir_all(&output).map_err(|e| MapError::Io {
            path: output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    for map in registry.maps() {
        let path = write_map(map, &output, pretty)?;
        printer.status(
            "Compiled",
            &format!(
                "{} ({}x{}, {}) -> {}",
                map.id,
                map.width(),
                map.height(),
                plural(map.layers().len(), "layer", "layers"),
                printer.cyan(&display_path(&path))
            ),
        );
    }

    let failed = compiled.build.failures.len();
    if failed > 0 {
        return Err(MapError::Build {
            message: format!("{} failed to compile", plural(failed, "map", "maps")),
            help: Some("Fix the structural errors above and try again".to_string()),
        });
    }

    printer.success(
        "Finished",
        &format!(
            "{} to {}",
            plural(registry.len(), "map", "maps"),
            display_path(&output)
        ),
    );

    Ok(())
}

/// Serialize one map to `<output>/<id>.json`.
fn write_map(map: &WorldMap, output: &Path, pretty: bool) -> Result<PathBuf> {
    let json = if pretty {
        serde_json::to_string_pretty(map)
    } else {
        serde_json::to_string(map)
    }
    .map_err(|e| MapError::Build {
        message: format!("Failed to serialize map '{}': {}", map.id, e),
        help: None,
    })?;

    let path = output.join(format!("{}.json", map.id));
    fs::write(&path, json).map_err(|e| MapError::Io {
        path: path.clone(),
        message: e.to_string(),
    })?;

    Ok(path)
}
