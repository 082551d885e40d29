//! Init command implementation.
//!
//! Generates a `worldmap.yaml` manifest from discovered map sources.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover, MANIFEST_FILENAME};
use crate::error::{MapError, Result};
use crate::output::{display_path, plural, Printer};

/// Initialize a worldmap project by generating a worldmap.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing worldmap.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(MapError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    printer.status("Scanning", &display_path(&args.path));

    // With --force the old manifest would steer discovery; scan by convention instead.
    let discovery = discover(&args.path)?;
    let scan = if discovery.has_manifest {
        crate::discovery::scan_directory(&discovery.root, &Default::default())
    } else {
        discovery.scan
    };

    let source_dirs: BTreeSet<String> = scan
        .maps
        .iter()
        .filter_map(|file| file.parent())
        .map(|parent| source_dir(parent, &discovery.root))
        .collect();

    let yaml = manifest_yaml(&source_dirs);
    fs::write(&manifest_path, &yaml).map_err(|e| MapError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    if !source_dirs.is_empty() {
        let dirs: Vec<&str> = source_dirs.iter().map(String::as_str).collect();
        printer.info("Discovered", &dirs.join(", "));
    }

    printer.success(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILENAME,
            plural(scan.total(), "map file", "map files")
        ),
    );

    Ok(())
}

/// Directory of a source file relative to the project root, as a manifest entry.
fn source_dir(parent: &Path, root: &Path) -> String {
    let relative = parent.strip_prefix(root).unwrap_or(parent);
    if relative.as_os_str().is_empty() {
        ".".to_string()
    } else {
        format!("{}/", relative.display())
    }
}

fn manifest_yaml(source_dirs: &BTreeSet<String>) -> String {
    let mut yaml = String::new();

    let only_root = source_dirs.len() == 1 && source_dirs.contains(".");
    if !source_dirs.is_empty() && !only_root {
        yaml.push_str("sources:\n");
        for dir in source_dirs {
            yaml.push_str(&format!("  - \"{}\"\n", dir));
        }
    }

    yaml.push_str("output: dist\n");
    yaml.push_str("strict_layer_ids: false\n");
    yaml
}
