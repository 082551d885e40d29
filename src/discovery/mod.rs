//! File discovery and map loading for worldmap projects.
//!
//! Finds map sources under a project directory, either by convention
//! (every `*.map.yaml|yml|json` below the root) or through a
//! `worldmap.yaml` manifest.
//!
//! # Example
//!
//! ```ignore
//! use worldmap::discovery::discover;
//! use worldmap::validation::TracingReporter;
//!
//! let result = discover("./my-game")?;
//! println!("Found {} map files", result.scan.total());
//!
//! let build = result.into_builder()?.build(&TracingReporter);
//! ```

mod loader;
mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::parser::CompileOptions;
use crate::registry::RegistryBuilder;

pub use loader::{load_map_file, load_maps};
pub use manifest::Manifest;
pub use scanner::{is_map_source, scan_directory, scan_sources, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "worldmap.yaml";

/// Result of discovering map sources in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no worldmap.yaml was found).
    pub manifest: Manifest,

    /// Whether a worldmap.yaml manifest was found.
    pub has_manifest: bool,

    pub scan: ScanResult,
}

impl DiscoveryResult {
    /// Parse every discovered file using the manifest's compile options.
    pub fn into_builder(self) -> Result<RegistryBuilder> {
        let options = self.manifest.compile_options();
        self.into_builder_with_options(options)
    }

    /// Parse every discovered file with explicit compile options.
    pub fn into_builder_with_options(self, options: CompileOptions) -> Result<RegistryBuilder> {
        load_maps(&self.scan, options)
    }

    /// Output directory, resolved against the project root.
    pub fn output_dir(&self) -> PathBuf {
        if self.manifest.output.is_absolute() {
            self.manifest.output.clone()
        } else {
            self.root.join(&self.manifest.output)
        }
    }
}

/// Discover map sources in a project directory.
///
/// Uses `worldmap.yaml` in the root when present, otherwise scans the whole
/// directory.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let scan = scan_sources(&manifest.effective_sources(), &root, &manifest);
    tracing::debug!(root = %root.display(), has_manifest, files = scan.total(), "discovered map sources");

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        scan,
    })
}

/// Discover map sources from explicit files and directories (no manifest lookup).
///
/// Files are taken as given, even without a `.map.*` suffix.
pub fn discover_paths(paths: &[PathBuf]) -> Result<DiscoveryResult> {
    let manifest = Manifest::default();
    let mut scan = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            scan.merge(scan_directory(path, &manifest));
        } else if path.is_file() {
            scan.merge(ScanResult {
                maps: vec![path.clone()],
            });
        } else {
            tracing::warn!(path = %path.display(), "path does not exist");
        }
    }

    let root = paths
        .first()
        .map(|p| if p.is_dir() { p.as_path() } else { p.parent().unwrap_or(p) })
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest: false,
        scan,
    })
}

/// Discover from explicit paths when given, otherwise from the current directory.
pub fn discover_or_cwd(paths: &[PathBuf]) -> Result<DiscoveryResult> {
    if paths.is_empty() {
        discover(".")
    } else {
        discover_paths(paths)
    }
}
