//! Project manifest (worldmap.yaml) parsing.
//!
//! The manifest says where map sources live, where compiled maps go, and
//! how strictly layer ids are checked.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};
use crate::parser::CompileOptions;

/// Project manifest loaded from worldmap.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Manifest {
    /// Directories to scan for map sources. Defaults to the project root.
    pub sources: Vec<String>,

    /// Output directory for compiled map JSON.
    pub output: PathBuf,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,

    /// Reject non-numeric and duplicate explicit layer ids.
    pub strict_layer_ids: bool,

    /// Pretty-print compiled JSON.
    pub pretty: bool,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            output: PathBuf::from("dist"),
            excludes: vec![],
            strict_layer_ids: false,
            pretty: true,
        }
    }
}

impl Manifest {
    /// Load manifest from a worldmap.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MapError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| MapError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check worldmap.yaml syntax".to_string()),
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path = path.to_string_lossy().replace('\\', "/");
        self.excludes
            .iter()
            .any(|pattern| matches_pattern(&path, pattern))
    }

    /// Get effective source paths, defaulting to current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }

    /// Compile options implied by the manifest.
    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            strict_layer_ids: self.strict_layer_ids,
        }
    }
}

/// Minimal glob matching: `*.ext`, `dir/*`, `**/dir/*`, or a plain substring.
fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(rest) = pattern.strip_prefix("**/") {
        return match rest.strip_suffix("/*") {
            Some(dir) => path_has_dir(path, dir),
            None => path.contains(rest),
        };
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        if !suffix.contains('/') {
            return path.ends_with(suffix);
        }
    }

    if let Some(dir) = pattern.strip_suffix("/*") {
        return path_has_dir(path, dir);
    }

    path.contains(pattern)
}

fn path_has_dir(path: &str, dir: &str) -> bool {
    path.starts_with(&format!("{}/", dir)) || path.contains(&format!("/{}/", dir))
}
