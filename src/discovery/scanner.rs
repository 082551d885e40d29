//! File system scanner for discovering map sources.
//!
//! Recursively scans directories for `.map.yaml`, `.map.yml` and
//! `.map.json` files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

const MAP_SUFFIXES: [&str; 3] = [".map.yaml", ".map.yml", ".map.json"];

/// Map source files found by a scan, in walk order.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub maps: Vec<PathBuf>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of discovered files.
    pub fn total(&self) -> usize {
        self.maps.len()
    }

    /// Check if no files were discovered.
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Merge another scan result into this one, skipping paths already seen.
    pub fn merge(&mut self, other: ScanResult) {
        for path in other.maps {
            if !self.maps.contains(&path) {
                self.maps.push(path);
            }
        }
    }
}

/// Scan a directory for map source files.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    let entries = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file());

    for entry in entries {
        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);

        if manifest.is_excluded(relative) {
            tracing::trace!(path = %path.display(), "excluded");
            continue;
        }

        if is_map_source(path) {
            result.maps.push(path.to_path_buf());
        }
    }

    result
}

/// Scan multiple source paths relative to a base directory.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        result.merge(scan_directory(&source_path, manifest));
    }

    result
}

/// Whether a file name carries a map source suffix.
pub fn is_map_source(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_ascii_lowercase())
        .is_some_and(|name| MAP_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_map_source() {
        assert!(is_map_source(Path::new("town.map.yaml")));
        assert!(is_map_source(Path::new("town.map.yml")));
        assert!(is_map_source(Path::new("maps/cave.map.json")));
        assert!(is_map_source(Path::new("/abs/Route-1.MAP.YAML")));
        assert!(!is_map_source(Path::new("town.yaml")));
        assert!(!is_map_source(Path::new("worldmap.yaml")));
        assert!(!is_map_source(Path::new("readme.md")));
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();
        let result = scan_directory(dir.path(), &Manifest::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_scan_recursive() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("routes/north")).unwrap();

        fs::write(dir.path().join("town.map.yaml"), "id: town").unwrap();
        fs::write(dir.path().join("routes/north/r1.map.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.md"), "# notes").unwrap();

        let result = scan_directory(dir.path(), &Manifest::default());
        assert_eq!(result.total(), 2);
    }

    #[test]
    fn test_scan_with_excludes() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("drafts")).unwrap();

        fs::write(dir.path().join("town.map.yaml"), "id: town").unwrap();
        fs::write(dir.path().join("drafts/cave.map.yaml"), "id: cave").unwrap();

        let manifest = Manifest {
            excludes: vec!["**/drafts/*".to_string()],
            ..Default::default()
        };

        let result = scan_directory(dir.path(), &manifest);
        assert_eq!(result.maps.len(), 1);
        assert!(result.maps[0].to_string_lossy().contains("town"));
    }

    #[test]
    fn test_scan_nonexistent_directory() {
        let result = scan_directory(Path::new("/nonexistent/path"), &Manifest::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_merge_dedupes() {
        let mut a = ScanResult::new();
        a.maps.push(PathBuf::from("a.map.yaml"));

        let mut b = ScanResult::new();
        b.maps.push(PathBuf::from("a.map.yaml"));
        b.maps.push(PathBuf::from("b.map.yaml"));

        a.merge(b);
        assert_eq!(a.total(), 2);
    }
}
