//! worldmap - Layered tile map compiler
//!
//! Compiles authored map sources (stacks of tile layers with per-cell
//! rotation and collision-edge grids) into immutable [`WorldMap`]s, and
//! answers the two runtime questions every other system asks of a map:
//! what tile is visible at a cell, and which of its edges block movement.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod query;
pub mod registry;
pub mod types;
pub mod validation;

pub use discovery::{discover, discover_paths, DiscoveryResult, Manifest, ScanResult};
pub use error::{MapError, Result};
pub use parser::{compile_map, compile_map_with, parse_map_source, CompileOptions, MapInput};
pub use query::{collision_edge_mask_at, collision_edges_at, tile_at};
pub use registry::{MapFailure, MapRegistry, RegistryBuild, RegistryBuilder};
pub use types::{
    CameraPoint, CameraSize, Direction, EdgeMask, EncounterMode, MapEncounterGroupDefinition,
    Rotation, TileCatalog, TileCode, TileDefinition, TilePosition, WarpDefinition, WorldMap,
    WorldMapLayer,
};
pub use validation::{
    validate_registry, CollectingReporter, Diagnostic, Severity, TracingReporter,
    ValidationResult, WarningReporter,
};
