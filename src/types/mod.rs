//! Core domain types for worldmap.
//!
//! This module contains the fundamental types of a compiled map:
//! - `TileCatalog` - Static tile metadata keyed by tile code
//! - `EdgeMask` / `Rotation` - Per-cell collision and rotation encodings
//! - `WorldMapLayer` - One validated layer
//! - `WorldMap` - The compiled, immutable map

mod camera;
mod edges;
mod encounter;
mod grid;
mod layer;
mod map;
mod tile;

pub use camera::{
    CameraPoint, CameraSize, DEFAULT_CAMERA_HEIGHT, DEFAULT_CAMERA_WIDTH, MAX_CAMERA_TILES,
    MIN_CAMERA_TILES,
};
pub use edges::{Direction, EdgeMask, Rotation};
pub use encounter::{EncounterMode, MapEncounterGroupDefinition, TilePosition};
pub use grid::to_row_strings;
pub use layer::{LayerIdentity, WorldMapLayer, BASE_ORDER_ID, NPC_ORDER_ID};
pub use map::{WarpDefinition, WorldMap};
pub use tile::{TileCatalog, TileCode, TileDefinition, BLANK_TILE, UNKNOWN_TILE};

pub(crate) use map::WorldMapParts;
