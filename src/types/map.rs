//! Compiled world map.
//!
//! A `WorldMap` is produced once by the compiler and never mutated. Layers are
//! sorted ascending by order id, and `tiles` holds the precomputed composite
//! grid: for each cell, the tile of the highest visible layer whose tile there
//! is not blank.
//!
//! Runtime consumers go through [`WorldMap::tile_at`] and
//! [`WorldMap::collision_edge_mask_at`] (see `query`), not the layer grids.

use serde::{Deserialize, Serialize};

use super::camera::{CameraPoint, CameraSize};
use super::encounter::MapEncounterGroupDefinition;
use super::grid;
use super::layer::WorldMapLayer;
use super::tile::TileCode;

/// A warp tile that moves the player to another map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarpDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub x: i32,
    pub y: i32,
    pub to_map_id: String,
    pub to_x: i32,
    pub to_y: i32,
}

/// A compiled, immutable world map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldMap {
    pub id: String,
    pub name: String,
    width: usize,
    height: usize,
    layers: Vec<WorldMapLayer>,

    /// Composite grid (row-major: tiles[y][x]).
    #[serde(serialize_with = "grid::tile_rows")]
    tiles: Vec<Vec<TileCode>>,

    /// NPC placements, owned by the NPC domain and carried through as-is.
    npcs: Vec<serde_json::Value>,
    warps: Vec<WarpDefinition>,
    /// Interaction points, owned by the interaction domain and carried through as-is.
    interactions: Vec<serde_json::Value>,
    encounter_groups: Vec<MapEncounterGroupDefinition>,
    camera_size: CameraSize,
    #[serde(skip_serializing_if = "Option::is_none")]
    camera_point: Option<CameraPoint>,
}

/// Everything the compiler hands over when assembling a map.
pub(crate) struct WorldMapParts {
    pub id: String,
    pub name: String,
    pub width: usize,
    pub height: usize,
    pub layers: Vec<WorldMapLayer>,
    pub tiles: Vec<Vec<TileCode>>,
    pub npcs: Vec<serde_json::Value>,
    pub warps: Vec<WarpDefinition>,
    pub interactions: Vec<serde_json::Value>,
    pub encounter_groups: Vec<MapEncounterGroupDefinition>,
    pub camera_size: CameraSize,
    pub camera_point: Option<CameraPoint>,
}

impl WorldMap {
    pub(crate) fn from_parts(parts: WorldMapParts) -> Self {
        Self {
            id: parts.id,
            name: parts.name,
            width: parts.width,
            height: parts.height,
            layers: parts.layers,
            tiles: parts.tiles,
            npcs: parts.npcs,
            warps: parts.warps,
            interactions: parts.interactions,
            encounter_groups: parts.encounter_groups,
            camera_size: parts.camera_size,
            camera_point: parts.camera_point,
        }
    }

    /// Width in tiles.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in tiles.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Whether a signed coordinate falls inside the map.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Layers in ascending order id.
    pub fn layers(&self) -> &[WorldMapLayer] {
        &self.layers
    }

    /// Find a layer by order id.
    pub fn layer(&self, order_id: u32) -> Option<&WorldMapLayer> {
        self.layers
            .binary_search_by_key(&order_id, |l| l.order_id)
            .ok()
            .map(|i| &self.layers[i])
    }

    /// Composite tile grid.
    pub fn tiles(&self) -> &[Vec<TileCode>] {
        &self.tiles
    }

    /// Composite grid as row strings.
    pub fn tile_rows(&self) -> Vec<String> {
        grid::to_row_strings(&self.tiles)
    }

    pub fn npcs(&self) -> &[serde_json::Value] {
        &self.npcs
    }

    pub fn warps(&self) -> &[WarpDefinition] {
        &self.warps
    }

    pub fn interactions(&self) -> &[serde_json::Value] {
        &self.interactions
    }

    pub fn encounter_groups(&self) -> &[MapEncounterGroupDefinition] {
        &self.encounter_groups
    }

    /// Find an encounter group by id.
    pub fn encounter_group(&self, id: &str) -> Option<&MapEncounterGroupDefinition> {
        self.encounter_groups.iter().find(|g| g.id == id)
    }

    /// Encounter groups covering a tile, in declaration order.
    pub fn encounter_groups_at(
        &self,
        x: u32,
        y: u32,
    ) -> impl Iterator<Item = &MapEncounterGroupDefinition> + '_ {
        self.encounter_groups.iter().filter(move |g| g.contains(x, y))
    }

    pub fn camera_size(&self) -> CameraSize {
        self.camera_size
    }

    pub fn camera_point(&self) -> Option<CameraPoint> {
        self.camera_point
    }
}
