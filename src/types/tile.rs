//! Tile catalog for world maps.
//!
//! Every cell of a layer grid holds a single-character tile code. The
//! catalog maps those codes to static render and physics metadata:
//! - `.` = blank (nothing drawn, lets lower layers show through)
//! - `?` = unknown tile (substituted for codes the catalog doesn't know)
//! - letters and a few symbols = terrain, walls and props

use serde::Serialize;

/// A single-character tile symbol as it appears in layer grids.
pub type TileCode = char;

/// The blank code. Blank cells never win during compositing.
pub const BLANK_TILE: TileCode = '.';

/// Substitute for codes missing from the catalog.
pub const UNKNOWN_TILE: TileCode = '?';

/// Static metadata for one tile kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileDefinition {
    pub code: TileCode,
    pub label: &'static str,
    pub walkable: bool,
    /// Editor/minimap colour as `#rrggbb`.
    pub color: &'static str,
    /// Render height in tiles (trees and roofs stand taller than the cell).
    pub height: u8,
    /// Index into the tile atlas. `None` means the tile is drawn as a flat colour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atlas_index: Option<u16>,
    /// Sort against actors by y instead of always drawing below them.
    pub y_sort_with_actors: bool,
}

impl TileDefinition {
    const fn flat(code: TileCode, label: &'static str, walkable: bool, color: &'static str) -> Self {
        Self {
            code,
            label,
            walkable,
            color,
            height: 0,
            atlas_index: None,
            y_sort_with_actors: false,
        }
    }

    const fn atlas(mut self, index: u16) -> Self {
        self.atlas_index = Some(index);
        self
    }

    const fn tall(mut self, height: u8) -> Self {
        self.height = height;
        self.y_sort_with_actors = true;
        self
    }

    /// Whether this is the blank code.
    pub fn is_blank(&self) -> bool {
        self.code == BLANK_TILE
    }
}

const TILES: &[TileDefinition] = &[
    TileDefinition::flat(BLANK_TILE, "Blank", true, "#000000"),
    TileDefinition::flat(UNKNOWN_TILE, "Unknown", false, "#ff00ff"),
    TileDefinition::flat('A', "Ash Floor", true, "#8c8c8c").atlas(0),
    TileDefinition::flat('B', "Brick Wall", false, "#8b3a2b").atlas(1),
    TileDefinition::flat('C', "Cliff", false, "#6b5a45").atlas(2).tall(1),
    TileDefinition::flat('D', "Door", true, "#a0522d").atlas(3),
    TileDefinition::flat('E', "Earth", true, "#9b7653").atlas(4),
    TileDefinition::flat('F', "Flowers", true, "#e86fa6").atlas(5),
    TileDefinition::flat('G', "Grass", true, "#5fa84a").atlas(6),
    TileDefinition::flat('H', "House Roof", false, "#b5443a").atlas(7).tall(2),
    TileDefinition::flat('L', "Ledge", false, "#7c8f4e").atlas(8),
    TileDefinition::flat('M', "Mountain", false, "#5d5346").atlas(9).tall(2),
    TileDefinition::flat('P', "Path", true, "#d8c08a").atlas(10),
    TileDefinition::flat('R', "Rock", false, "#777777").atlas(11),
    TileDefinition::flat('S', "Sand", true, "#e8d9a0").atlas(12),
    TileDefinition::flat('T', "Tree", false, "#2e6b34").atlas(13).tall(2),
    TileDefinition::flat('U', "Tall Grass", true, "#3f8f3a").atlas(14),
    TileDefinition::flat('W', "Water", false, "#3b7dd8").atlas(15),
    TileDefinition::flat('X', "Counter", false, "#c29a6b").atlas(16),
    TileDefinition::flat('#', "Fence", false, "#a57c52").atlas(17),
    TileDefinition::flat('~', "Deep Water", false, "#1f4f9e").atlas(18),
    TileDefinition::flat('=', "Bridge", true, "#9a7448").atlas(19),
    TileDefinition::flat('^', "Sign", false, "#c8a36b").atlas(20).tall(1),
];

/// Built-in tile catalog.
pub struct TileCatalog;

impl TileCatalog {
    /// All tile definitions, blank first.
    pub fn all() -> &'static [TileDefinition] {
        TILES
    }

    /// Look up a tile by code.
    pub fn get(code: TileCode) -> Option<&'static TileDefinition> {
        TILES.iter().find(|t| t.code == code)
    }

    /// Whether the catalog knows this code.
    pub fn contains(code: TileCode) -> bool {
        Self::get(code).is_some()
    }

    /// The definition used for unknown codes.
    pub fn unknown() -> &'static TileDefinition {
        &TILES[1]
    }

    /// Look up a tile, falling back to the unknown definition.
    pub fn get_or_unknown(code: TileCode) -> &'static TileDefinition {
        Self::get(code).unwrap_or_else(Self::unknown)
    }
}
