//! Runtime queries over compiled maps.
//!
//! These are the only functions movement, rendering and encounter logic call
//! on a map. They take `&WorldMap` and never mutate, so any number of readers
//! can share one map.
//!
//! `tile_at` and `collision_edge_mask_at` deliberately look at different
//! layers. Visuals come from the topmost visible non-blank layer. Collision
//! ORs every layer whose `collision` flag is set, regardless of visibility or
//! stacking, so an invisible walls layer still blocks.

use crate::types::{Direction, EdgeMask, TileCatalog, TileCode, TileDefinition, WorldMap, BLANK_TILE};

/// Topmost visible non-blank tile at a position.
///
/// Returns `None` outside the map and the blank code when every layer is
/// blank or hidden there.
pub fn tile_at(map: &WorldMap, x: i32, y: i32) -> Option<TileCode> {
    if !map.in_bounds(x, y) {
        return None;
    }
    let (x, y) = (x as usize, y as usize);

    let code = map
        .layers()
        .iter()
        .rev()
        .filter(|layer| layer.visible)
        .filter_map(|layer| layer.tile(x, y))
        .find(|&code| code != BLANK_TILE)
        .unwrap_or(BLANK_TILE);

    Some(code)
}

/// Blocked edges at a position as a 4-bit value. 0 outside the map.
pub fn collision_edge_mask_at(map: &WorldMap, x: i32, y: i32) -> u8 {
    collision_edges_at(map, x, y).bits() & 0x0f
}

/// Typed form of [`collision_edge_mask_at`].
pub fn collision_edges_at(map: &WorldMap, x: i32, y: i32) -> EdgeMask {
    if !map.in_bounds(x, y) {
        return EdgeMask::empty();
    }
    let (x, y) = (x as usize, y as usize);

    map.layers()
        .iter()
        .filter(|layer| layer.collision)
        .filter_map(|layer| layer.edges(x, y))
        .fold(EdgeMask::empty(), |acc, edges| acc | edges)
}

impl WorldMap {
    /// See [`tile_at`].
    pub fn tile_at(&self, x: i32, y: i32) -> Option<TileCode> {
        tile_at(self, x, y)
    }

    /// See [`collision_edge_mask_at`].
    pub fn collision_edge_mask_at(&self, x: i32, y: i32) -> u8 {
        collision_edge_mask_at(self, x, y)
    }

    /// See [`collision_edges_at`].
    pub fn collision_edges_at(&self, x: i32, y: i32) -> EdgeMask {
        collision_edges_at(self, x, y)
    }

    /// Catalog entry for the visible tile at a position.
    pub fn tile_definition_at(&self, x: i32, y: i32) -> Option<&'static TileDefinition> {
        self.tile_at(x, y).map(TileCatalog::get_or_unknown)
    }

    /// Whether the visible tile at a position is walkable. `false` outside the map.
    pub fn is_walkable_at(&self, x: i32, y: i32) -> bool {
        self.tile_definition_at(x, y).is_some_and(|t| t.walkable)
    }

    /// Whether a single step from (x, y) in `direction` is blocked.
    ///
    /// Leaving the map, an edge on the current cell, the matching edge on the
    /// destination cell, or a non-walkable destination tile all block.
    pub fn is_step_blocked(&self, x: i32, y: i32, direction: Direction) -> bool {
        if !self.in_bounds(x, y) {
            return true;
        }

        let (dx, dy) = direction.offset();
        let (Some(nx), Some(ny)) = (x.checked_add(dx), y.checked_add(dy)) else {
            return true;
        };
        if !self.in_bounds(nx, ny) {
            return true;
        }

        self.collision_edges_at(x, y).blocks(direction)
            || self.collision_edges_at(nx, ny).blocks(direction.opposite())
            || !self.is_walkable_at(nx, ny)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{compile_map, LayerInput, MapInput};
    use crate::validation::NullReporter;

    fn compile(input: MapInput) -> WorldMap {
        compile_map(&input, &NullReporter).unwrap()
    }

    #[test]
    fn test_tile_at_out_of_bounds() {
        let map = compile(MapInput::new("m", "M").with_tiles(&["GG", "GG"]));
        assert_eq!(map.tile_at(-1, 0), None);
        assert_eq!(map.tile_at(0, 2), None);
        assert_eq!(map.tile_at(2, 0), None);
        assert_eq!(map.tile_at(1, 1), Some('G'));
    }

    #[test]
    fn test_tile_at_topmost_visible() {
        let map = compile(
            MapInput::new("m", "M")
                .with_layer(LayerInput::new("base", &["GG"]))
                .with_layer(LayerInput::new(2, &["T."]))
                .with_layer(LayerInput::new(3, &["BB"]).with_visible(false)),
        );

        assert_eq!(map.tile_at(0, 0), Some('T'));
        assert_eq!(map.tile_at(1, 0), Some('G'));
    }

    #[test]
    fn test_tile_at_matches_composite() {
        let map = compile(
            MapInput::new("m", "M")
                .with_layer(LayerInput::new("base", &["GW.", "P.S"]))
                .with_layer(LayerInput::new(4, &["..T", "F.."]))
                .with_layer(LayerInput::new("npc", &[".B.", "..."]).with_visible(false)),
        );

        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(map.tile_at(x, y), Some(map.tiles()[y as usize][x as usize]));
            }
        }
        assert_eq!(map.tile_at(1, 1), Some(BLANK_TILE));
    }

    #[test]
    fn test_collision_ors_collision_layers_only() {
        let map = compile(
            MapInput::new("m", "M")
                .with_layer(LayerInput::new("base", &["GG"]).with_collision_edges(&["10"]))
                .with_layer(
                    LayerInput::new(2, &[".."])
                        .with_collision_edges(&["40"])
                        .with_collision(false),
                )
                .with_layer(LayerInput::new(3, &[".."]).with_collision_edges(&["82"])),
        );

        assert_eq!(map.collision_edge_mask_at(0, 0), 0x9);
        assert_eq!(map.collision_edge_mask_at(1, 0), 0x2);
        assert_eq!(map.collision_edge_mask_at(5, 0), 0);
        assert_eq!(map.collision_edge_mask_at(0, -1), 0);
    }

    #[test]
    fn test_hidden_collision_layer_still_blocks() {
        let map = compile(
            MapInput::new("m", "M")
                .with_layer(LayerInput::new("base", &["GGG", "GGG", "GGG", "GGG"]))
                .with_layer(
                    LayerInput::new(9, &["...", "...", "...", "..."])
                        .with_collision_edges(&["000", "000", "000", "00a"])
                        .with_visible(false),
                ),
        );

        assert_eq!(map.collision_edge_mask_at(2, 3), 0xA);
        assert_eq!(map.tile_at(2, 3), Some('G'));
    }

    #[test]
    fn test_walkability() {
        let map = compile(MapInput::new("m", "M").with_tiles(&["GW?"]));
        assert!(map.is_walkable_at(0, 0));
        assert!(!map.is_walkable_at(1, 0));
        assert!(!map.is_walkable_at(2, 0));
        assert!(!map.is_walkable_at(3, 0));
        assert_eq!(map.tile_definition_at(1, 0).map(|t| t.label), Some("Water"));
    }

    #[test]
    fn test_step_blocked() {
        let map = compile(
            MapInput::new("m", "M")
                .with_layer(LayerInput::new("base", &["GGW", "GGG"]).with_collision_edges(&["200", "000"])),
        );

        // east edge of (0,0)
        assert!(map.is_step_blocked(0, 0, Direction::East));
        // entering (0,0) from the east crosses the same edge
        assert!(map.is_step_blocked(1, 0, Direction::West));
        assert!(!map.is_step_blocked(1, 0, Direction::South));
        assert!(!map.is_step_blocked(0, 0, Direction::South));
        // water
        assert!(map.is_step_blocked(1, 0, Direction::East));
        // off the map
        assert!(map.is_step_blocked(0, 0, Direction::North));
    }

    #[test]
    fn test_step_blocked_at_integer_limits() {
        let map = compile(MapInput::new("m", "M").with_tiles(&["GG"]));

        assert!(map.is_step_blocked(i32::MAX, 0, Direction::East));
        assert!(map.is_step_blocked(i32::MIN, 0, Direction::West));
        assert!(map.is_step_blocked(0, i32::MAX, Direction::South));
        assert!(map.is_step_blocked(0, i32::MIN, Direction::North));
        assert!(!map.is_step_blocked(0, 0, Direction::East));
    }
}
