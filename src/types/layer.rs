//! Compiled map layers.
//!
//! A layer is three aligned grids (tiles, rotations, collision edges) plus two
//! flags. `visible` controls compositing; `collision` controls whether the
//! layer's edge masks block movement. The two are independent, so a hidden
//! "walls" layer can still block.

use serde::Serialize;

use super::edges::{EdgeMask, Rotation};
use super::grid;
use super::tile::{TileCode, BLANK_TILE};

/// Order id of the base layer.
pub const BASE_ORDER_ID: u32 = 1;

/// Order id reserved for the NPC layer.
pub const NPC_ORDER_ID: u32 = 2;

/// Resolved identity of a layer within one map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerIdentity {
    /// Canonical string id: `base`, `npc`, or the decimal order id.
    pub id: String,
    /// Unique positive stacking order. Higher draws on top.
    pub order_id: u32,
}

impl LayerIdentity {
    /// Build the canonical identity for an order id.
    pub fn from_order_id(order_id: u32) -> Self {
        let id = match order_id {
            BASE_ORDER_ID => "base".to_string(),
            NPC_ORDER_ID => "npc".to_string(),
            n => n.to_string(),
        };
        Self { id, order_id }
    }

    /// Default display name for a layer with this identity.
    pub fn default_name(&self) -> String {
        if self.order_id == BASE_ORDER_ID {
            "Base".to_string()
        } else {
            format!("Layer {}", self.order_id)
        }
    }
}

/// A parsed and validated layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldMapLayer {
    pub id: String,
    pub order_id: u32,
    pub name: String,

    /// Tile codes (row-major: tiles[y][x]).
    #[serde(serialize_with = "grid::tile_rows")]
    tiles: Vec<Vec<TileCode>>,

    #[serde(serialize_with = "grid::rotation_rows")]
    rotations: Vec<Vec<Rotation>>,

    #[serde(serialize_with = "grid::edge_rows")]
    collision_edges: Vec<Vec<EdgeMask>>,

    pub visible: bool,
    pub collision: bool,
}

impl WorldMapLayer {
    /// Assemble a layer from already-validated grids.
    ///
    /// The parser guarantees all three grids share the same shape.
    pub(crate) fn new(
        identity: LayerIdentity,
        name: String,
        tiles: Vec<Vec<TileCode>>,
        rotations: Vec<Vec<Rotation>>,
        collision_edges: Vec<Vec<EdgeMask>>,
        visible: bool,
        collision: bool,
    ) -> Self {
        Self {
            id: identity.id,
            order_id: identity.order_id,
            name,
            tiles,
            rotations,
            collision_edges,
            visible,
            collision,
        }
    }

    pub fn width(&self) -> usize {
        self.tiles.first().map_or(0, |row| row.len())
    }

    pub fn height(&self) -> usize {
        self.tiles.len()
    }

    /// Tile code at a position, `None` if out of bounds.
    pub fn tile(&self, x: usize, y: usize) -> Option<TileCode> {
        self.tiles.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Rotation at a position, `None` if out of bounds.
    pub fn rotation(&self, x: usize, y: usize) -> Option<Rotation> {
        self.rotations.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Collision edges at a position, `None` if out of bounds.
    pub fn edges(&self, x: usize, y: usize) -> Option<EdgeMask> {
        self.collision_edges.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn tiles(&self) -> &[Vec<TileCode>] {
        &self.tiles
    }

    pub fn rotations(&self) -> &[Vec<Rotation>] {
        &self.rotations
    }

    pub fn collision_edges(&self) -> &[Vec<EdgeMask>] {
        &self.collision_edges
    }

    /// Whether every tile in this layer is blank.
    pub fn is_blank(&self) -> bool {
        self.tiles.iter().flatten().all(|&c| c == BLANK_TILE)
    }

    /// A layer that neither draws nor blocks.
    pub fn is_inert(&self) -> bool {
        !self.visible && !self.collision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(tiles: &[&str], visible: bool, collision: bool) -> WorldMapLayer {
        let tiles: Vec<Vec<char>> = tiles.iter().map(|r| r.chars().collect()).collect();
        let rotations = tiles
            .iter()
            .map(|r| vec![Rotation::None; r.len()])
            .collect();
        let edges = tiles
            .iter()
            .map(|r| vec![EdgeMask::empty(); r.len()])
            .collect();
        WorldMapLayer::new(
            LayerIdentity::from_order_id(3),
            "Layer 3".to_string(),
            tiles,
            rotations,
            edges,
            visible,
            collision,
        )
    }

    #[test]
    fn test_identity_canonical_ids() {
        assert_eq!(LayerIdentity::from_order_id(1).id, "base");
        assert_eq!(LayerIdentity::from_order_id(2).id, "npc");
        assert_eq!(LayerIdentity::from_order_id(7).id, "7");
    }

    #[test]
    fn test_identity_default_name() {
        assert_eq!(LayerIdentity::from_order_id(1).default_name(), "Base");
        assert_eq!(LayerIdentity::from_order_id(2).default_name(), "Layer 2");
        assert_eq!(LayerIdentity::from_order_id(5).default_name(), "Layer 5");
    }

    #[test]
    fn test_layer_accessors() {
        let l = layer(&["GT", "W."], true, true);
        assert_eq!(l.width(), 2);
        assert_eq!(l.height(), 2);
        assert_eq!(l.tile(1, 0), Some('T'));
        assert_eq!(l.tile(2, 0), None);
        assert_eq!(l.rotation(0, 1), Some(Rotation::None));
        assert_eq!(l.edges(0, 0), Some(EdgeMask::empty()));
        assert!(!l.is_blank());
    }

    #[test]
    fn test_layer_inert() {
        assert!(layer(&[".."], false, false).is_inert());
        assert!(!layer(&[".."], false, true).is_inert());
        assert!(layer(&[".."], true, true).is_blank());
    }

    #[test]
    fn test_layer_serializes_rows() {
        let l = layer(&["GT", "W."], true, false);
        let json = serde_json::to_value(&l).unwrap();
        assert_eq!(json["tiles"], serde_json::json!(["GT", "W."]));
        assert_eq!(json["rotations"], serde_json::json!(["00", "00"]));
        assert_eq!(json["collisionEdges"], serde_json::json!(["00", "00"]));
        assert_eq!(json["orderId"], 3);
        assert_eq!(json["collision"], false);
    }
}
