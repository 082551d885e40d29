//! Encounter regions.
//!
//! An encounter group is a named set of tiles that can trigger a random
//! encounter lookup. Walking and fishing use separate tables and frequencies,
//! each independently optional.

use serde::{Deserialize, Serialize};

/// An in-bounds tile coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TilePosition {
    pub x: u32,
    pub y: u32,
}

impl TilePosition {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// How the player is interacting with the tile when the check runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncounterMode {
    Walk,
    Fish,
}

/// A sanitized encounter group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapEncounterGroupDefinition {
    pub id: String,
    pub tile_positions: Vec<TilePosition>,
    pub walk_encounter_table_id: Option<String>,
    pub fish_encounter_table_id: Option<String>,
    /// Chance per step, in `[0, 1]`.
    pub walk_frequency: f64,
    /// Chance per cast, in `[0, 1]`.
    pub fish_frequency: f64,
}

impl MapEncounterGroupDefinition {
    /// Whether the group covers this tile.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.tile_positions.contains(&TilePosition::new(x, y))
    }

    /// Table id and frequency for a mode, if that mode has a table.
    pub fn table_for(&self, mode: EncounterMode) -> Option<(&str, f64)> {
        match mode {
            EncounterMode::Walk => self
                .walk_encounter_table_id
                .as_deref()
                .map(|id| (id, self.walk_frequency)),
            EncounterMode::Fish => self
                .fish_encounter_table_id
                .as_deref()
                .map(|id| (id, self.fish_frequency)),
        }
    }

    /// Whether no mode can ever trigger from this group.
    pub fn is_silent(&self) -> bool {
        let walk = self.walk_encounter_table_id.is_some() && self.walk_frequency > 0.0;
        let fish = self.fish_encounter_table_id.is_some() && self.fish_frequency > 0.0;
        !walk && !fish
    }
}
