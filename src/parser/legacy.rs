//! Legacy single-grid input.
//!
//! Older map sources have a flat `tiles` grid and no `layers`. Before anything
//! else is parsed, such a map is expanded into the two layers every map is
//! expected to have: a collidable "Base" layer holding the grid, and a blank,
//! non-collidable "NPC" layer of the same size on the reserved NPC id.

use crate::error::{MapError, Result};
use crate::types::BLANK_TILE;

use super::types::{LayerInput, MapInput, RawLayerId};

/// Return the layers of `input`, synthesizing them from the legacy grid if needed.
pub fn normalize_layers(input: &MapInput) -> Result<Vec<LayerInput>> {
    if let Some(layers) = input.layers.as_ref().filter(|l| !l.is_empty()) {
        return Ok(layers.clone());
    }

    let Some(tiles) = input.tiles.as_ref().filter(|t| !t.is_empty()) else {
        return Err(MapError::structural(&input.id, "map has neither layers nor tiles")
            .with_help("Add a `layers` list or a legacy `tiles` grid"));
    };

    let blank: Vec<String> = tiles
        .iter()
        .map(|row| BLANK_TILE.to_string().repeat(row.chars().count()))
        .collect();

    Ok(vec![
        LayerInput {
            id: Some(RawLayerId::Text("base".to_string())),
            name: Some("Base".to_string()),
            tiles: tiles.clone(),
            rotations: None,
            collision_edges: None,
            visible: Some(true),
            collision: Some(true),
        },
        LayerInput {
            id: Some(RawLayerId::Text("npc".to_string())),
            name: Some("NPC".to_string()),
            tiles: blank,
            rotations: None,
            collision_edges: None,
            visible: Some(true),
            collision: Some(false),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers_pass_through() {
        let input = MapInput::new("m", "M")
            .with_tiles(&["WWW"])
            .with_layer(LayerInput::new(3, &["GG"]));

        let layers = normalize_layers(&input).unwrap();
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].tiles, vec!["GG".to_string()]);
    }

    #[test]
    fn test_legacy_expands_to_base_and_npc() {
        let input = MapInput::new("m", "M").with_tiles(&["GGT", "WWP"]);

        let layers = normalize_layers(&input).unwrap();
        assert_eq!(layers.len(), 2);

        assert_eq!(layers[0].id, Some(RawLayerId::Text("base".to_string())));
        assert_eq!(layers[0].collision, Some(true));
        assert_eq!(layers[0].tiles, vec!["GGT".to_string(), "WWP".to_string()]);

        assert_eq!(layers[1].id, Some(RawLayerId::Text("npc".to_string())));
        assert_eq!(layers[1].name.as_deref(), Some("NPC"));
        assert_eq!(layers[1].collision, Some(false));
        assert_eq!(layers[1].tiles, vec!["...".to_string(), "...".to_string()]);
    }

    #[test]
    fn test_empty_layers_fall_back_to_tiles() {
        let mut input = MapInput::new("m", "M").with_tiles(&["G"]);
        input.layers = Some(vec![]);

        assert_eq!(normalize_layers(&input).unwrap().len(), 2);
    }

    #[test]
    fn test_neither_is_fatal() {
        let input = MapInput::new("void", "Void");
        let err = normalize_layers(&input).unwrap_err();
        assert!(err.is_structural());
        assert!(err.to_string().contains("neither layers nor tiles"));
    }
}
