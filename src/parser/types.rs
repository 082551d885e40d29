//! Author-facing input types.
//!
//! These mirror the map source files (YAML or JSON, camelCase keys) and are
//! deliberately loose: most fields are optional and numbers are accepted as
//! floats. The compiler turns them into the strict types in `crate::types`.

use serde::Deserialize;

use crate::types::WarpDefinition;

/// A raw layer identity token as written by the author.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawLayerId {
    Number(f64),
    Text(String),
}

impl From<&str> for RawLayerId {
    fn from(s: &str) -> Self {
        RawLayerId::Text(s.to_string())
    }
}

impl From<i32> for RawLayerId {
    fn from(n: i32) -> Self {
        RawLayerId::Number(f64::from(n))
    }
}

impl std::fmt::Display for RawLayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawLayerId::Number(n) => write!(f, "{}", n),
            RawLayerId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One layer of a map source.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerInput {
    #[serde(default)]
    pub id: Option<RawLayerId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tiles: Vec<String>,
    #[serde(default)]
    pub rotations: Option<Vec<String>>,
    #[serde(default)]
    pub collision_edges: Option<Vec<String>>,
    #[serde(default)]
    pub visible: Option<bool>,
    #[serde(default)]
    pub collision: Option<bool>,
}

impl LayerInput {
    /// A layer with the given id token and tile rows.
    pub fn new(id: impl Into<RawLayerId>, tiles: &[&str]) -> Self {
        Self {
            id: Some(id.into()),
            tiles: rows(tiles),
            ..Self::default()
        }
    }

    /// A layer without an id token.
    pub fn anonymous(tiles: &[&str]) -> Self {
        Self {
            tiles: rows(tiles),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_rotations(mut self, rotations: &[&str]) -> Self {
        self.rotations = Some(rows(rotations));
        self
    }

    pub fn with_collision_edges(mut self, edges: &[&str]) -> Self {
        self.collision_edges = Some(rows(edges));
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn with_collision(mut self, collision: bool) -> Self {
        self.collision = Some(collision);
        self
    }
}

/// A tile coordinate as written by the author. May be negative or fractional.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PositionInput {
    pub x: f64,
    pub y: f64,
}

/// An encounter group as written by the author.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterGroupInput {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub tile_positions: Vec<PositionInput>,
    #[serde(default)]
    pub walk_encounter_table_id: Option<String>,
    #[serde(default)]
    pub fish_encounter_table_id: Option<String>,
    #[serde(default)]
    pub walk_frequency: Option<f64>,
    #[serde(default)]
    pub fish_frequency: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct CameraSizeInput {
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CameraPointInput {
    pub x: f64,
    pub y: f64,
}

/// A complete map source.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapInput {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Legacy single-grid form. Ignored when `layers` is present.
    #[serde(default)]
    pub tiles: Option<Vec<String>>,
    #[serde(default)]
    pub layers: Option<Vec<LayerInput>>,
    #[serde(default)]
    pub npcs: Vec<serde_json::Value>,
    #[serde(default)]
    pub warps: Vec<WarpDefinition>,
    #[serde(default)]
    pub interactions: Vec<serde_json::Value>,
    #[serde(default)]
    pub encounter_groups: Vec<EncounterGroupInput>,
    #[serde(default)]
    pub camera_size: Option<CameraSizeInput>,
    #[serde(default)]
    pub camera_point: Option<CameraPointInput>,
}

impl MapInput {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Use the legacy single-grid form.
    pub fn with_tiles(mut self, tiles: &[&str]) -> Self {
        self.tiles = Some(rows(tiles));
        self
    }

    pub fn with_layer(mut self, layer: LayerInput) -> Self {
        self.layers.get_or_insert_with(Vec::new).push(layer);
        self
    }

    pub fn with_encounter_group(mut self, group: EncounterGroupInput) -> Self {
        self.encounter_groups.push(group);
        self
    }

    pub fn with_warp(mut self, warp: WarpDefinition) -> Self {
        self.warps.push(warp);
        self
    }

    pub fn with_camera_size(mut self, width: f64, height: f64) -> Self {
        self.camera_size = Some(CameraSizeInput {
            width: Some(width),
            height: Some(height),
        });
        self
    }

    pub fn with_camera_point(mut self, x: f64, y: f64) -> Self {
        self.camera_point = Some(CameraPointInput { x, y });
        self
    }
}

fn rows(rows: &[&str]) -> Vec<String> {
    rows.iter().map(|r| r.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_layer_id_untagged() {
        let layer: LayerInput = serde_json::from_str(r#"{"id": 3, "tiles": ["G"]}"#).unwrap();
        assert_eq!(layer.id, Some(RawLayerId::Number(3.0)));

        let layer: LayerInput = serde_json::from_str(r#"{"id": "npc", "tiles": ["G"]}"#).unwrap();
        assert_eq!(layer.id, Some(RawLayerId::Text("npc".to_string())));

        let layer: LayerInput = serde_json::from_str(r#"{"tiles": ["G"]}"#).unwrap();
        assert_eq!(layer.id, None);
    }

    #[test]
    fn test_map_input_camel_case() {
        let input: MapInput = serde_json::from_str(
            r#"{
                "id": "route-1",
                "name": "Route 1",
                "layers": [{"id": "base", "tiles": ["GG"], "collisionEdges": ["f0"]}],
                "encounterGroups": [{"tilePositions": [{"x": 0, "y": 0}], "walkFrequency": 0.25}],
                "cameraSize": {"width": 11},
                "warps": [{"x": 0, "y": 0, "toMapId": "town", "toX": 3, "toY": 4}]
            }"#,
        )
        .unwrap();

        let layers = input.layers.as_ref().unwrap();
        assert_eq!(layers[0].collision_edges, Some(vec!["f0".to_string()]));
        assert_eq!(input.encounter_groups[0].walk_frequency, Some(0.25));
        assert_eq!(input.camera_size.unwrap().width, Some(11.0));
        assert_eq!(input.camera_size.unwrap().height, None);
        assert_eq!(input.warps[0].to_map_id, "town");
    }

    #[test]
    fn test_map_input_yaml() {
        let input: MapInput = serde_yaml::from_str(
            "id: cave\ntiles:\n  - RRR\n  - R.R\nnpcs:\n  - {id: hiker, x: 1, y: 1}\n",
        )
        .unwrap();

        assert_eq!(input.name, None);
        assert_eq!(input.tiles.as_ref().map(Vec::len), Some(2));
        assert_eq!(input.npcs.len(), 1);
        assert!(input.layers.is_none());
    }

    #[test]
    fn test_builders() {
        let input = MapInput::new("m", "M")
            .with_layer(LayerInput::new("base", &["GG"]).with_collision(false))
            .with_layer(LayerInput::new(5, &[".."]).with_visible(false));

        let layers = input.layers.unwrap();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].collision, Some(false));
        assert_eq!(layers[1].id, Some(RawLayerId::Number(5.0)));
    }
}
