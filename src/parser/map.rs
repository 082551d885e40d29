//! Map compilation.
//!
//! Turns a `MapInput` into a `WorldMap`:
//!
//! 1. expand legacy single-grid input into Base + NPC layers
//! 2. take the map size from the first layer
//! 3. resolve layer identities in input order
//! 4. parse every layer against the map size
//! 5. sort layers by order id
//! 6. composite visible layers into the player-facing tile grid
//! 7. sanitize camera framing and encounter groups
//!
//! Any structural problem aborts this map only. Content problems are
//! reported through the `WarningReporter` and compilation carries on.

use crate::error::{MapError, Result};
use crate::types::{TileCode, WorldMap, WorldMapLayer, WorldMapParts, BLANK_TILE};
use crate::validation::WarningReporter;

use super::camera::{sanitize_camera_point, sanitize_camera_size};
use super::encounter::sanitize_encounter_groups;
use super::identity::LayerIdResolver;
use super::layer::{parse_layer, GridShape};
use super::legacy::normalize_layers;
use super::types::MapInput;

/// Knobs for map compilation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Reject non-numeric and duplicate explicit layer ids instead of renumbering them.
    pub strict_layer_ids: bool,
}

/// Compile a map with default options.
pub fn compile_map(input: &MapInput, reporter: &dyn WarningReporter) -> Result<WorldMap> {
    compile_map_with(input, reporter, &CompileOptions::default())
}

/// Compile a map.
pub fn compile_map_with(
    input: &MapInput,
    reporter: &dyn WarningReporter,
    options: &CompileOptions,
) -> Result<WorldMap> {
    let map_id = input.id.trim();
    if map_id.is_empty() {
        return Err(MapError::structural("<unnamed>", "map id is empty")
            .with_help("Every map needs a non-empty `id`"));
    }
    if !is_safe_map_id(map_id) {
        return Err(MapError::structural(map_id, "map id may not contain `/`, `\\` or `..`")
            .with_help("Map ids name output files, use a plain name like `route-1`"));
    }

    let layer_inputs = normalize_layers(input)?;

    let first = &layer_inputs[0];
    let shape = GridShape {
        width: first.tiles.first().map_or(0, |row| row.chars().count()),
        height: first.tiles.len(),
    };
    if shape.width == 0 {
        return Err(MapError::structural(map_id, "map has zero width")
            .with_help("The first layer's first row defines the map width"));
    }

    let mut resolver = LayerIdResolver::new(map_id, reporter).strict(options.strict_layer_ids);
    let mut layers = layer_inputs
        .iter()
        .enumerate()
        .map(|(index, layer)| {
            let identity = resolver.resolve(layer.id.as_ref(), index)?;
            parse_layer(map_id, layer, identity, shape, reporter)
        })
        .collect::<Result<Vec<_>>>()?;

    layers.sort_by_key(|l| l.order_id);

    let tiles = composite_tiles(&layers, shape);
    let camera_size = sanitize_camera_size(input.camera_size.as_ref());
    let camera_point = sanitize_camera_point(input.camera_point.as_ref(), shape.width, shape.height);
    let encounter_groups = sanitize_encounter_groups(
        map_id,
        &input.encounter_groups,
        shape.width,
        shape.height,
        reporter,
    );

    let name = input
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(map_id)
        .to_string();

    tracing::debug!(
        map_id,
        width = shape.width,
        height = shape.height,
        layers = layers.len(),
        "compiled map"
    );

    Ok(WorldMap::from_parts(WorldMapParts {
        id: map_id.to_string(),
        name,
        width: shape.width,
        height: shape.height,
        layers,
        tiles,
        npcs: input.npcs.clone(),
        warps: input.warps.clone(),
        interactions: input.interactions.clone(),
        encounter_groups,
        camera_size,
        camera_point,
    }))
}

/// Paint visible layers bottom to top. Blank cells never overwrite.
fn composite_tiles(layers: &[WorldMapLayer], shape: GridShape) -> Vec<Vec<TileCode>> {
    let mut tiles = vec![vec![BLANK_TILE; shape.width]; shape.height];

    for layer in layers.iter().filter(|l| l.visible) {
        for (out_row, row) in tiles.iter_mut().zip(layer.tiles()) {
            for (out, &code) in out_row.iter_mut().zip(row) {
                if code != BLANK_TILE {
                    *out = code;
                }
            }
        }
    }

    tiles
}

/// Ids become `<id>.json` file names, so they must stay a single path component.
fn is_safe_map_id(id: &str) -> bool {
    !id.contains(['/', '\\', '\0']) && !id.contains("..")
}
