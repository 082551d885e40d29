//! Layer grid parsing.
//!
//! Turns one `LayerInput` into a `WorldMapLayer`, checking every grid against
//! the map's dimensions. Shape problems and bad rotation/collision digits are
//! fatal. Unknown tile codes are not: they become `?` and are reported once
//! per layer, since content often references tiles that haven't been added to
//! the catalog yet.

use std::collections::BTreeSet;

use crate::error::{MapError, Result};
use crate::types::{
    EdgeMask, LayerIdentity, Rotation, TileCatalog, TileCode, WorldMapLayer, UNKNOWN_TILE,
};
use crate::validation::{Diagnostic, WarningReporter};

use super::types::LayerInput;

/// Expected size of every grid in a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub width: usize,
    pub height: usize,
}

/// Parse and validate a single layer.
pub fn parse_layer(
    map_id: &str,
    input: &LayerInput,
    identity: LayerIdentity,
    shape: GridShape,
    reporter: &dyn WarningReporter,
) -> Result<WorldMapLayer> {
    if input.tiles.is_empty() {
        return Err(MapError::structural(
            map_id,
            format!("layer '{}' has no tile rows", identity.id),
        )
        .with_help("Every layer needs a `tiles` grid"));
    }

    check_shape(map_id, &identity, "tiles", &input.tiles, shape)?;

    let mut unknown = BTreeSet::new();
    let tiles: Vec<Vec<TileCode>> = input
        .tiles
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| {
                    if TileCatalog::contains(c) {
                        c
                    } else {
                        unknown.insert(c);
                        UNKNOWN_TILE
                    }
                })
                .collect()
        })
        .collect();

    if !unknown.is_empty() {
        let codes: Vec<String> = unknown.iter().map(|c| format!("'{}'", c)).collect();
        reporter.report(
            map_id,
            Diagnostic::warning(
                "worldmap::unknown-tile",
                format!(
                    "layer '{}': unknown tile codes {} replaced with '{}'",
                    identity.id,
                    codes.join(", "),
                    UNKNOWN_TILE
                ),
            )
            .with_help("Add the tiles to the catalog or fix the typo"),
        );
    }

    let rotations = match &input.rotations {
        Some(rows) => {
            check_shape(map_id, &identity, "rotations", rows, shape)?;
            decode_grid(map_id, &identity, rows, "rotation", "a digit 0-3", Rotation::from_digit)?
        }
        None => vec![vec![Rotation::None; shape.width]; shape.height],
    };

    let collision_edges = match &input.collision_edges {
        Some(rows) => {
            check_shape(map_id, &identity, "collisionEdges", rows, shape)?;
            decode_grid(
                map_id,
                &identity,
                rows,
                "collision edge",
                "a hex digit 0-f",
                EdgeMask::from_hex_digit,
            )?
        }
        None => vec![vec![EdgeMask::empty(); shape.width]; shape.height],
    };

    let name = input
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| identity.default_name());

    Ok(WorldMapLayer::new(
        identity,
        name,
        tiles,
        rotations,
        collision_edges,
        input.visible.unwrap_or(true),
        input.collision.unwrap_or(true),
    ))
}

/// Check row count and every row's width.
fn check_shape(
    map_id: &str,
    identity: &LayerIdentity,
    grid: &str,
    rows: &[String],
    shape: GridShape,
) -> Result<()> {
    if rows.len() != shape.height {
        return Err(MapError::structural(
            map_id,
            format!(
                "layer '{}' {} has {} rows, expected {}",
                identity.id,
                grid,
                rows.len(),
                shape.height
            ),
        )
        .with_help("All grids in a map must match the first layer's size"));
    }

    for (y, row) in rows.iter().enumerate() {
        let width = row.chars().count();
        if width != shape.width {
            return Err(MapError::structural(
                map_id,
                format!(
                    "layer '{}' {} row {} has {} cells, expected {}",
                    identity.id, grid, y, width, shape.width
                ),
            )
            .with_help("All grids in a map must match the first layer's size"));
        }
    }

    Ok(())
}

/// Decode a digit grid, failing on the first bad character.
fn decode_grid<T>(
    map_id: &str,
    identity: &LayerIdentity,
    rows: &[String],
    what: &str,
    expected: &str,
    decode: impl Fn(char) -> Option<T>,
) -> Result<Vec<Vec<T>>> {
    rows.iter()
        .enumerate()
        .map(|(y, row)| {
            row.chars()
                .enumerate()
                .map(|(x, c)| {
                    decode(c).ok_or_else(|| {
                        MapError::structural(
                            map_id,
                            format!(
                                "layer '{}' {} at ({}, {}) is '{}', expected {}",
                                identity.id, what, x, y, c, expected
                            ),
                        )
                    })
                })
                .collect::<Result<Vec<T>>>()
        })
        .collect()
}
