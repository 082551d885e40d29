//! Serialization of cell grids back into row strings.
//!
//! Compiled maps export their grids in the same one-character-per-cell row
//! encoding the authoring input uses.

use serde::Serializer;

use super::edges::{EdgeMask, Rotation};
use super::tile::TileCode;

pub(crate) fn tile_rows<S: Serializer>(grid: &[Vec<TileCode>], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(grid.iter().map(|row| row.iter().collect::<String>()))
}

pub(crate) fn rotation_rows<S: Serializer>(grid: &[Vec<Rotation>], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(
        grid.iter()
            .map(|row| row.iter().map(|r| r.to_digit()).collect::<String>()),
    )
}

pub(crate) fn edge_rows<S: Serializer>(grid: &[Vec<EdgeMask>], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(
        grid.iter()
            .map(|row| row.iter().map(|m| m.to_hex_digit()).collect::<String>()),
    )
}

/// Row strings for a tile grid.
pub fn to_row_strings(grid: &[Vec<TileCode>]) -> Vec<String> {
    grid.iter().map(|row| row.iter().collect()).collect()
}
