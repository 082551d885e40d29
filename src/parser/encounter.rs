//! Encounter group sanitization.
//!
//! Encounter groups are checked against the final map size. Nothing here is
//! fatal: bad positions are filtered out, empty or duplicate groups are
//! dropped with a warning, and frequencies are clamped.

use std::collections::HashSet;

use crate::types::{MapEncounterGroupDefinition, TilePosition};
use crate::validation::{Diagnostic, WarningReporter};

use super::types::{EncounterGroupInput, PositionInput};

/// Sanitize all encounter groups of a map, preserving input order.
pub fn sanitize_encounter_groups(
    map_id: &str,
    groups: &[EncounterGroupInput],
    width: usize,
    height: usize,
    reporter: &dyn WarningReporter,
) -> Vec<MapEncounterGroupDefinition> {
    let mut seen_ids = HashSet::new();
    let mut result = Vec::with_capacity(groups.len());

    for (index, group) in groups.iter().enumerate() {
        let id = group
            .id
            .as_deref()
            .map(slugify)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("encounter-group-{}", index + 1));

        if !seen_ids.insert(id.clone()) {
            reporter.report(
                map_id,
                Diagnostic::warning(
                    "worldmap::duplicate-encounter-group",
                    format!("encounter group '{}' is defined more than once, skipping", id),
                ),
            );
            continue;
        }

        let tile_positions = sanitize_positions(&group.tile_positions, width, height);
        if tile_positions.is_empty() {
            reporter.report(
                map_id,
                Diagnostic::warning(
                    "worldmap::empty-encounter-group",
                    format!("encounter group '{}' has no tiles inside the map, dropping", id),
                )
                .with_help("Tile positions must lie within the map bounds"),
            );
            continue;
        }

        result.push(MapEncounterGroupDefinition {
            id,
            tile_positions,
            walk_encounter_table_id: table_id(group.walk_encounter_table_id.as_deref()),
            fish_encounter_table_id: table_id(group.fish_encounter_table_id.as_deref()),
            walk_frequency: sanitize_frequency(group.walk_frequency),
            fish_frequency: sanitize_frequency(group.fish_frequency),
        });
    }

    result
}

/// Keep integral in-bounds positions, first occurrence wins.
fn sanitize_positions(positions: &[PositionInput], width: usize, height: usize) -> Vec<TilePosition> {
    let mut seen = HashSet::new();
    positions
        .iter()
        .filter_map(|p| {
            Some(TilePosition::new(
                coordinate(p.x, width)?,
                coordinate(p.y, height)?,
            ))
        })
        .filter(|p| seen.insert(*p))
        .collect()
}

fn coordinate(value: f64, extent: usize) -> Option<u32> {
    if !value.is_finite() || value.fract() != 0.0 || value < 0.0 || value >= extent as f64 {
        return None;
    }
    u32::try_from(value as u64).ok()
}

fn table_id(raw: Option<&str>) -> Option<String> {
    raw.map(slugify).filter(|s| !s.is_empty())
}

/// Clamp to `[0, 1]` and round to three decimals. Missing values are 0.
fn sanitize_frequency(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => (v.clamp(0.0, 1.0) * 1000.0).round() / 1000.0,
        _ => 0.0,
    }
}

/// Lowercase ASCII alphanumerics, with every other run collapsed into `-`.
pub fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut pending_dash = false;

    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}
