//! Validation checks for a map registry.
//!
//! Each check takes an `&MapRegistry` and returns a `ValidationResult`.
//! Compile-time warnings already covered the per-field problems; these look
//! at compiled maps as a whole and across maps.

use crate::registry::MapRegistry;
use crate::types::{CameraPoint, WorldMap};

use super::warning::{Diagnostic, ValidationResult};

/// Check that every warp starts on its map and lands inside an existing map.
pub fn check_warp_targets(registry: &MapRegistry) -> ValidationResult {
    let mut result = ValidationResult::new();

    for map in registry.maps() {
        for warp in map.warps() {
            let label = warp_label(warp.id.as_deref(), warp.x, warp.y);

            if !map.in_bounds(warp.x, warp.y) {
                result.push(
                    Diagnostic::error(
                        "worldmap::validate::warp-source",
                        format!("warp {} is outside the map", label),
                    )
                    .with_map(&map.id),
                );
            }

            match registry.get(&warp.to_map_id) {
                None => result.push(
                    Diagnostic::error(
                        "worldmap::validate::warp-target",
                        format!("warp {} leads to unknown map '{}'", label, warp.to_map_id),
                    )
                    .with_map(&map.id)
                    .with_help("Check the spelling of `toMapId` or add the destination map"),
                ),
                Some(target) if !target.in_bounds(warp.to_x, warp.to_y) => result.push(
                    Diagnostic::error(
                        "worldmap::validate::warp-target",
                        format!(
                            "warp {} lands at ({}, {}), outside '{}' ({}x{})",
                            label,
                            warp.to_x,
                            warp.to_y,
                            target.id,
                            target.width(),
                            target.height()
                        ),
                    )
                    .with_map(&map.id),
                ),
                Some(_) => {}
            }
        }
    }

    result
}

fn warp_label(id: Option<&str>, x: i32, y: i32) -> String {
    match id {
        Some(id) => format!("'{}'", id),
        None => format!("at ({}, {})", x, y),
    }
}

/// Check for layers that neither draw nor block.
pub fn check_inert_layers(registry: &MapRegistry) -> ValidationResult {
    registry
        .maps()
        .flat_map(|map| {
            map.layers().iter().filter(|l| l.is_inert()).map(move |layer| {
                Diagnostic::warning(
                    "worldmap::validate::inert-layer",
                    format!(
                        "layer '{}' is hidden and has collision disabled",
                        layer.id
                    ),
                )
                .with_map(&map.id)
                .with_help("Remove the layer or enable `visible` or `collision`")
            })
        })
        .collect()
}

/// Check for encounter groups that can never trigger.
pub fn check_silent_encounter_groups(registry: &MapRegistry) -> ValidationResult {
    registry
        .maps()
        .flat_map(|map| {
            map.encounter_groups()
                .iter()
                .filter(|g| g.is_silent())
                .map(move |group| {
                    Diagnostic::warning(
                        "worldmap::validate::silent-encounter-group",
                        format!("encounter group '{}' can never trigger", group.id),
                    )
                    .with_map(&map.id)
                    .with_help("Set an encounter table id and a frequency above 0")
                })
        })
        .collect()
}

/// Check that the camera does not start on a tile the player cannot stand on.
pub fn check_blocked_camera_point(registry: &MapRegistry) -> ValidationResult {
    registry
        .maps()
        .filter_map(|map| map.camera_point().map(|point| (map, point)))
        .filter(|(map, point)| !camera_tile_walkable(map, *point))
        .map(|(map, point)| {
            Diagnostic::warning(
                "worldmap::validate::blocked-camera-point",
                format!(
                    "camera point ({}, {}) is on a non-walkable tile",
                    point.x, point.y
                ),
            )
            .with_map(&map.id)
        })
        .collect()
}

fn camera_tile_walkable(map: &WorldMap, point: CameraPoint) -> bool {
    match (i32::try_from(point.x), i32::try_from(point.y)) {
        (Ok(x), Ok(y)) => map.is_walkable_at(x, y),
        _ => false,
    }
}
