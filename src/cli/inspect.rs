//! Inspect command implementation.
//!
//! Prints a map's composite grid, or the query results for one cell.
//! Results go to stdout so they can be piped.

use std::path::PathBuf;

use clap::Args;

use crate::error::{MapError, Result};
use crate::output::Printer;
use crate::types::{EdgeMask, WorldMap};

use super::{compile_sources, print_compile_report};

/// Show the composite grid or one cell of a map
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Map file or directory
    pub path: PathBuf,

    /// Map id (optional when the source holds a single map)
    #[arg(long, short)]
    pub map: Option<String>,

    /// Cell column
    #[arg(long, requires = "y", allow_negative_numbers = true)]
    pub x: Option<i32>,

    /// Cell row
    #[arg(long, requires = "x", allow_negative_numbers = true)]
    pub y: Option<i32>,

    /// Print the compiled map as JSON
    #[arg(long, conflicts_with_all = ["x", "y"])]
    pub json: bool,
}

pub fn run(args: InspectArgs, printer: &Printer) -> Result<()> {
    let compiled = compile_sources(std::slice::from_ref(&args.path), false, printer)?;
    print_compile_report(&compiled, printer);

    let registry = &compiled.build.registry;
    let map = match &args.map {
        Some(id) => registry.get(id).ok_or_else(|| MapError::Build {
            message: format!("map '{}' not found", id),
            help: Some(format!(
                "Available maps: {}",
                registry.ids().collect::<Vec<_>>().join(", ")
            )),
        })?,
        None => single_map(registry.maps())?,
    };

    let text = match (args.x, args.y) {
        (Some(x), Some(y)) => describe_cell(map, x, y),
        _ if args.json => serde_json::to_string_pretty(map).map_err(|e| MapError::Build {
            message: format!("Failed to serialize map '{}': {}", map.id, e),
            help: None,
        })?,
        _ => map.tile_rows().join("\n"),
    };
    println!("{}", text);

    Ok(())
}

fn single_map<'a>(mut maps: impl Iterator<Item = &'a WorldMap>) -> Result<&'a WorldMap> {
    match (maps.next(), maps.next()) {
        (Some(map), None) => Ok(map),
        (None, _) => Err(MapError::Build {
            message: "no maps compiled".to_string(),
            help: None,
        }),
        (Some(_), Some(_)) => Err(MapError::Build {
            message: "source holds several maps".to_string(),
            help: Some("Pick one with --map <id>".to_string()),
        }),
    }
}

/// Query results for a single cell, one `key: value` per line.
fn describe_cell(map: &WorldMap, x: i32, y: i32) -> String {
    let Some(code) = map.tile_at(x, y) else {
        return format!("({}, {}) is outside '{}' ({}x{})", x, y, map.id, map.width(), map.height());
    };

    let edges = map.collision_edges_at(x, y);
    let label = map.tile_definition_at(x, y).map_or("", |t| t.label);
    let groups: Vec<&str> = match (u32::try_from(x), u32::try_from(y)) {
        (Ok(ux), Ok(uy)) => map.encounter_groups_at(ux, uy).map(|g| g.id.as_str()).collect(),
        _ => Vec::new(),
    };

    [
        format!("tile: {} ({})", code, label),
        format!("walkable: {}", map.is_walkable_at(x, y)),
        format!("collision: {:x} {}", edges.bits(), edge_names(edges)),
        format!("encounters: {}", groups.join(", ")),
    ]
    .join("\n")
}

fn edge_names(edges: EdgeMask) -> String {
    let names: Vec<&str> = edges.iter_names().map(|(name, _)| name).collect();
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join("|")
    }
}
