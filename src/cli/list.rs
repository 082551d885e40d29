//! List command implementation.
//!
//! Compiles discovered maps and prints an inventory.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::WorldMap;

use super::{compile_sources, print_compile_report};

/// List compiled maps
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Files or directories to scan (default: current project)
    pub files: Vec<PathBuf>,

    /// Show each map's layers
    #[arg(long)]
    pub layers: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let compiled = compile_sources(&args.files, false, printer)?;
    print_compile_report(&compiled, printer);

    for map in compiled.build.registry.maps() {
        printer.info(&map.id, &summary(map));

        if args.layers {
            for layer in map.layers() {
                let mut flags = Vec::new();
                if !layer.visible {
                    flags.push("hidden");
                }
                if layer.collision {
                    flags.push("collision");
                }
                printer.info(
                    "",
                    &format!(
                        "{} {} {}",
                        layer.id,
                        layer.name,
                        printer.dim(&flags.join(", "))
                    ),
                );
            }
        }
    }

    Ok(())
}

fn summary(map: &WorldMap) -> String {
    let mut parts = vec![
        format!("{}x{}", map.width(), map.height()),
        plural(map.layers().len(), "layer", "layers"),
    ];
    if !map.warps().is_empty() {
        parts.push(plural(map.warps().len(), "warp", "warps"));
    }
    if !map.encounter_groups().is_empty() {
        parts.push(plural(
            map.encounter_groups().len(),
            "encounter group",
            "encounter groups",
        ));
    }

    format!("{} ({})", map.name, parts.join(", "))
}
