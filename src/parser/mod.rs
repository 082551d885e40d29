//! Map source parsing and compilation.
//!
//! Map sources are YAML or JSON documents describing one or more maps. Each
//! map carries either a `layers` list or a legacy flat `tiles` grid, plus
//! optional warps, encounter groups and camera framing.
//!
//! # Grid encodings
//!
//! All grids are lists of row strings, one character per cell:
//! - `tiles`: tile codes from the catalog (`.` is blank)
//! - `rotations`: `0`-`3`, clockwise quarter turns
//! - `collisionEdges`: hex `0`-`f`, one bit per blocked edge (N=1, E=2, S=4, W=8)
//!
//! Quote digit-only rows in YAML (`- "000"`), otherwise they parse as numbers.
//!
//! # Usage
//!
//! ```ignore
//! use worldmap::parser::{compile_map, parse_map_source, SourceFormat};
//! use worldmap::validation::TracingReporter;
//!
//! let source = std::fs::read_to_string("maps/town.map.yaml")?;
//! for input in parse_map_source(&source, SourceFormat::Yaml)?.maps {
//!     let map = compile_map(&input, &TracingReporter)?;
//!     println!("{}: {}x{}", map.id, map.width(), map.height());
//! }
//! ```

mod camera;
mod document;
mod encounter;
mod identity;
mod layer;
mod legacy;
mod map;
pub mod types;

pub use camera::{sanitize_camera_point, sanitize_camera_size};
pub use document::{parse_map_source, ParsedSource, RejectedMap, SourceFormat};
pub use encounter::{sanitize_encounter_groups, slugify};
pub use identity::LayerIdResolver;
pub use layer::{parse_layer, GridShape};
pub use legacy::normalize_layers;
pub use map::{compile_map, compile_map_with, CompileOptions};
pub use types::{
    CameraPointInput, CameraSizeInput, EncounterGroupInput, LayerInput, MapInput, PositionInput,
    RawLayerId,
};
