//! Map registry.
//!
//! The registry owns every compiled map and hands out shared references.
//! It is immutable after construction - use `RegistryBuilder` to compile a
//! set of map inputs into one. Maps compile independently: a structural
//! failure removes that map and is recorded, the rest still load.
//!
//! # Example
//!
//! ```ignore
//! use worldmap::registry::RegistryBuilder;
//! use worldmap::validation::TracingReporter;
//!
//! let mut builder = RegistryBuilder::new();
//! builder.add_inputs(inputs);
//!
//! let build = builder.build(&TracingReporter);
//! for failure in &build.failures {
//!     eprintln!("{}", failure.error);
//! }
//! let town = build.registry.get("town");
//! ```

use std::collections::BTreeMap;

use crate::error::MapError;
use crate::parser::{compile_map_with, CompileOptions, MapInput};
use crate::types::WorldMap;
use crate::validation::WarningReporter;

/// Compiled maps keyed by id.
#[derive(Debug, Default)]
pub struct MapRegistry {
    maps: BTreeMap<String, WorldMap>,
}

impl MapRegistry {
    /// Get a map by id.
    pub fn get(&self, id: &str) -> Option<&WorldMap> {
        self.maps.get(id)
    }

    /// Check if a map id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.maps.contains_key(id)
    }

    /// Map ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.maps.keys().map(|s| s.as_str())
    }

    /// Maps in id order.
    pub fn maps(&self) -> impl Iterator<Item = &WorldMap> {
        self.maps.values()
    }

    /// Get the total number of maps.
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

/// A map that failed to compile.
#[derive(Debug)]
pub struct MapFailure {
    pub map_id: String,
    pub error: MapError,
}

/// Outcome of building a registry.
#[derive(Debug)]
pub struct RegistryBuild {
    pub registry: MapRegistry,
    pub failures: Vec<MapFailure>,
}

impl RegistryBuild {
    /// Whether every input compiled.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Builder for constructing a MapRegistry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    inputs: Vec<MapInput>,
    rejected: Vec<MapFailure>,
    options: CompileOptions,
}

impl RegistryBuilder {
    /// Create a new registry builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set compile options for every map.
    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    /// Add a map input.
    pub fn add_input(&mut self, input: MapInput) -> &mut Self {
        self.inputs.push(input);
        self
    }

    /// Add multiple map inputs.
    pub fn add_inputs(&mut self, inputs: impl IntoIterator<Item = MapInput>) -> &mut Self {
        self.inputs.extend(inputs);
        self
    }

    /// Record a map that failed before it could be compiled.
    pub fn add_failure(&mut self, failure: MapFailure) -> &mut Self {
        self.rejected.push(failure);
        self
    }

    /// Number of inputs queued.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Compile every input. Later inputs reusing an id are rejected.
    pub fn build(self, reporter: &dyn WarningReporter) -> RegistryBuild {
        let mut maps = BTreeMap::new();
        let mut failures = self.rejected;

        for input in &self.inputs {
            let map_id = input.id.trim().to_string();

            if maps.contains_key(&map_id) {
                failures.push(MapFailure {
                    error: MapError::structural(&map_id, "map id is defined more than once")
                        .with_help("Map ids must be unique across all sources"),
                    map_id,
                });
                continue;
            }

            match compile_map_with(input, reporter, &self.options) {
                Ok(map) => {
                    maps.insert(map.id.clone(), map);
                }
                Err(error) => {
                    tracing::debug!(map_id = %map_id, %error, "map failed to compile");
                    failures.push(MapFailure { map_id, error });
                }
            }
        }

        RegistryBuild {
            registry: MapRegistry { maps },
            failures,
        }
    }
}
