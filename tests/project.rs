//! Discovery, registry and cross-map checks over the fixture project.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use worldmap::discovery::{discover, discover_paths};
use worldmap::registry::RegistryBuild;
use worldmap::validation::{validate_registry, CollectingReporter};
use worldmap::{Direction, EncounterMode};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn build_fixtures(reporter: &CollectingReporter) -> RegistryBuild {
    discover_paths(&[fixtures_dir()])
        .unwrap()
        .into_builder()
        .unwrap()
        .build(reporter)
}

#[test]
fn test_fixture_project_compiles_cleanly() {
    let reporter = CollectingReporter::new();
    let build = build_fixtures(&reporter);

    assert!(build.is_complete(), "failures: {:?}", build.failures);
    assert!(reporter.is_empty(), "warnings: {:?}", reporter.warnings());

    let ids: Vec<&str> = build.registry.ids().collect();
    assert_eq!(ids, vec!["home", "pallet", "route-1"]);

    let result = validate_registry(&build.registry);
    assert!(result.is_ok(), "diagnostics: {:?}", result.iter().collect::<Vec<_>>());
}

#[test]
fn test_pallet_queries() {
    let reporter = CollectingReporter::new();
    let build = build_fixtures(&reporter);
    let pallet = build.registry.get("pallet").unwrap();

    assert_eq!(pallet.size(), (10, 8));
    assert_eq!(pallet.name, "Pallet Town");
    assert_eq!(pallet.layers().len(), 4);

    // ledge from the decoration layer sits over grass
    assert_eq!(pallet.tile_at(8, 5), Some('L'));
    assert_eq!(pallet.tile_at(7, 5), Some('F'));

    // west edge on the exit path
    assert_eq!(pallet.collision_edge_mask_at(4, 7), 0x8);
    assert!(pallet.is_step_blocked(5, 7, Direction::West));
    assert!(!pallet.is_step_blocked(4, 6, Direction::South));

    let grass: Vec<_> = pallet.encounter_groups_at(2, 6).collect();
    assert_eq!(grass.len(), 1);
    assert_eq!(grass[0].id, "tall-grass");
    assert_eq!(
        grass[0].table_for(EncounterMode::Walk),
        Some(("pallet-grass", 0.12))
    );
    assert_eq!(grass[0].table_for(EncounterMode::Fish), None);

    assert_eq!(pallet.npcs().len(), 1);
    assert_eq!(pallet.npcs()[0]["script"], "greet");
}

#[test]
fn test_broken_map_does_not_block_others() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("world.map.yaml"),
        r#"
- id: ok
  tiles: ["GG"]
- id: ragged
  layers:
    - { id: base, tiles: ["GG", "G"] }
- id: ok
  tiles: ["WW"]
"#,
    )
    .unwrap();

    let reporter = CollectingReporter::new();
    let build = discover(dir.path())
        .unwrap()
        .into_builder()
        .unwrap()
        .build(&reporter);

    assert_eq!(build.registry.len(), 1);
    assert_eq!(build.registry.get("ok").unwrap().tile_rows(), vec!["GG"]);

    let failed: Vec<&str> = build.failures.iter().map(|f| f.map_id.as_str()).collect();
    assert_eq!(failed, vec!["ragged", "ok"]);
    assert!(build.failures.iter().all(|f| f.error.is_structural()));
}

#[test]
fn test_manifest_strict_mode() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("worldmap.yaml"), "strict_layer_ids: true\n").unwrap();
    fs::write(
        dir.path().join("roof.map.yaml"),
        "id: roof\nlayers:\n  - { id: base, tiles: [G] }\n  - { id: roof, tiles: [H] }\n",
    )
    .unwrap();

    let reporter = CollectingReporter::new();
    let build = discover(dir.path())
        .unwrap()
        .into_builder()
        .unwrap()
        .build(&reporter);

    assert!(build.registry.is_empty());
    assert_eq!(build.failures.len(), 1);
}
