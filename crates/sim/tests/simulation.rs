use std::fs;
use std::path::Path;

use dungeon_sim::{SimConfig, build_runtime, render, run};

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn demo_level_builds() {
    let runtime = build_runtime(&SimConfig::default()).unwrap();

    assert_eq!(runtime.world().actors().count(), 6);
    assert_eq!(runtime.modeled_actors().count(), 6);
    assert!(render(&runtime).contains('@'));
}

#[test]
fn demo_runs_are_reproducible() {
    let config = SimConfig {
        turns: 15,
        ..SimConfig::default()
    };

    let mut first = build_runtime(&config).unwrap();
    let mut second = build_runtime(&config).unwrap();
    let first_report = run(&mut first, config.turns);
    let second_report = run(&mut second, config.turns);

    assert_eq!(first_report, second_report);
    assert_eq!(render(&first), render(&second));
    assert!(first_report.turns > 0);
}

#[test]
fn level_loads_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write(dir.path(), "game.toml", "aggro_range = 6\nrng_seed = 5\n");
    let map_path = write(
        dir.path(),
        "map.ron",
        "(rows: [\"########\", \"#......#\", \"########\"])",
    );
    let scenario_path = write(
        dir.path(),
        "scenario.ron",
        r#"(
            player: Some((name: "hero", position: (x: 1, y: 1), hp: 20)),
            monsters: [
                (actor: (name: "rat", position: (x: 6, y: 1), hp: 3), ai: "basic"),
            ],
        )"#,
    );

    let config = SimConfig {
        config_path: Some(config_path),
        map_path: Some(map_path),
        scenario_path: Some(scenario_path),
        turns: 10,
        player_wanders: false,
    };
    let mut runtime = build_runtime(&config).unwrap();
    assert_eq!(runtime.config().aggro_range, 6);
    assert_eq!(runtime.modeled_actors().count(), 1);

    let report = run(&mut runtime, config.turns);
    assert_eq!(report.rounds, 10);
    assert_eq!(report.turns, 10);
    assert!(report.player_alive);
    assert_eq!(render(&runtime).lines().nth(1), Some("#@r....#"));
}

#[test]
fn unknown_ai_kind_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let scenario_path = write(
        dir.path(),
        "scenario.ron",
        r#"(monsters: [(actor: (name: "wyrm", position: (x: 1, y: 1), hp: 50), ai: "dragon")])"#,
    );

    let config = SimConfig {
        scenario_path: Some(scenario_path),
        ..SimConfig::default()
    };
    let err = build_runtime(&config).unwrap_err();
    assert!(format!("{err:#}").contains("dragon"));
}
