//! Built-in level used when no map or scenario is configured.

use game_content::{LoadResult, ScenarioLoader, ScenarioSpec};
use game_core::WorldState;

pub const DEMO_MAP: [&str; 9] = [
    "####################",
    "#..................#",
    "#..***.....#####...#",
    "#..*.......#...#...#",
    "#..***.........#...#",
    "#..........#####...#",
    "#.....0............#",
    "#..................#",
    "####################",
];

pub const DEMO_SCENARIO: &str = r#"(
    player: Some((
        name: "hero",
        position: (x: 13, y: 3),
        stats: (level: 3, skill: 3, strength: 3, defense: 1, speed: 0),
        hp: 30,
    )),
    monsters: [
        (
            actor: (name: "goblin", position: (x: 2, y: 7), hp: 6),
            ai: "basic",
        ),
        (
            actor: (name: "orc", position: (x: 17, y: 1), stats: (level: 2, skill: 2, strength: 2, defense: 1, speed: 0), hp: 12),
            ai: "smart",
        ),
        (
            actor: (
                name: "kobold",
                position: (x: 8, y: 6),
                hp: 8,
                inventory: [
                    (kind: HealingPotion, amount: 1, stackable: false, identified: true, potency: 5),
                ],
            ),
            ai: "coward",
        ),
        (
            actor: (name: "dwarf", position: (x: 4, y: 3), stats: (level: 2, skill: 2, strength: 2, defense: 2, speed: -1), hp: 14),
            ai: "miner",
        ),
        (
            actor: (name: "sentry", position: (x: 10, y: 4), hp: 10),
            ai: "guard",
        ),
    ],
    items: [
        (position: (x: 6, y: 3), item: (kind: Coins, amount: 25, stackable: true, identified: true, potency: 0)),
        (position: (x: 7, y: 7), item: (kind: Gem, amount: 1, stackable: false, identified: true, potency: 50)),
    ],
)"#;

pub fn world() -> LoadResult<WorldState> {
    WorldState::from_rows(&DEMO_MAP).map_err(|e| anyhow::anyhow!("Demo map is invalid: {}", e))
}

pub fn scenario() -> LoadResult<ScenarioSpec> {
    ScenarioLoader::parse(DEMO_SCENARIO)
}
