//! Scenario loader.
//!
//! A scenario places the player, the monsters (each tagged with the name of
//! the AI it runs) and any loose items onto a loaded map.

use std::path::Path;

use game_core::{ActorState, ActorStats, EntityId, ItemState, Position, ResourceMeter, WorldState};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One actor as written in a scenario file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorSpec {
    pub name: String,
    pub position: Position,
    #[serde(default)]
    pub stats: ActorStats,
    pub hp: u32,
    #[serde(default)]
    pub mp: u32,
    #[serde(default)]
    pub inventory: Vec<ItemState>,
    #[serde(default)]
    pub money: u32,
}

impl ActorSpec {
    pub fn build(&self) -> LoadResult<ActorState> {
        let mut actor = ActorState::new(self.name.clone(), self.position, self.stats)
            .with_hp(ResourceMeter::full(self.hp))
            .with_mp(ResourceMeter::full(self.mp));
        actor.money = self.money;

        for item in &self.inventory {
            actor.inventory.add(item.clone()).map_err(|_| {
                anyhow::anyhow!("Inventory of '{}' cannot hold all listed items", self.name)
            })?;
        }
        Ok(actor)
    }
}

/// A monster plus the name of the AI preset that drives it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterSpec {
    pub actor: ActorSpec,
    pub ai: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundItemSpec {
    pub position: Position,
    pub item: ItemState,
}

/// Scenario file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioSpec {
    #[serde(default)]
    pub player: Option<ActorSpec>,
    #[serde(default)]
    pub monsters: Vec<MonsterSpec>,
    #[serde(default)]
    pub items: Vec<GroundItemSpec>,
}

impl ScenarioSpec {
    /// Spawns everything into `world`.
    ///
    /// Returns each spawned monster's id with its AI name, in spawn order.
    pub fn populate(&self, world: &mut WorldState) -> LoadResult<Vec<(EntityId, String)>> {
        if let Some(player) = &self.player {
            world
                .spawn_player(player.build()?)
                .map_err(|e| anyhow::anyhow!("Failed to place player '{}': {}", player.name, e))?;
        }

        let mut spawned = Vec::with_capacity(self.monsters.len());
        for monster in &self.monsters {
            let id = world.spawn_actor(monster.actor.build()?).map_err(|e| {
                anyhow::anyhow!("Failed to place monster '{}': {}", monster.actor.name, e)
            })?;
            tracing::debug!(%id, name = %monster.actor.name, ai = %monster.ai, "monster spawned");
            spawned.push((id, monster.ai.clone()));
        }

        for ground in &self.items {
            world
                .drop_item(ground.position, ground.item.clone())
                .map_err(|e| anyhow::anyhow!("Failed to place item: {}", e))?;
        }

        Ok(spawned)
    }
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<ScenarioSpec> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ScenarioSpec> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SCENARIO: &str = r#"(
        player: Some((
            name: "hero",
            position: (x: 1, y: 1),
            hp: 30,
        )),
        monsters: [
            (
                actor: (
                    name: "kobold",
                    position: (x: 3, y: 1),
                    stats: (level: 1, skill: 2, strength: 3, defense: 0, speed: 0),
                    hp: 8,
                    inventory: [
                        (kind: HealingPotion, amount: 1, stackable: false, identified: true, potency: 5),
                    ],
                ),
                ai: "coward",
            ),
        ],
        items: [
            (position: (x: 2, y: 1), item: (kind: Coins, amount: 12, stackable: true, identified: true, potency: 0)),
        ],
    )"#;

    #[test]
    fn scenario_populates_world() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{SCENARIO}").unwrap();

        let spec = ScenarioLoader::load(file.path()).unwrap();
        let mut world = WorldState::from_rows(&["#####", "#...#", "#####"]).unwrap();
        let spawned = spec.populate(&mut world).unwrap();

        assert_eq!(spawned.len(), 1);
        assert_eq!(spawned[0].1, "coward");
        assert_eq!(world.player().unwrap().name, "hero");

        let kobold = world.actor(spawned[0].0).unwrap();
        assert_eq!(kobold.stats.strength, 3);
        assert_eq!(kobold.hp, ResourceMeter::full(8));
        assert_eq!(kobold.inventory.len(), 1);
        assert_eq!(world.items_at(Position::new(2, 1)), &[ItemState::coins(12)]);
    }

    #[test]
    fn monster_in_wall_is_reported() {
        let spec = ScenarioLoader::parse(
            r#"(monsters: [(actor: (name: "rat", position: (x: 0, y: 0), hp: 3), ai: "basic")])"#,
        )
        .unwrap();
        let mut world = WorldState::from_rows(&["#.."]).unwrap();

        let err = spec.populate(&mut world).unwrap_err();
        assert!(err.to_string().contains("rat"));
    }
}
