//! Headless dungeon simulation.
//!
//! Loads a level, gives every monster the brain its scenario names, and runs
//! scheduler rounds while logging each decision.

pub mod config;
pub mod demo;

use anyhow::{Context, Result};
use behavior_tree::Root;
use behavior_tree::builder::{selector, task, tree};
use game_content::{ConfigLoader, MapLoader, ScenarioLoader};
use game_core::{GameConfig, Position, StaticObject, TerrainKind};
use runtime::ai::tasks::{Idle, RandomMove};
use runtime::{AiContext, AiRuntime};

pub use config::SimConfig;

/// Summary of a finished simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimReport {
    pub rounds: u64,
    /// Turns taken by all actors together.
    pub turns: usize,
    pub player_alive: bool,
    /// Names of the actors still standing, in id order.
    pub survivors: Vec<String>,
}

/// Loads everything `config` points at and wires up the AI.
pub fn build_runtime(config: &SimConfig) -> Result<AiRuntime> {
    let game_config = match &config.config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => GameConfig::default(),
    };
    let mut world = match &config.map_path {
        Some(path) => MapLoader::load(path)?,
        None => demo::world()?,
    };
    let scenario = match &config.scenario_path {
        Some(path) => ScenarioLoader::load(path)?,
        None => demo::scenario()?,
    };

    let monsters = scenario.populate(&mut world)?;
    let mut runtime = AiRuntime::builder()
        .config(game_config)
        .world(world)
        .build()?;

    for (entity, ai) in monsters {
        runtime
            .attach_named(entity, &ai)
            .with_context(|| format!("Failed to attach AI to monster {entity}"))?;
    }

    if config.player_wanders {
        if let Some(player) = runtime.world().player_id() {
            runtime.attach_tree(player, wanderer())?;
        }
    }

    tracing::info!(
        actors = runtime.world().actors().count(),
        modeled = runtime.modeled_actors().count(),
        "simulation ready"
    );
    Ok(runtime)
}

/// A stand-in for player input.
pub fn wanderer() -> Root<AiContext> {
    tree(selector(vec![task(RandomMove), task(Idle)]))
}

/// Runs up to `rounds` rounds, stopping early if the player falls.
pub fn run(runtime: &mut AiRuntime, rounds: u32) -> SimReport {
    let had_player = runtime.world().player_id().is_some();
    let mut turns = 0;

    for _ in 0..rounds {
        let outcomes = runtime.round();
        turns += outcomes.len();
        for outcome in &outcomes {
            let name = runtime
                .world()
                .actor(outcome.entity)
                .map_or("?", |actor| actor.name.as_str());
            tracing::info!(
                round = runtime.rounds(),
                entity = %outcome.entity,
                name,
                status = ?outcome.status,
                "turn"
            );
        }

        if had_player && !player_alive(runtime) {
            tracing::info!(round = runtime.rounds(), "the player has fallen");
            break;
        }
    }

    SimReport {
        rounds: runtime.rounds(),
        turns,
        player_alive: player_alive(runtime),
        survivors: runtime
            .world()
            .actors()
            .filter(|actor| actor.is_alive())
            .map(|actor| actor.name.clone())
            .collect(),
    }
}

fn player_alive(runtime: &AiRuntime) -> bool {
    runtime.world().player().is_some_and(|player| player.is_alive())
}

/// Draws the level: `@` for the player, the first letter of each other
/// actor's name, `$` for ground items, then objects and terrain.
pub fn render(runtime: &AiRuntime) -> String {
    let world = runtime.world();
    let dimensions = world.dimensions();
    let mut out = String::new();

    for y in 0..dimensions.height as i32 {
        for x in 0..dimensions.width as i32 {
            let position = Position::new(x, y);
            let glyph = if let Some(actor) = world.occupant(position).and_then(|id| world.actor(id)) {
                if actor.id.is_player() {
                    '@'
                } else {
                    actor.name.chars().next().unwrap_or('m')
                }
            } else if !world.items_at(position).is_empty() {
                '$'
            } else {
                match (world.object(position), world.terrain(position)) {
                    (Some(StaticObject::Rock), _) => '*',
                    (Some(StaticObject::Boulder), _) => '0',
                    (Some(StaticObject::Rubble), _) => ',',
                    (None, Some(TerrainKind::Wall)) => '#',
                    _ => '.',
                }
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}
