//! Fixtures shared by the task and condition tests.

use game_core::{ActorState, ActorStats, EntityId, GameConfig, Position, WorldState};

use crate::ai::AiContext;

/// Builds a context over `rows` with the player and one monster, focused on
/// the monster, which holds exactly one turn of energy.
pub(crate) fn arena(rows: &[&str], player: Position, monster: Position) -> (AiContext, EntityId) {
    let mut world = WorldState::from_rows(rows).unwrap();
    world
        .spawn_player(ActorState::new("hero", player, ActorStats::default()))
        .unwrap();
    let id = world.spawn_actor(monster_at(monster)).unwrap();

    let mut ctx = AiContext::new(world, GameConfig::default());
    ctx.focus(id);
    (ctx, id)
}

/// Like [`arena`] but without a player.
pub(crate) fn solo(rows: &[&str], monster: Position) -> (AiContext, EntityId) {
    let mut world = WorldState::from_rows(rows).unwrap();
    let id = world.spawn_actor(monster_at(monster)).unwrap();

    let mut ctx = AiContext::new(world, GameConfig::default());
    ctx.focus(id);
    (ctx, id)
}

pub(crate) fn monster_at(position: Position) -> ActorState {
    ActorState::new("orc", position, ActorStats::default())
        .with_action_meter(GameConfig::DEFAULT_TURN_READY_VALUE)
}

pub(crate) fn meter(ctx: &AiContext) -> u32 {
    ctx.actor().map_or(0, |actor| actor.action_meter)
}
