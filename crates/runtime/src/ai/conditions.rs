//! Predicates for Condition nodes.
//!
//! Predicates read the world and the Blackboard but never change them, apart
//! from drawing from the RNG stream for [`chance`].

use behavior_tree::{Predicate, Status};
use game_core::MapView;

use crate::ai::AiContext;
use crate::blackboard::BlackboardKey;

/// Player within a square of radius `range` (Chebyshev distance).
pub fn player_in_range(range: u32) -> Predicate<AiContext> {
    Box::new(move |ctx: &mut AiContext| {
        let (Some(own), Some(target)) = (ctx.position(), ctx.target_position()) else {
            return Status::Failure;
        };
        Status::from_bool(own.in_range(target, range))
    })
}

/// Unobstructed line of sight to the player.
pub fn player_visible() -> Predicate<AiContext> {
    Box::new(|ctx: &mut AiContext| {
        let (Some(own), Some(target)) = (ctx.position(), ctx.target_position()) else {
            return Status::Failure;
        };
        Status::from_bool(ctx.world.line_of_sight(own, target))
    })
}

/// HP strictly below `percent` of maximum.
pub fn hp_low(percent: u32) -> Predicate<AiContext> {
    Box::new(move |ctx: &mut AiContext| match ctx.actor() {
        Some(actor) => Status::from_bool(actor.hp.percent() < percent),
        None => {
            tracing::warn!(entity = %ctx.entity, "hp_low evaluated for missing actor");
            Status::Failure
        }
    })
}

/// Succeeds when a d100 roll lands at or under `percent`.
pub fn chance(percent: u32) -> Predicate<AiContext> {
    Box::new(move |ctx: &mut AiContext| Status::from_bool(ctx.roll_d100() <= percent))
}

/// The actor has a value stored under `key`.
pub fn remembers(key: BlackboardKey) -> Predicate<AiContext> {
    Box::new(move |ctx: &mut AiContext| {
        Status::from_bool(ctx.blackboard.contains(ctx.entity, key))
    })
}
