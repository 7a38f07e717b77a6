use std::collections::VecDeque;

use behavior_tree::{Behavior, Status};
use game_core::{Position, find_path};

use crate::ai::AiContext;

/// Path computed toward the target, valid while the target stays put.
#[derive(Clone, Debug, PartialEq, Eq)]
struct PathCache {
    /// Target position the path was computed for.
    target: Position,
    /// Remaining steps, next step first. The start cell is not included.
    steps: VecDeque<Position>,
}

/// Follows the player along a cached A* path.
///
/// The path is recomputed when there is none, when the player has moved
/// since it was built, or when the next step is no longer adjacent to the
/// actor. An unreachable player or a rejected step drops the cache and fails
/// so a Selector can fall back to something else.
#[derive(Debug, Default)]
pub struct ChaseTarget {
    cache: Option<PathCache>,
    computations: u32,
}

impl ChaseTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Target position the cached path leads to.
    pub fn cached_target(&self) -> Option<Position> {
        self.cache.as_ref().map(|cache| cache.target)
    }

    /// Remaining cached steps.
    pub fn cached_steps(&self) -> Vec<Position> {
        self.cache
            .as_ref()
            .map(|cache| cache.steps.iter().copied().collect())
            .unwrap_or_default()
    }

    /// How many times a path has been searched for.
    pub fn computations(&self) -> u32 {
        self.computations
    }

    fn is_stale(&self, own: Position, target: Position) -> bool {
        match &self.cache {
            None => true,
            Some(cache) => {
                cache.target != target
                    || cache.steps.front().is_none_or(|next| !own.is_neighbor(*next))
            }
        }
    }
}

impl Behavior<AiContext> for ChaseTarget {
    fn tick(&mut self, ctx: &mut AiContext) -> Status {
        let Some(own) = ctx.position() else {
            tracing::warn!(entity = %ctx.entity, "chase evaluated for missing actor");
            return Status::Failure;
        };
        let Some(target) = ctx.target_position() else {
            self.cache = None;
            return Status::Failure;
        };

        if self.is_stale(own, target) {
            self.computations += 1;
            let path = find_path(&ctx.world, own, target, &ctx.path_options());
            if path.is_empty() {
                tracing::debug!(entity = %ctx.entity, %target, "target unreachable");
                self.cache = None;
                return Status::Failure;
            }

            let mut steps: VecDeque<Position> = path.into_waypoints().into();
            steps.pop_front();
            self.cache = Some(PathCache { target, steps });
        }

        let Some(next) = self.cache.as_ref().and_then(|cache| cache.steps.front().copied()) else {
            self.cache = None;
            return Status::Failure;
        };
        if next == target {
            // Already adjacent; attacking is another task's job.
            self.cache = None;
            return Status::Failure;
        }

        match ctx.step_to(next) {
            Ok(()) => {
                if let Some(cache) = &mut self.cache {
                    cache.steps.pop_front();
                }
                ctx.finish_turn();
                Status::Success
            }
            Err(err) => {
                tracing::debug!(
                    entity = %ctx.entity,
                    %err,
                    severity = err.severity().as_str(),
                    "chase step rejected"
                );
                self.cache = None;
                Status::Failure
            }
        }
    }

    fn reset(&mut self) {
        self.cache = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::testing::{arena, meter};
    use game_core::{ActorState, ActorStats, EntityId};

    fn refill(ctx: &mut AiContext) {
        if let Some(actor) = ctx.actor_mut() {
            actor.action_meter = 100;
        }
    }

    #[test]
    fn steps_toward_target_and_reuses_path() {
        let (mut ctx, _) = arena(&["........"], Position::new(7, 0), Position::new(0, 0));
        let mut chase = ChaseTarget::new();

        assert_eq!(chase.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.position(), Some(Position::new(1, 0)));
        assert_eq!(meter(&ctx), 0);

        refill(&mut ctx);
        assert_eq!(chase.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.position(), Some(Position::new(2, 0)));
        assert_eq!(chase.computations(), 1);
    }

    #[test]
    fn moved_target_forces_recompute() {
        let (mut ctx, _) = arena(
            &["........", "........", "........"],
            Position::new(7, 0),
            Position::new(0, 0),
        );
        let mut chase = ChaseTarget::new();
        chase.tick(&mut ctx);
        assert_eq!(chase.cached_target(), Some(Position::new(7, 0)));

        ctx.world
            .move_actor(EntityId::PLAYER, Position::new(7, 1))
            .unwrap();
        refill(&mut ctx);
        chase.tick(&mut ctx);

        assert_eq!(chase.computations(), 2);
        assert_eq!(chase.cached_target(), Some(Position::new(7, 1)));
        assert_eq!(chase.cached_steps().last(), Some(&Position::new(7, 1)));
    }

    #[test]
    fn blocked_step_drops_cache() {
        let (mut ctx, _) = arena(&["......", "######"], Position::new(5, 0), Position::new(0, 0));
        let mut chase = ChaseTarget::new();
        chase.tick(&mut ctx);
        assert_eq!(ctx.position(), Some(Position::new(1, 0)));

        ctx.world
            .spawn_actor(ActorState::new("bat", Position::new(2, 0), ActorStats::default()))
            .unwrap();
        refill(&mut ctx);

        assert_eq!(chase.tick(&mut ctx), Status::Failure);
        assert!(chase.cached_target().is_none());
        assert_eq!(meter(&ctx), 100);
    }

    #[test]
    fn unreachable_target_fails() {
        let (mut ctx, _) = arena(&["..#.."], Position::new(4, 0), Position::new(0, 0));
        let mut chase = ChaseTarget::new();

        assert_eq!(chase.tick(&mut ctx), Status::Failure);
        assert!(chase.cached_target().is_none());
        assert_eq!(ctx.position(), Some(Position::new(0, 0)));
    }

    #[test]
    fn adjacent_target_is_left_to_attack() {
        let (mut ctx, _) = arena(&["..."], Position::new(1, 0), Position::new(0, 0));
        let mut chase = ChaseTarget::new();

        assert_eq!(chase.tick(&mut ctx), Status::Failure);
        assert_eq!(meter(&ctx), 100);
    }
}
