use behavior_tree::{Behavior, Status};

use crate::ai::AiContext;

/// Wanders to a random free neighboring cell.
#[derive(Debug, Default)]
pub struct RandomMove;

impl Behavior<AiContext> for RandomMove {
    fn tick(&mut self, ctx: &mut AiContext) -> Status {
        let Some(own) = ctx.position() else {
            return Status::Failure;
        };

        let cells = ctx.world.walkable_neighbors(own);
        let Some(&to) = ctx.choose(&cells) else {
            return Status::Failure;
        };

        match ctx.step_to(to) {
            Ok(()) => {
                ctx.finish_turn();
                Status::Success
            }
            Err(err) => {
                tracing::debug!(entity = %ctx.entity, %err, "wander step rejected");
                Status::Failure
            }
        }
    }
}

/// Steps to the free neighbor farthest from the player.
///
/// Fails unless some neighbor is strictly farther (block distance) than the
/// current cell, so a cornered actor does not shuffle in place.
#[derive(Debug, Default)]
pub struct MoveAway;

impl Behavior<AiContext> for MoveAway {
    fn tick(&mut self, ctx: &mut AiContext) -> Status {
        let (Some(own), Some(threat)) = (ctx.position(), ctx.target_position()) else {
            return Status::Failure;
        };

        let mut best_distance = own.block_distance(threat);
        let mut best = None;
        for cell in ctx.world.walkable_neighbors(own) {
            let distance = cell.block_distance(threat);
            if distance > best_distance {
                best_distance = distance;
                best = Some(cell);
            }
        }

        let Some(to) = best else {
            return Status::Failure;
        };

        match ctx.step_to(to) {
            Ok(()) => {
                ctx.finish_turn();
                Status::Success
            }
            Err(err) => {
                tracing::debug!(entity = %ctx.entity, %err, "retreat step rejected");
                Status::Failure
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::testing::{arena, meter, solo};
    use game_core::Position;

    #[test]
    fn wander_moves_one_step() {
        let (mut ctx, _) = solo(&["...", "...", "..."], Position::new(1, 1));

        assert_eq!(RandomMove.tick(&mut ctx), Status::Success);
        let now = ctx.position().unwrap();
        assert!(now.is_neighbor(Position::new(1, 1)));
        assert_eq!(meter(&ctx), 0);
    }

    #[test]
    fn boxed_in_wanderer_fails() {
        let (mut ctx, _) = solo(&["###", "#.#", "###"], Position::new(1, 1));
        assert_eq!(RandomMove.tick(&mut ctx), Status::Failure);
        assert_eq!(meter(&ctx), 100);
    }

    #[test]
    fn retreat_increases_distance() {
        let (mut ctx, _) = arena(&[".....", ".....", "....."], Position::new(0, 1), Position::new(2, 1));

        assert_eq!(MoveAway.tick(&mut ctx), Status::Success);
        let now = ctx.position().unwrap();
        assert!(now.block_distance(Position::new(0, 1)) > 2);
    }

    #[test]
    fn cornered_retreat_fails() {
        let (mut ctx, _) = arena(&["#####", "#...#", "#####"], Position::new(1, 1), Position::new(3, 1));

        assert_eq!(MoveAway.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.position(), Some(Position::new(3, 1)));
    }
}
