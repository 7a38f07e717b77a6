use behavior_tree::{Behavior, Status};
use game_core::{Position, StaticObject};

use crate::ai::AiContext;
use crate::blackboard::BlackboardKey;

fn is_mineable(ctx: &AiContext, cell: Position) -> bool {
    ctx.world
        .object(cell)
        .is_some_and(StaticObject::is_mineable)
}

/// Digs out the rock at `cell`, records it and ends the turn.
fn dig(ctx: &mut AiContext, cell: Position) -> Status {
    if let Err(err) = ctx.world.mine(cell) {
        tracing::debug!(entity = %ctx.entity, %err, "dig failed");
        return Status::Failure;
    }
    tracing::debug!(entity = %ctx.entity, %cell, "mined");
    ctx.blackboard
        .set_position(ctx.entity, BlackboardKey::LastMinedPos, cell);
    ctx.finish_turn();
    Status::Success
}

/// Digs a random orthogonally adjacent rock.
#[derive(Debug, Default)]
pub struct MineBlock;

impl Behavior<AiContext> for MineBlock {
    fn tick(&mut self, ctx: &mut AiContext) -> Status {
        let Some(own) = ctx.position() else {
            return Status::Failure;
        };

        let candidates: Vec<Position> = own
            .orthogonal_neighbors()
            .filter(|cell| is_mineable(ctx, *cell))
            .collect();
        let Some(&cell) = ctx.choose(&candidates) else {
            return Status::Failure;
        };

        dig(ctx, cell)
    }
}

/// Extends a dead-end tunnel.
///
/// Applies only when three orthogonal neighbors are blocked. The rock
/// straight across from the open side is dug out.
///
/// ```text
///  ##
///  .@*   <- dug
///  ##
/// ```
#[derive(Debug, Default)]
pub struct MineTunnel;

impl Behavior<AiContext> for MineTunnel {
    fn tick(&mut self, ctx: &mut AiContext) -> Status {
        let Some(own) = ctx.position() else {
            return Status::Failure;
        };
        if ctx.world.count_orthogonal_obstacles(own) < 3 {
            return Status::Failure;
        }

        let Some(open) = own
            .orthogonal_neighbors()
            .find(|cell| !ctx.world.is_obstacle(*cell))
        else {
            return Status::Failure;
        };

        let facing = own.offset(own.x - open.x, own.y - open.y);
        if !is_mineable(ctx, facing) {
            return Status::Failure;
        }

        dig(ctx, facing)
    }
}
