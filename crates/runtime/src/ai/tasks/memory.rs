use behavior_tree::{Behavior, Status};
use game_core::find_path;

use crate::ai::AiContext;
use crate::blackboard::BlackboardKey;

/// Stores the player's current position under [`BlackboardKey::LastTargetPos`].
///
/// Pure bookkeeping: does not consume the turn.
#[derive(Debug, Default)]
pub struct RememberTarget;

impl Behavior<AiContext> for RememberTarget {
    fn tick(&mut self, ctx: &mut AiContext) -> Status {
        let Some(target) = ctx.target_position() else {
            return Status::Failure;
        };
        ctx.blackboard
            .set_position(ctx.entity, BlackboardKey::LastTargetPos, target);
        Status::Success
    }
}

/// Walks toward a position remembered under `key`, one step per turn.
///
/// Arriving clears the memory and succeeds without spending the turn. When no
/// path exists or the step is rejected the memory is cleared as well, so the
/// actor gives up instead of retrying forever.
#[derive(Debug)]
pub struct GotoRemembered {
    key: BlackboardKey,
}

impl GotoRemembered {
    pub fn new(key: BlackboardKey) -> Self {
        Self { key }
    }

    pub fn last_target() -> Self {
        Self::new(BlackboardKey::LastTargetPos)
    }

    pub fn last_mined() -> Self {
        Self::new(BlackboardKey::LastMinedPos)
    }
}

impl Behavior<AiContext> for GotoRemembered {
    fn tick(&mut self, ctx: &mut AiContext) -> Status {
        let Some(goal) = ctx.blackboard.position(ctx.entity, self.key) else {
            return Status::Failure;
        };
        let Some(own) = ctx.position() else {
            return Status::Failure;
        };

        if own == goal {
            ctx.blackboard.clear_key(ctx.entity, self.key);
            return Status::Success;
        }

        let path = find_path(&ctx.world, own, goal, &ctx.path_options());
        if let Some(next) = path.next_step() {
            match ctx.step_to(next) {
                Ok(()) => {
                    ctx.finish_turn();
                    return Status::Success;
                }
                Err(err) => {
                    tracing::debug!(
                        entity = %ctx.entity,
                        %err,
                        severity = err.severity().as_str(),
                        key = %self.key,
                        "goto step rejected"
                    );
                }
            }
        }

        ctx.blackboard.clear_key(ctx.entity, self.key);
        Status::Failure
    }

    fn name(&self) -> &'static str {
        match self.key {
            BlackboardKey::LastTargetPos => "GotoLastTargetPos",
            BlackboardKey::LastMinedPos => "GotoLastMinedPos",
        }
    }
}
