use behavior_tree::{Behavior, Status};

use crate::ai::AiContext;

/// Waits out the turn.
///
/// Below the turn-ready threshold there is nothing to spend, so the task
/// reports `Running` and leaves the meter alone. Otherwise it consumes the
/// turn and succeeds.
#[derive(Debug, Default)]
pub struct Idle;

impl Behavior<AiContext> for Idle {
    fn tick(&mut self, ctx: &mut AiContext) -> Status {
        if !ctx.is_ready() {
            return Status::Running;
        }
        ctx.finish_turn();
        Status::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::testing::{meter, solo};
    use game_core::Position;

    #[test]
    fn idle_consumes_a_ready_turn() {
        let (mut ctx, _) = solo(&["..."], Position::new(1, 0));

        assert_eq!(Idle.tick(&mut ctx), Status::Success);
        assert_eq!(meter(&ctx), 0);
    }

    #[test]
    fn idle_waits_when_not_ready() {
        let (mut ctx, _) = solo(&["..."], Position::new(1, 0));
        ctx.finish_turn();

        assert_eq!(Idle.tick(&mut ctx), Status::Running);
        assert_eq!(meter(&ctx), 0);
    }
}
