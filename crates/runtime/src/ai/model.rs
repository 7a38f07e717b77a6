//! Per-actor brain.

use behavior_tree::{Root, Status};
use game_core::EntityId;

use crate::ai::AiContext;

/// One behavior tree bound to the actor it controls.
///
/// The model stores the actor's id only; the actor itself lives in the
/// world and is looked up through the context on every update, so a model
/// outliving its actor simply stops doing anything.
pub struct AiModel {
    entity: EntityId,
    root: Root<AiContext>,
}

impl AiModel {
    pub fn new(entity: EntityId, root: Root<AiContext>) -> Self {
        Self { entity, root }
    }

    pub fn entity(&self) -> EntityId {
        self.entity
    }

    pub fn root(&self) -> &Root<AiContext> {
        &self.root
    }

    /// Gives the actor its turn if it has one.
    ///
    /// Returns `None` when the actor is missing or not ready, otherwise the
    /// result of the single tree evaluation. A Failure resets the tree. If
    /// nothing in the tree consumed the turn the model consumes it, so the
    /// scheduler always makes progress. Exactly one turn is spent either way.
    pub fn update(&mut self, ctx: &mut AiContext) -> Option<Status> {
        ctx.focus(self.entity);

        let Some(actor) = ctx.actor() else {
            tracing::warn!(entity = %self.entity, "model has no actor to control");
            return None;
        };
        if !actor.can_act(ctx.config.turn_ready_value) {
            return None;
        }
        let meter = actor.action_meter;

        let status = self.root.run(ctx);
        tracing::debug!(entity = %self.entity, ?status, "tree evaluated");

        if status == Status::Failure {
            self.root.reset();
        }

        if ctx.actor().is_some_and(|actor| actor.action_meter == meter) {
            tracing::debug!(entity = %self.entity, ?status, "turn not consumed, idling");
            ctx.finish_turn();
        }

        Some(status)
    }
}

impl std::fmt::Debug for AiModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiModel")
            .field("entity", &self.entity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use behavior_tree::Behavior;
    use behavior_tree::builder::{failure, selector, sequence, task, tree};

    use crate::ai::tasks::Idle;
    use crate::ai::testing::{meter, solo};
    use game_core::Position;

    /// Counts setup hooks; never consumes the turn.
    #[derive(Default)]
    struct Probe {
        setups: Rc<Cell<u32>>,
    }

    impl Behavior<AiContext> for Probe {
        fn first_run(&mut self, _ctx: &mut AiContext) {
            self.setups.set(self.setups.get() + 1);
        }

        fn tick(&mut self, _ctx: &mut AiContext) -> Status {
            Status::Success
        }
    }

    #[test]
    fn not_ready_actor_is_skipped() {
        let (mut ctx, id) = solo(&["..."], Position::new(1, 0));
        if let Some(actor) = ctx.actor_mut() {
            actor.action_meter = 40;
        }

        let mut model = AiModel::new(id, tree(task(Idle)));
        assert_eq!(model.update(&mut ctx), None);
        assert_eq!(meter(&ctx), 40);
    }

    #[test]
    fn ready_actor_runs_tree_once() {
        let (mut ctx, id) = solo(&["..."], Position::new(1, 0));

        let mut model = AiModel::new(id, tree(task(Idle)));
        assert_eq!(model.update(&mut ctx), Some(Status::Success));
        assert_eq!(meter(&ctx), 0);
    }

    #[test]
    fn banked_energy_pays_for_one_turn_per_update() {
        let (mut ctx, id) = solo(&["..."], Position::new(1, 0));
        if let Some(actor) = ctx.actor_mut() {
            actor.action_meter = 250;
        }

        let mut model = AiModel::new(id, tree(task(Idle)));
        assert_eq!(model.update(&mut ctx), Some(Status::Success));
        assert_eq!(meter(&ctx), 150);

        let mut model = AiModel::new(id, tree(task(Probe::default())));
        assert_eq!(model.update(&mut ctx), Some(Status::Success));
        assert_eq!(meter(&ctx), 50);
    }

    #[test]
    fn unconsumed_turn_is_forced() {
        let (mut ctx, id) = solo(&["..."], Position::new(1, 0));

        let mut model = AiModel::new(id, tree(task(Probe::default())));
        assert_eq!(model.update(&mut ctx), Some(Status::Success));
        assert_eq!(meter(&ctx), 0);
    }

    #[test]
    fn failure_resets_tree() {
        let (mut ctx, id) = solo(&["..."], Position::new(1, 0));
        let setups = Rc::new(Cell::new(0));
        let probe = Probe {
            setups: setups.clone(),
        };

        let mut model = AiModel::new(id, tree(sequence(vec![task(probe), failure()])));
        assert_eq!(model.update(&mut ctx), Some(Status::Failure));
        assert_eq!(setups.get(), 1);

        if let Some(actor) = ctx.actor_mut() {
            actor.action_meter = 100;
        }
        model.update(&mut ctx);
        assert_eq!(setups.get(), 2);
    }

    #[test]
    fn success_keeps_setup_state() {
        let (mut ctx, id) = solo(&["..."], Position::new(1, 0));
        let setups = Rc::new(Cell::new(0));
        let probe = Probe {
            setups: setups.clone(),
        };

        let mut model = AiModel::new(id, tree(selector(vec![task(probe)])));
        for _ in 0..3 {
            if let Some(actor) = ctx.actor_mut() {
                actor.action_meter = 100;
            }
            model.update(&mut ctx);
        }
        assert_eq!(setups.get(), 1);
    }

    #[test]
    fn missing_actor_is_ignored() {
        let (mut ctx, _) = solo(&["..."], Position::new(1, 0));

        let mut model = AiModel::new(EntityId(99), tree(task(Idle)));
        assert_eq!(model.update(&mut ctx), None);
    }
}
