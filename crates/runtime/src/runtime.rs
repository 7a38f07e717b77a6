//! Turn driver.
//!
//! [`AiRuntime`] owns the shared [`AiContext`] and one [`AiModel`] per
//! controlled actor. A round grants energy to every modeled actor and then
//! lets each one act, lowest id first, for as long as its meter allows.

use std::collections::BTreeMap;

use behavior_tree::{Root, Status};
use game_core::{ActorState, EntityId, GameConfig, WorldState};

use crate::ai::{AiContext, AiKind, AiModel};
use crate::blackboard::Blackboard;
use crate::error::{Result, RuntimeError};

/// What happened to one actor during a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub entity: EntityId,
    pub status: Status,
}

pub struct AiRuntime {
    models: BTreeMap<EntityId, AiModel>,
    ctx: AiContext,
    rounds: u64,
}

impl AiRuntime {
    pub fn new(world: WorldState, config: GameConfig) -> Self {
        Self {
            models: BTreeMap::new(),
            ctx: AiContext::new(world, config),
            rounds: 0,
        }
    }

    /// Create a new runtime builder
    pub fn builder() -> AiRuntimeBuilder {
        AiRuntimeBuilder::default()
    }

    /// Gives `entity` a preset brain, replacing any previous one.
    pub fn attach(&mut self, entity: EntityId, kind: AiKind) -> Result<()> {
        let root = kind.build(&self.ctx.config);
        self.attach_tree(entity, root)?;
        tracing::info!(%entity, %kind, "attached AI");
        Ok(())
    }

    /// Like [`AiRuntime::attach`] with the kind given by name, as it appears
    /// in scenario files.
    pub fn attach_named(&mut self, entity: EntityId, kind: &str) -> Result<()> {
        let kind = kind
            .parse::<AiKind>()
            .map_err(|_| RuntimeError::UnknownAiKind(kind.to_string()))?;
        self.attach(entity, kind)
    }

    /// Gives `entity` a custom tree, replacing any previous brain.
    pub fn attach_tree(&mut self, entity: EntityId, root: Root<AiContext>) -> Result<()> {
        if self.ctx.world.actor(entity).is_none() {
            return Err(RuntimeError::UnknownActor(entity));
        }
        self.models.insert(entity, AiModel::new(entity, root));
        Ok(())
    }

    pub fn detach(&mut self, entity: EntityId) -> Option<AiModel> {
        self.models.remove(&entity)
    }

    /// Gives one actor its turn if it is ready.
    ///
    /// `Ok(None)` means the actor was not ready.
    pub fn update(&mut self, entity: EntityId) -> Result<Option<Status>> {
        let Some(model) = self.models.get_mut(&entity) else {
            tracing::warn!(%entity, "update requested for actor without AI");
            return Err(RuntimeError::UnknownActor(entity));
        };
        Ok(model.update(&mut self.ctx))
    }

    /// Runs one scheduler round.
    ///
    /// Every modeled actor gains energy, then in id order each actor takes
    /// turns until its meter drops below the ready threshold, so fast actors
    /// act several times per round. Actors killed earlier in the round are
    /// dropped along with their models and memory before they would act.
    pub fn round(&mut self) -> Vec<TurnOutcome> {
        self.rounds += 1;
        let tick = self.ctx.config.turn_tick_value;
        for entity in self.models.keys() {
            if let Some(actor) = self.ctx.world.actor_mut(*entity) {
                actor.gain_energy(tick);
            }
        }

        let order: Vec<EntityId> = self.models.keys().copied().collect();
        let mut outcomes = Vec::new();
        for entity in order {
            if !self.ctx.world.actor(entity).is_some_and(ActorState::is_alive) {
                self.remove_actor(entity);
                continue;
            }
            let Some(model) = self.models.get_mut(&entity) else {
                continue;
            };
            loop {
                let before = self.ctx.world.actor(entity).map(|actor| actor.action_meter);
                let Some(status) = model.update(&mut self.ctx) else {
                    break;
                };
                outcomes.push(TurnOutcome { entity, status });

                let after = self.ctx.world.actor(entity).map(|actor| actor.action_meter);
                match (before, after) {
                    (Some(before), Some(after)) if after < before => {}
                    _ => break,
                }
            }
        }

        tracing::debug!(round = self.rounds, acted = outcomes.len(), "round complete");
        outcomes
    }

    /// Removes an actor from the game: its model, its Blackboard entries and
    /// its body in the world.
    pub fn remove_actor(&mut self, entity: EntityId) -> Option<ActorState> {
        self.models.remove(&entity);
        self.ctx.blackboard.remove(entity);
        let removed = self.ctx.world.remove_actor(entity);
        if let Some(actor) = &removed {
            tracing::info!(%entity, name = %actor.name, "actor removed");
        }
        removed
    }

    pub fn has_model(&self, entity: EntityId) -> bool {
        self.models.contains_key(&entity)
    }

    pub fn model(&self, entity: EntityId) -> Option<&AiModel> {
        self.models.get(&entity)
    }

    pub fn modeled_actors(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.models.keys().copied()
    }

    /// Rounds run so far.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    pub fn world(&self) -> &WorldState {
        &self.ctx.world
    }

    pub fn world_mut(&mut self) -> &mut WorldState {
        &mut self.ctx.world
    }

    pub fn blackboard(&self) -> &Blackboard {
        &self.ctx.blackboard
    }

    pub fn blackboard_mut(&mut self) -> &mut Blackboard {
        &mut self.ctx.blackboard
    }

    pub fn config(&self) -> &GameConfig {
        &self.ctx.config
    }

    pub fn context(&self) -> &AiContext {
        &self.ctx
    }
}

impl std::fmt::Debug for AiRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiRuntime")
            .field("models", &self.models.len())
            .field("rounds", &self.rounds)
            .finish_non_exhaustive()
    }
}

/// Builder for [`AiRuntime`].
#[derive(Default)]
pub struct AiRuntimeBuilder {
    config: Option<GameConfig>,
    world: Option<WorldState>,
    blackboard: Option<Blackboard>,
}

impl AiRuntimeBuilder {
    /// Override game configuration
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Provide the world to simulate
    pub fn world(mut self, world: WorldState) -> Self {
        self.world = Some(world);
        self
    }

    /// Restore previously saved memory
    pub fn blackboard(mut self, blackboard: Blackboard) -> Self {
        self.blackboard = Some(blackboard);
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<AiRuntime> {
        let world = self.world.ok_or(RuntimeError::MissingWorld)?;
        let config = self.config.unwrap_or_default();

        let mut runtime = AiRuntime::new(world, config);
        if let Some(blackboard) = self.blackboard {
            runtime.ctx.blackboard = blackboard;
        }
        Ok(runtime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use behavior_tree::builder::{task, tree};
    use game_core::{ActorStats, Position};

    use crate::ai::tasks::Idle;
    use crate::blackboard::BlackboardKey;

    fn runtime() -> (AiRuntime, EntityId, EntityId) {
        let mut world = WorldState::from_rows(&["........", "........"]).unwrap();
        world
            .spawn_player(ActorState::new("hero", Position::new(0, 0), ActorStats::default()))
            .unwrap();
        let slow = world
            .spawn_actor(ActorState::new("slug", Position::new(7, 1), ActorStats {
                speed: -1,
                ..ActorStats::default()
            }))
            .unwrap();
        let fast = world
            .spawn_actor(ActorState::new("bat", Position::new(7, 0), ActorStats {
                speed: 1,
                ..ActorStats::default()
            }))
            .unwrap();
        (AiRuntime::new(world, GameConfig::default()), slow, fast)
    }

    #[test]
    fn attach_requires_existing_actor() {
        let (mut runtime, slow, _) = runtime();
        assert!(runtime.attach(slow, AiKind::Basic).is_ok());
        assert_eq!(
            runtime.attach(EntityId(42), AiKind::Basic),
            Err(RuntimeError::UnknownActor(EntityId(42)))
        );
        assert_eq!(
            runtime.attach_named(slow, "dragon"),
            Err(RuntimeError::UnknownAiKind("dragon".into()))
        );
    }

    #[test]
    fn update_without_model_is_an_error() {
        let (mut runtime, slow, _) = runtime();
        assert_eq!(runtime.update(slow), Err(RuntimeError::UnknownActor(slow)));
    }

    #[test]
    fn speed_governs_turn_frequency() {
        let (mut runtime, slow, fast) = runtime();
        runtime.attach_tree(slow, tree(task(Idle))).unwrap();
        runtime.attach_tree(fast, tree(task(Idle))).unwrap();

        let mut turns = BTreeMap::<EntityId, u32>::new();
        for _ in 0..4 {
            for outcome in runtime.round() {
                *turns.entry(outcome.entity).or_default() += 1;
            }
        }

        assert_eq!(runtime.rounds(), 4);
        assert_eq!(turns.get(&slow), Some(&2));
        assert_eq!(turns.get(&fast), Some(&8));
    }

    #[test]
    fn fast_actor_spends_its_energy_every_round() {
        let (mut runtime, _, fast) = runtime();
        runtime.attach_tree(fast, tree(task(Idle))).unwrap();
        let ready = runtime.config().turn_ready_value;

        for _ in 0..5 {
            let outcomes = runtime.round();
            assert_eq!(outcomes.len(), 2);
            assert!(outcomes.iter().all(|outcome| outcome.entity == fast));

            let meter = runtime.world().actor(fast).unwrap().action_meter;
            assert!(meter < ready, "meter {meter} left unspent");
        }
    }

    #[test]
    fn leftover_energy_carries_into_next_round() {
        let (mut runtime, _, fast) = runtime();
        runtime.attach_tree(fast, tree(task(Idle))).unwrap();
        runtime.world_mut().actor_mut(fast).unwrap().action_meter = 50;

        assert_eq!(runtime.round().len(), 2);
        assert_eq!(runtime.world().actor(fast).unwrap().action_meter, 50);
    }

    #[test]
    fn dead_actors_are_removed_at_their_turn() {
        let (mut runtime, slow, fast) = runtime();
        runtime.attach(slow, AiKind::Smart).unwrap();
        runtime.attach(fast, AiKind::Basic).unwrap();
        runtime.world_mut().actor_mut(fast).unwrap().hp.current = 0;

        let outcomes = runtime.round();
        assert!(outcomes.iter().all(|outcome| outcome.entity != fast));
        assert!(!runtime.has_model(fast));
        assert!(runtime.world().actor(fast).is_none());
        assert!(runtime.world().occupant(Position::new(7, 0)).is_none());
    }

    #[test]
    fn builder_requires_world() {
        assert!(matches!(
            AiRuntime::builder().build(),
            Err(RuntimeError::MissingWorld)
        ));
    }

    #[test]
    fn builder_restores_blackboard() {
        let mut blackboard = Blackboard::new();
        blackboard.set_position(EntityId(3), BlackboardKey::LastMinedPos, Position::new(1, 1));

        let runtime = AiRuntime::builder()
            .config(GameConfig::with_seed(7))
            .world(WorldState::from_rows(&["..."]).unwrap())
            .blackboard(blackboard.clone())
            .build()
            .unwrap();
        assert_eq!(runtime.blackboard(), &blackboard);
        assert_eq!(runtime.config().rng_seed, 7);
    }
}
