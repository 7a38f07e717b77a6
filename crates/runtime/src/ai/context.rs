//! Shared state every leaf task runs against.
//!
//! The [`AiContext`] owns the world, the Blackboard, the RNG stream and the
//! configuration. Trees are stored per actor and evaluated one at a time, so
//! the context is handed to each tree in turn with [`AiContext::entity`] set
//! to the actor whose brain is running. Nodes never hold references into the
//! world; they look actors up by [`EntityId`] on every tick.

use game_core::{
    ActorState, EntityId, GameConfig, GameRng, PathOptions, Position, WorldError, WorldState,
};

use crate::blackboard::Blackboard;

pub struct AiContext {
    /// The actor whose tree is currently running.
    pub entity: EntityId,

    pub world: WorldState,

    pub blackboard: Blackboard,

    pub rng: GameRng,

    pub config: GameConfig,
}

impl AiContext {
    /// Creates a context with an empty Blackboard and an RNG seeded from
    /// `config.rng_seed`.
    pub fn new(world: WorldState, config: GameConfig) -> Self {
        Self {
            entity: EntityId::PLAYER,
            world,
            blackboard: Blackboard::new(),
            rng: GameRng::new(config.rng_seed),
            config,
        }
    }

    pub fn with_blackboard(mut self, blackboard: Blackboard) -> Self {
        self.blackboard = blackboard;
        self
    }

    /// Points the context at another actor.
    pub fn focus(&mut self, entity: EntityId) {
        self.entity = entity;
    }

    pub fn actor(&self) -> Option<&ActorState> {
        self.world.actor(self.entity)
    }

    pub fn actor_mut(&mut self) -> Option<&mut ActorState> {
        self.world.actor_mut(self.entity)
    }

    pub fn position(&self) -> Option<Position> {
        self.actor().map(|actor| actor.position)
    }

    /// The actor being hunted: the player, when present and alive.
    pub fn target(&self) -> Option<&ActorState> {
        self.world
            .player()
            .filter(|player| player.is_alive() && player.id != self.entity)
    }

    pub fn target_position(&self) -> Option<Position> {
        self.target().map(|target| target.position)
    }

    /// True if the current actor still has a turn's worth of energy.
    pub fn is_ready(&self) -> bool {
        self.actor()
            .is_some_and(|actor| actor.can_act(self.config.turn_ready_value))
    }

    /// Consumes the current actor's turn.
    pub fn finish_turn(&mut self) {
        let ready = self.config.turn_ready_value;
        if let Some(actor) = self.actor_mut() {
            actor.finish_turn(ready);
        }
    }

    /// Moves the current actor one step.
    pub fn step_to(&mut self, to: Position) -> Result<(), WorldError> {
        self.world.move_actor(self.entity, to)
    }

    /// Path options for movement tasks, from configuration.
    pub fn path_options(&self) -> PathOptions {
        PathOptions {
            allow_diagonals: self.config.chase_diagonals,
            search_budget: self.config.search_budget(),
            ignore_actors: false,
        }
    }

    pub fn roll_d100(&mut self) -> u32 {
        self.rng.roll_d100(self.entity.0)
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        self.rng.choose(self.entity.0, items)
    }
}
