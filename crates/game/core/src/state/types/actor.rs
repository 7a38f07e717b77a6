//! Actor state: stats, resources and the action-readiness meter.

use super::{EntityId, InventoryState, Position, ResourceMeter};

/// Core combat statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActorStats {
    pub level: u32,
    pub skill: i32,
    pub strength: i32,
    pub defense: i32,
    /// Turn economy modifier. Each point above zero adds a full tick of
    /// energy per round; each point below zero skips a round of gains.
    pub speed: i32,
}

impl Default for ActorStats {
    fn default() -> Self {
        Self {
            level: 1,
            skill: 1,
            strength: 1,
            defense: 0,
            speed: 0,
        }
    }
}

/// A living thing on the map: the player or a monster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorState {
    pub id: EntityId,
    pub name: String,
    pub position: Position,
    pub stats: ActorStats,
    pub hp: ResourceMeter,
    pub mp: ResourceMeter,
    /// Energy accumulated toward the next turn.
    pub action_meter: u32,
    pub inventory: InventoryState,
    pub money: u32,
    skipped_rounds: u32,
}

impl ActorState {
    /// Creates an actor with full 10 HP. The id is assigned when spawned.
    pub fn new(name: impl Into<String>, position: Position, stats: ActorStats) -> Self {
        Self {
            id: EntityId::default(),
            name: name.into(),
            position,
            stats,
            hp: ResourceMeter::full(10),
            mp: ResourceMeter::default(),
            action_meter: 0,
            inventory: InventoryState::default(),
            money: 0,
            skipped_rounds: 0,
        }
    }

    pub fn with_hp(mut self, hp: ResourceMeter) -> Self {
        self.hp = hp;
        self
    }

    pub fn with_mp(mut self, mp: ResourceMeter) -> Self {
        self.mp = mp;
        self
    }

    pub fn with_action_meter(mut self, action_meter: u32) -> Self {
        self.action_meter = action_meter;
        self
    }

    pub fn with_inventory(mut self, inventory: InventoryState) -> Self {
        self.inventory = inventory;
        self
    }

    pub fn is_alive(&self) -> bool {
        !self.hp.is_empty()
    }

    /// True when alive and the meter has reached the turn-ready threshold.
    pub fn can_act(&self, turn_ready_value: u32) -> bool {
        self.is_alive() && self.action_meter >= turn_ready_value
    }

    /// Accumulates energy for one scheduler round.
    pub fn gain_energy(&mut self, turn_tick_value: u32) {
        let speed = self.stats.speed;

        if speed < 0 && self.skipped_rounds < speed.unsigned_abs() {
            self.skipped_rounds += 1;
            return;
        }
        self.skipped_rounds = 0;

        let multiplier = (speed + 1).max(1) as u32;
        self.action_meter = self
            .action_meter
            .saturating_add(multiplier.saturating_mul(turn_tick_value));
    }

    /// Spends one turn worth of energy.
    pub fn finish_turn(&mut self, turn_ready_value: u32) {
        self.action_meter = self.action_meter.saturating_sub(turn_ready_value);
    }

    /// Applies damage and returns the amount actually taken.
    pub fn receive_damage(&mut self, amount: u32) -> u32 {
        self.hp.drain(amount)
    }
}
