/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Action meter an actor needs to take a turn; one turn consumes it.
    pub turn_ready_value: u32,
    /// Energy gained per scheduler round at speed 0.
    pub turn_tick_value: u32,
    pub min_hit_chance: u32,
    pub max_hit_chance: u32,
    /// Hit chance when attacker and defender skill are equal.
    pub base_hit_chance: u32,
    pub hit_chance_per_skill: u32,
    /// Default radius for the `player_in_range` condition.
    pub aggro_range: u32,
    /// Default HP percentage under which `hp_low` holds.
    pub hp_low_percent: u32,
    /// Expansion cap for leaf-task path searches. 0 means unbounded.
    pub path_search_budget: usize,
    /// Whether chase and goto tasks path in eight directions.
    pub chase_diagonals: bool,
    pub rng_seed: u64,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TURN_READY_VALUE: u32 = 100;
    pub const DEFAULT_TURN_TICK_VALUE: u32 = 100;
    pub const DEFAULT_MIN_HIT_CHANCE: u32 = 5;
    pub const DEFAULT_MAX_HIT_CHANCE: u32 = 95;
    pub const DEFAULT_BASE_HIT_CHANCE: u32 = 50;
    pub const DEFAULT_HIT_CHANCE_PER_SKILL: u32 = 2;
    pub const DEFAULT_AGGRO_RANGE: u32 = 8;
    pub const DEFAULT_HP_LOW_PERCENT: u32 = 30;

    pub fn new() -> Self {
        Self {
            turn_ready_value: Self::DEFAULT_TURN_READY_VALUE,
            turn_tick_value: Self::DEFAULT_TURN_TICK_VALUE,
            min_hit_chance: Self::DEFAULT_MIN_HIT_CHANCE,
            max_hit_chance: Self::DEFAULT_MAX_HIT_CHANCE,
            base_hit_chance: Self::DEFAULT_BASE_HIT_CHANCE,
            hit_chance_per_skill: Self::DEFAULT_HIT_CHANCE_PER_SKILL,
            aggro_range: Self::DEFAULT_AGGRO_RANGE,
            hp_low_percent: Self::DEFAULT_HP_LOW_PERCENT,
            path_search_budget: 0,
            chase_diagonals: true,
            rng_seed: 0,
        }
    }

    pub fn with_seed(rng_seed: u64) -> Self {
        Self {
            rng_seed,
            ..Self::new()
        }
    }

    /// The configured search budget, with 0 mapped to "unbounded".
    pub fn search_budget(&self) -> Option<usize> {
        (self.path_search_budget > 0).then_some(self.path_search_budget)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
