//! Hit chance calculation.

use crate::config::GameConfig;

/// Calculate hit chance from attacker and defender skill.
///
/// # Formula
///
/// ```text
/// hit_chance = base + (attacker_skill - defender_skill) * per_skill
/// clamped to [min, max]
/// ```
pub fn calculate_hit_chance(attacker_skill: i32, defender_skill: i32, config: &GameConfig) -> u32 {
    let stat_diff = attacker_skill.saturating_sub(defender_skill);
    let hit_chance = (config.base_hit_chance as i32)
        .saturating_add(stat_diff.saturating_mul(config.hit_chance_per_skill as i32));

    hit_chance.clamp(config.min_hit_chance as i32, config.max_hit_chance as i32) as u32
}

/// True when a d100 `roll` (1-100) lands at or under `hit_chance`.
pub fn check_hit(hit_chance: u32, roll: u32) -> bool {
    roll <= hit_chance
}
