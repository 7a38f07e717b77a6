//! Damage calculation.

use crate::state::ActorStats;

/// Melee damage: attacker strength minus defender defense, at least 1.
pub fn calculate_damage(attacker: &ActorStats, defender: &ActorStats) -> u32 {
    attacker.strength.saturating_sub(defender.defense).max(1) as u32
}
