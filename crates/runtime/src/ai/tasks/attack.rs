use behavior_tree::{Behavior, Status};
use game_core::combat::{calculate_damage, calculate_hit_chance, check_hit};

use crate::ai::AiContext;

/// Outcome of the most recent swing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackReport {
    pub hit: bool,
    /// Hit chance the roll was made against, in percent.
    pub chance: u32,
    pub damage: u32,
    pub target_alive: bool,
}

/// Melee attack on an adjacent player.
///
/// Swinging is the action, so a miss still succeeds and consumes the turn.
/// Whether the blow landed is kept in [`AttackBasic::last_report`].
#[derive(Debug, Default)]
pub struct AttackBasic {
    last_report: Option<AttackReport>,
}

impl AttackBasic {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_report(&self) -> Option<AttackReport> {
        self.last_report
    }
}

impl Behavior<AiContext> for AttackBasic {
    fn tick(&mut self, ctx: &mut AiContext) -> Status {
        let Some(attacker) = ctx.actor() else {
            return Status::Failure;
        };
        let Some(defender) = ctx.target() else {
            return Status::Failure;
        };
        if !attacker.position.is_neighbor(defender.position) {
            return Status::Failure;
        }

        let (attacker_name, attacker_stats) = (attacker.name.clone(), attacker.stats);
        let (defender_id, defender_stats) = (defender.id, defender.stats);

        let chance = calculate_hit_chance(attacker_stats.skill, defender_stats.skill, &ctx.config);
        let roll = ctx.roll_d100();
        let hit = check_hit(chance, roll);
        let damage = if hit {
            calculate_damage(&attacker_stats, &defender_stats)
        } else {
            0
        };

        let mut target_alive = true;
        if let Some(defender) = ctx.world.actor_mut(defender_id) {
            defender.receive_damage(damage);
            target_alive = defender.is_alive();
        }

        tracing::debug!(
            attacker = %attacker_name,
            target = %defender_id,
            chance,
            roll,
            hit,
            damage,
            "attack"
        );

        self.last_report = Some(AttackReport {
            hit,
            chance,
            damage,
            target_alive,
        });
        ctx.finish_turn();
        Status::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::testing::{arena, meter};
    use game_core::{EntityId, Position, ResourceMeter};

    #[test]
    fn adjacent_attack_consumes_turn_and_reports() {
        let (mut ctx, _) = arena(&["....."], Position::new(0, 0), Position::new(1, 0));
        let before = ctx.world.actor(EntityId::PLAYER).unwrap().hp.current;
        let mut attack = AttackBasic::new();

        assert_eq!(attack.tick(&mut ctx), Status::Success);
        assert_eq!(meter(&ctx), 0);

        let report = attack.last_report().unwrap();
        assert_eq!(report.chance, 50);
        let after = ctx.world.actor(EntityId::PLAYER).unwrap().hp.current;
        if report.hit {
            assert_eq!(report.damage, 1);
            assert_eq!(after, before - 1);
        } else {
            assert_eq!(report.damage, 0);
            assert_eq!(after, before);
        }
    }

    #[test]
    fn distant_target_fails_without_spending_turn() {
        let (mut ctx, _) = arena(&["....."], Position::new(0, 0), Position::new(3, 0));
        let mut attack = AttackBasic::new();

        assert_eq!(attack.tick(&mut ctx), Status::Failure);
        assert!(attack.last_report().is_none());
        assert_eq!(meter(&ctx), 100);
    }

    #[test]
    fn killing_blow_is_reported() {
        let (mut ctx, _) = arena(&["...", "..."], Position::new(0, 0), Position::new(1, 1));
        if let Some(player) = ctx.world.actor_mut(EntityId::PLAYER) {
            player.hp = ResourceMeter::new(1, 10);
        }
        ctx.config.min_hit_chance = 100;
        ctx.config.max_hit_chance = 100;

        let mut attack = AttackBasic::new();
        assert_eq!(attack.tick(&mut ctx), Status::Success);

        let report = attack.last_report().unwrap();
        assert!(report.hit);
        assert!(!report.target_alive);
        assert!(ctx.target().is_none());
    }
}
