use behavior_tree::{Behavior, Status};
use game_core::{ActorState, ItemKind, ItemState};

use crate::ai::AiContext;

/// Which potion to reach for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum PotionPreference {
    /// First identified healing potion.
    #[strum(serialize = "HP")]
    Hp,
    /// First identified mana potion.
    #[strum(serialize = "MP")]
    Mp,
    /// Any potion at random, identified or not.
    #[strum(serialize = "ANY")]
    Any,
}

/// Drinks one potion from the inventory.
#[derive(Debug)]
pub struct DrinkPotion {
    preference: PotionPreference,
}

impl DrinkPotion {
    pub fn new(preference: PotionPreference) -> Self {
        Self { preference }
    }

    fn pick(&self, ctx: &mut AiContext) -> Option<usize> {
        let inventory = &ctx.actor()?.inventory;
        match self.preference {
            PotionPreference::Hp => {
                inventory.position(|item| item.kind == ItemKind::HealingPotion && item.identified)
            }
            PotionPreference::Mp => {
                inventory.position(|item| item.kind == ItemKind::ManaPotion && item.identified)
            }
            PotionPreference::Any => {
                let candidates: Vec<usize> = inventory
                    .items()
                    .iter()
                    .enumerate()
                    .filter(|(_, item)| item.kind.is_potion())
                    .map(|(index, _)| index)
                    .collect();
                ctx.choose(&candidates).copied()
            }
        }
    }
}

impl Behavior<AiContext> for DrinkPotion {
    fn tick(&mut self, ctx: &mut AiContext) -> Status {
        let Some(index) = self.pick(ctx) else {
            return Status::Failure;
        };
        let Some(actor) = ctx.actor_mut() else {
            return Status::Failure;
        };
        let Some(potion) = actor.inventory.take_one(index) else {
            return Status::Failure;
        };

        let restored = quaff(actor, &potion);
        tracing::debug!(
            actor = %actor.name,
            potion = ?potion.kind,
            restored,
            "drinks potion"
        );

        ctx.finish_turn();
        Status::Success
    }
}

/// Applies a potion's effect and returns the amount restored.
fn quaff(actor: &mut ActorState, potion: &ItemState) -> u32 {
    match potion.kind {
        ItemKind::HealingPotion => actor.hp.restore(potion.potency),
        ItemKind::ManaPotion => actor.mp.restore(potion.potency),
        _ => 0,
    }
}
