use behavior_tree::{Behavior, Status};
use game_core::ItemKind;

use crate::ai::AiContext;

/// Picks up one item from the actor's cell.
///
/// With an empty filter the top of the pile (last dropped) is taken;
/// otherwise the first item whose kind is listed. Coins go straight to the
/// actor's money.
#[derive(Debug, Default)]
pub struct PickItems {
    filter: Vec<ItemKind>,
}

impl PickItems {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn only(filter: Vec<ItemKind>) -> Self {
        Self { filter }
    }
}

impl Behavior<AiContext> for PickItems {
    fn tick(&mut self, ctx: &mut AiContext) -> Status {
        let Some(actor) = ctx.actor() else {
            return Status::Failure;
        };
        if actor.inventory.is_full() {
            return Status::Failure;
        }
        let cell = actor.position;

        let pile = ctx.world.items_at(cell);
        let index = if self.filter.is_empty() {
            pile.len().checked_sub(1)
        } else {
            pile.iter().position(|item| self.filter.contains(&item.kind))
        };
        let Some(item) = index.and_then(|index| ctx.world.take_item(cell, index)) else {
            return Status::Failure;
        };

        let entity = ctx.entity;
        let Some(actor) = ctx.actor_mut() else {
            return Status::Failure;
        };
        tracing::debug!(actor = %actor.name, item = ?item.kind, amount = item.amount, "picks up");

        if item.kind == ItemKind::Coins {
            actor.money = actor.money.saturating_add(item.amount);
        } else if let Err(item) = actor.inventory.add(item) {
            tracing::warn!(%entity, "inventory rejected picked item");
            if let Err(err) = ctx.world.drop_item(cell, item) {
                tracing::warn!(%entity, %err, "could not return item to the ground");
            }
            return Status::Failure;
        }

        ctx.finish_turn();
        Status::Success
    }
}
