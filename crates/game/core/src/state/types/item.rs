//! Items carried by actors or lying on the ground.

/// Item categories the AI cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    HealingPotion,
    ManaPotion,
    /// A potion whose effect is unknown until drunk.
    UnknownPotion,
    Gem,
    Coins,
    Junk,
}

impl ItemKind {
    pub fn is_potion(self) -> bool {
        matches!(
            self,
            ItemKind::HealingPotion | ItemKind::ManaPotion | ItemKind::UnknownPotion
        )
    }
}

/// A stack of items.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemState {
    pub kind: ItemKind,
    /// Stack size. Non-stackable items always have amount 1.
    pub amount: u32,
    pub stackable: bool,
    pub identified: bool,
    /// Effect strength (HP/MP restored for potions, value for gems).
    pub potency: u32,
}

impl ItemState {
    pub fn new(kind: ItemKind, potency: u32) -> Self {
        Self {
            kind,
            amount: 1,
            stackable: false,
            identified: true,
            potency,
        }
    }

    pub fn healing_potion(potency: u32) -> Self {
        Self::new(ItemKind::HealingPotion, potency)
    }

    pub fn mana_potion(potency: u32) -> Self {
        Self::new(ItemKind::ManaPotion, potency)
    }

    pub fn coins(amount: u32) -> Self {
        Self {
            amount,
            stackable: true,
            ..Self::new(ItemKind::Coins, 0)
        }
    }

    pub fn stacked(mut self, amount: u32) -> Self {
        self.stackable = true;
        self.amount = amount.max(1);
        self
    }

    pub fn unidentified(mut self) -> Self {
        self.identified = false;
        self
    }
}

/// Actor inventory with a fixed number of slots.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    items: Vec<ItemState>,
    capacity: usize,
}

impl InventoryState {
    pub const DEFAULT_CAPACITY: usize = 8;

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    pub fn items(&self) -> &[ItemState] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Adds an item, handing it back if every slot is taken.
    pub fn add(&mut self, item: ItemState) -> Result<(), ItemState> {
        if self.is_full() {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    /// Index of the first item matching `predicate`.
    pub fn position(&self, predicate: impl Fn(&ItemState) -> bool) -> Option<usize> {
        self.items.iter().position(predicate)
    }

    /// Takes a single unit from the stack at `index`, removing the slot once
    /// the stack is exhausted.
    pub fn take_one(&mut self, index: usize) -> Option<ItemState> {
        let slot = self.items.get_mut(index)?;

        if slot.stackable && slot.amount > 1 {
            slot.amount -= 1;
            let mut unit = slot.clone();
            unit.amount = 1;
            return Some(unit);
        }

        Some(self.items.remove(index))
    }
}

impl Default for InventoryState {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_rejects_when_full() {
        let mut inventory = InventoryState::with_capacity(1);
        assert!(inventory.add(ItemState::healing_potion(5)).is_ok());
        assert_eq!(
            inventory.add(ItemState::mana_potion(5)),
            Err(ItemState::mana_potion(5))
        );
    }

    #[test]
    fn take_one_splits_stacks() {
        let mut inventory = InventoryState::default();
        inventory
            .add(ItemState::healing_potion(5).stacked(2))
            .unwrap();

        assert_eq!(inventory.take_one(0).map(|i| i.amount), Some(1));
        assert_eq!(inventory.len(), 1);
        assert!(inventory.take_one(0).is_some());
        assert!(inventory.is_empty());
        assert!(inventory.take_one(0).is_none());
    }
}
