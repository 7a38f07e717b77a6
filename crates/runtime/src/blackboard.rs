//! Per-actor scratch memory shared across leaf tasks and activations.
//!
//! Entries are keyed by (actor, [`BlackboardKey`]) and hold string values.
//! Reads of anything never written return `None`, never an error. Entries do
//! not expire: the task that consumes a value clears it, and
//! [`Blackboard::remove`] drops everything an actor owned when it leaves the
//! world.

use std::collections::BTreeMap;

use game_core::{EntityId, Position};
use serde::{Deserialize, Serialize};

/// Known memory slots.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BlackboardKey {
    /// Where the target was last seen.
    LastTargetPos,
    /// Cell most recently dug out by a miner.
    LastMinedPos,
}

/// One stored value, in the flat form used for persistence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackboardEntry {
    pub actor: EntityId,
    pub key: BlackboardKey,
    pub value: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<BlackboardEntry>", into = "Vec<BlackboardEntry>")]
pub struct Blackboard {
    entries: BTreeMap<EntityId, BTreeMap<BlackboardKey, String>>,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates or overwrites an entry.
    pub fn set(&mut self, actor: EntityId, key: BlackboardKey, value: impl Into<String>) {
        self.entries
            .entry(actor)
            .or_default()
            .insert(key, value.into());
    }

    pub fn get(&self, actor: EntityId, key: BlackboardKey) -> Option<&str> {
        self.entries
            .get(&actor)
            .and_then(|slots| slots.get(&key))
            .map(String::as_str)
    }

    pub fn contains(&self, actor: EntityId, key: BlackboardKey) -> bool {
        self.get(actor, key).is_some()
    }

    /// Clears a single entry, returning its value.
    pub fn clear_key(&mut self, actor: EntityId, key: BlackboardKey) -> Option<String> {
        let slots = self.entries.get_mut(&actor)?;
        let value = slots.remove(&key);
        if slots.is_empty() {
            self.entries.remove(&actor);
        }
        value
    }

    /// Drops every entry owned by `actor`.
    pub fn remove(&mut self, actor: EntityId) {
        self.entries.remove(&actor);
    }

    pub fn set_position(&mut self, actor: EntityId, key: BlackboardKey, position: Position) {
        self.set(actor, key, position.to_string());
    }

    /// Reads a stored position. Values that do not parse read as absent.
    pub fn position(&self, actor: EntityId, key: BlackboardKey) -> Option<Position> {
        self.get(actor, key)?.parse().ok()
    }

    /// Number of actors with at least one entry.
    pub fn actor_count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> impl Iterator<Item = BlackboardEntry> + '_ {
        self.entries.iter().flat_map(|(actor, slots)| {
            slots.iter().map(move |(key, value)| BlackboardEntry {
                actor: *actor,
                key: *key,
                value: value.clone(),
            })
        })
    }
}

impl From<Vec<BlackboardEntry>> for Blackboard {
    fn from(entries: Vec<BlackboardEntry>) -> Self {
        let mut board = Self::new();
        for entry in entries {
            board.set(entry.actor, entry.key, entry.value);
        }
        board
    }
}

impl From<Blackboard> for Vec<BlackboardEntry> {
    fn from(board: Blackboard) -> Self {
        board.entries().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAT: EntityId = EntityId(3);
    const BAT: EntityId = EntityId(4);

    #[test]
    fn unwritten_reads_are_empty() {
        let board = Blackboard::new();
        assert_eq!(board.get(RAT, BlackboardKey::LastTargetPos), None);
        assert_eq!(board.position(RAT, BlackboardKey::LastMinedPos), None);
    }

    #[test]
    fn set_then_get_and_overwrite() {
        let mut board = Blackboard::new();
        board.set(RAT, BlackboardKey::LastTargetPos, "1,2");
        assert_eq!(board.get(RAT, BlackboardKey::LastTargetPos), Some("1,2"));

        board.set_position(RAT, BlackboardKey::LastTargetPos, Position::new(7, 8));
        assert_eq!(
            board.position(RAT, BlackboardKey::LastTargetPos),
            Some(Position::new(7, 8))
        );
        assert_eq!(board.get(BAT, BlackboardKey::LastTargetPos), None);
    }

    #[test]
    fn remove_drops_only_that_actor() {
        let mut board = Blackboard::new();
        board.set(RAT, BlackboardKey::LastTargetPos, "1,1");
        board.set(RAT, BlackboardKey::LastMinedPos, "2,2");
        board.set(BAT, BlackboardKey::LastTargetPos, "3,3");

        board.remove(RAT);
        assert_eq!(board.get(RAT, BlackboardKey::LastTargetPos), None);
        assert_eq!(board.get(RAT, BlackboardKey::LastMinedPos), None);
        assert_eq!(board.get(BAT, BlackboardKey::LastTargetPos), Some("3,3"));
    }

    #[test]
    fn clear_key_prunes_empty_actors() {
        let mut board = Blackboard::new();
        board.set(RAT, BlackboardKey::LastMinedPos, "4,4");

        assert_eq!(
            board.clear_key(RAT, BlackboardKey::LastMinedPos).as_deref(),
            Some("4,4")
        );
        assert_eq!(board.actor_count(), 0);
        assert_eq!(board.clear_key(RAT, BlackboardKey::LastMinedPos), None);
    }

    #[test]
    fn keys_have_stable_names() {
        assert_eq!(BlackboardKey::LastTargetPos.to_string(), "last_target_pos");
        assert_eq!(
            "last_mined_pos".parse::<BlackboardKey>(),
            Ok(BlackboardKey::LastMinedPos)
        );
    }

    #[test]
    fn serializes_as_triples() {
        let mut board = Blackboard::new();
        board.set(BAT, BlackboardKey::LastTargetPos, "5,6");

        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "actor": 4, "key": "last_target_pos", "value": "5,6" }])
        );

        let restored: Blackboard = serde_json::from_value(json).unwrap();
        assert_eq!(restored, board);
    }
}
