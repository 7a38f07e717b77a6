//! Authoritative world state.
//!
//! Actors, items and the grid live here. Leaf tasks query this state through
//! [`crate::env::MapView`] and mutate it only through the `WorldState` methods,
//! which either commit a change whole or reject it.
pub mod types;

pub use types::{
    ActorState, ActorStats, EIGHT_OFFSETS, EntityId, InventoryState, ItemKind, ItemState,
    ORTHOGONAL_OFFSETS, Position, ResourceMeter, StaticObject, WorldState,
};
