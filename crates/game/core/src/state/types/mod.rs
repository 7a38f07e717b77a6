pub mod actor;
pub mod common;
pub mod item;
pub mod world;

pub use actor::{ActorState, ActorStats};
pub use common::{EIGHT_OFFSETS, EntityId, ORTHOGONAL_OFFSETS, Position, ResourceMeter};
pub use item::{InventoryState, ItemKind, ItemState};
pub use world::{StaticObject, WorldState};
