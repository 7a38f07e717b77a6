//! Leaf tasks.
//!
//! Every task looks its actor up through [`AiContext`](crate::ai::AiContext)
//! on each tick and either commits a world change completely or leaves the
//! world untouched. Tasks that act call `finish_turn` before reporting
//! `Success`; bookkeeping tasks (remembering a position, arriving at one) do
//! not.

mod attack;
mod chase;
mod idle;
mod memory;
mod mine;
mod movement;
mod pickup;
mod potion;

pub use attack::{AttackBasic, AttackReport};
pub use chase::ChaseTarget;
pub use idle::Idle;
pub use memory::{GotoRemembered, RememberTarget};
pub use mine::{MineBlock, MineTunnel};
pub use movement::{MoveAway, RandomMove};
pub use pickup::PickItems;
pub use potion::{DrinkPotion, PotionPreference};
