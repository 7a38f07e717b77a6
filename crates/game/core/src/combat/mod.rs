//! Melee combat formulas.
//!
//! Pure functions over actor stats and [`GameConfig`](crate::GameConfig)
//! balance values; the attack task rolls the dice and applies the outcome.

pub mod damage;
pub mod hit;

pub use damage::calculate_damage;
pub use hit::{calculate_hit_chance, check_hit};
