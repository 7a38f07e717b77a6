//! Monster AI: the context trees run against, the leaves they are built
//! from, and the per-actor models the scheduler drives.

pub mod conditions;
mod context;
pub mod factory;
mod model;
mod presets;
pub mod tasks;

#[cfg(test)]
pub(crate) mod testing;

pub use context::AiContext;
pub use model::AiModel;
pub use presets::{AiKind, GUARD_WATCH_TURNS, MINER_DIG_CHANCE};
