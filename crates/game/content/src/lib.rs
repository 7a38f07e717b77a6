//! Data-driven content loaders.
//!
//! This crate reads level data from disk:
//! - Game configuration (TOML)
//! - Map layouts (RON, ASCII rows)
//! - Scenarios: player, monsters with their AI kind, and ground items (RON)
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ActorSpec, ConfigLoader, GroundItemSpec, LoadResult, MapLoader, MonsterSpec, ScenarioLoader,
    ScenarioSpec,
};
