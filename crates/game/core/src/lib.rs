//! Grid world, combat formulas and path search for the dungeon AI.
//!
//! `game-core` holds the state every actor brain reads and mutates: the
//! [`WorldState`] grid with its actors and items, the [`MapView`] query
//! surface, the deterministic [`GameRng`], and the A* [`path`] search.
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod path;
pub mod state;

pub use config::GameConfig;
pub use env::{GameRng, MapDimensions, MapView, PcgRng, RngOracle, TerrainKind, compute_seed};
pub use error::{ErrorSeverity, WorldError};
pub use path::{DIAGONAL_COST, ORTHOGONAL_COST, Path, PathOptions, find_path, find_path_with};
pub use state::{
    ActorState, ActorStats, EntityId, InventoryState, ItemKind, ItemState, Position,
    ResourceMeter, StaticObject, WorldState,
};
