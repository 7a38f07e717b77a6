//! Read-only views of the world and the deterministic RNG.
//!
//! [`MapView`] is the query surface leaf tasks and the pathfinder consume;
//! [`GameRng`] is the only source of randomness.
mod map;
mod rng;

pub use map::{MapDimensions, MapView, TerrainKind, bresenham};
pub use rng::{GameRng, PcgRng, RngOracle, compute_seed};
