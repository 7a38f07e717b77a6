//! Monster AI runtime for the dungeon simulation.
//!
//! This crate gives non-player actors their brains. Each controlled actor
//! gets a behavior tree (see the `behavior-tree` crate) built from leaf tasks
//! that act on the shared world from `game-core`, and the [`AiRuntime`]
//! drives those trees one scheduler round at a time.
//!
//! Modules are organized by responsibility:
//! - [`ai`] hosts the context, leaf tasks, conditions, presets and models
//! - [`blackboard`] provides per-actor memory that survives between turns
//! - [`runtime`] hosts the turn driver and its builder
pub mod ai;
pub mod blackboard;
pub mod error;
pub mod runtime;

pub use ai::{AiContext, AiKind, AiModel};
pub use blackboard::{Blackboard, BlackboardEntry, BlackboardKey};
pub use error::{Result, RuntimeError};
pub use runtime::{AiRuntime, AiRuntimeBuilder, TurnOutcome};
