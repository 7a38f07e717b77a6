//! Lightweight behavior tree library optimized for turn-based games.
//!
//! This library provides a small, deterministic behavior tree interpreter
//! designed for roguelike actors that think once per turn.
//!
//! - **No delta time**: Every [`Root::run`] call completes within the turn
//! - **Running means "spans turns"**: A node may report that its action needs
//!   more scheduler turns, but the call itself always returns synchronously
//! - **Undefined is a result**: Nodes with no meaningful outcome report
//!   [`Status::Undefined`], which control nodes never coerce to failure
//!
//! # Architecture
//!
//! - [`Behavior`]: Open trait for leaf tasks
//! - [`Node`]: Closed set of control node kinds plus leaf tasks
//! - [`Status`]: Success, Running, Failure or Undefined
//! - Composite nodes: Sequence, Selector
//! - Decorator nodes: Condition, IgnoreFailure, Repeater, Failure
//! - [`Root`]: The single entry point a per-actor model calls

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod node;
pub mod root;
pub mod status;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use decorator::Repeat;
pub use node::{Node, NodeKind, Predicate};
pub use root::Root;
pub use status::Status;
