//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the evaluation rules for the two fundamental
//! building blocks: Sequence (AND logic) and Selector (OR logic).

use crate::{Node, Status};

/// Executes children in order until one does not succeed.
///
/// # Semantics
///
/// A Sequence evaluates its children from left to right:
/// - If a child returns anything but `Success`, the sequence **stops
///   immediately** and returns that result (`Failure`, `Running` or `Undefined`)
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
/// A sequence with no children fails.
pub(crate) fn run_sequence<C>(children: &mut [Node<C>], ctx: &mut C) -> Status {
    if children.is_empty() {
        tracing::warn!("sequence has no children");
        return Status::Failure;
    }

    for child in children.iter_mut() {
        match child.run(ctx) {
            Status::Success => continue,
            other => return other, // Short-circuit
        }
    }

    // All children succeeded
    Status::Success
}

/// Executes children in order until one does not fail.
///
/// # Semantics
///
/// A Selector evaluates its children from left to right:
/// - If a child returns anything but `Failure`, the selector **stops
///   immediately** and returns that result (`Success`, `Running` or `Undefined`)
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation and is
/// the main "try the highest-priority behavior first" dispatch.
/// A selector with no children fails.
pub(crate) fn run_selector<C>(children: &mut [Node<C>], ctx: &mut C) -> Status {
    if children.is_empty() {
        tracing::warn!("selector has no children");
        return Status::Failure;
    }

    for child in children.iter_mut() {
        match child.run(ctx) {
            Status::Failure => continue, // Try next child
            other => return other,
        }
    }

    // All children failed
    Status::Failure
}
