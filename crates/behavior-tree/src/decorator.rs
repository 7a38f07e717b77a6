//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its result or execution.
//! This module provides Condition (predicate gate), IgnoreFailure (error
//! suppression) and Repeater (turn-paced repetition).

use std::fmt;

use crate::node::Predicate;
use crate::{Node, Status};

/// How many times a Repeater runs its child before reporting success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repeat {
    /// Report `Success` on the call after the n-th.
    Times(u32),
    /// Never finish.
    Forever,
}

impl fmt::Display for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Repeat::Times(n) => write!(f, "{n}"),
            Repeat::Forever => f.write_str("forever"),
        }
    }
}

/// Gates a child behind a predicate.
///
/// # Semantics
///
/// - No predicate bound: returns `Undefined` (configuration error, logged)
/// - Predicate returns `Success`: runs the child and returns its result, or
///   `Undefined` when no child is attached
/// - Otherwise: returns the predicate's own result
pub(crate) fn run_condition<C>(
    predicate: Option<&mut Predicate<C>>,
    child: Option<&mut Node<C>>,
    ctx: &mut C,
) -> Status {
    let Some(predicate) = predicate else {
        tracing::warn!("condition has no predicate bound");
        return Status::Undefined;
    };

    match predicate(ctx) {
        Status::Success => match child {
            Some(child) => child.run(ctx),
            None => Status::Undefined,
        },
        other => other,
    }
}

/// Runs the child and turns `Failure` into `Success`.
///
/// # Semantics
///
/// - `Failure` becomes `Success`
/// - `Success`, `Running` and `Undefined` pass through unchanged
///
/// This is useful for optional behaviors that shouldn't cause a sequence to
/// fail (e.g., "pick up items if there are any, then keep going").
pub(crate) fn run_ignore_failure<C>(child: &mut Node<C>, ctx: &mut C) -> Status {
    match child.run(ctx) {
        Status::Failure => Status::Success,
        other => other,
    }
}

/// Runs the child once and advances the repeat counter.
///
/// # Semantics
///
/// Each call runs the child exactly once, ignoring its result. With
/// `Repeat::Times(n)` the first `n` calls return `Running` and every later
/// call returns `Success`; with `Repeat::Forever` every call returns
/// `Running`. Repetition is paced by the scheduler: one tree evaluation per
/// turn advances the counter once.
pub(crate) fn run_repeater<C>(
    child: &mut Node<C>,
    repeat: Repeat,
    count: &mut u32,
    ctx: &mut C,
) -> Status {
    let _ = child.run(ctx);

    match repeat {
        Repeat::Forever => Status::Running,
        Repeat::Times(limit) => {
            *count = count.saturating_add(1);
            if *count > limit {
                Status::Success
            } else {
                Status::Running
            }
        }
    }
}
