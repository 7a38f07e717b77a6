//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, the open extension point for
//! leaf tasks. Control flow lives in the closed [`crate::Node`] enum; anything
//! that actually touches the game implements this trait. The trait is generic
//! over a context type `C`, allowing tasks to access game state and make
//! decisions.

use crate::Status;

/// A leaf task that can be evaluated against a context.
///
/// Tasks may keep private state between turns (a cached path, a counter).
/// That state belongs to the task alone and is cleared by [`Behavior::reset`].
pub trait Behavior<C> {
    /// Evaluate this task against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the context. Tasks can read game state
    ///   and commit world mutations through it.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the task succeeded
    /// - `Status::Running` if the task needs more turns
    /// - `Status::Failure` if the task could not be performed
    /// - `Status::Undefined` if the task had nothing meaningful to report
    fn tick(&mut self, ctx: &mut C) -> Status;

    /// One-time setup hook, run before the first `tick` since the last reset.
    fn first_run(&mut self, _ctx: &mut C) {}

    /// Clears per-activation state so the next activation starts fresh.
    fn reset(&mut self) {}

    /// Human readable name used in logs.
    fn name(&self) -> &'static str {
        let full = core::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of tasks.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }

    #[inline]
    fn first_run(&mut self, ctx: &mut C) {
        (**self).first_run(ctx)
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }

    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }
}
