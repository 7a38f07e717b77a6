//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose
//! `Node::new(NodeKind::Sequence(vec![...]))`, you can use shorter functions
//! like `sequence(vec![...])`.

use crate::{Behavior, Node, NodeKind, Predicate, Repeat, Root, Status};

/// Creates a sequence node.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Node<C>>) -> Node<C> {
    Node::new(NodeKind::Sequence(children))
}

/// Creates a selector node.
#[inline]
pub fn selector<C: 'static>(children: Vec<Node<C>>) -> Node<C> {
    Node::new(NodeKind::Selector(children))
}

/// Creates a condition node gating `child` behind `predicate`.
#[inline]
pub fn condition<C: 'static>(predicate: Predicate<C>, child: Option<Node<C>>) -> Node<C> {
    Node::new(NodeKind::Condition {
        predicate: Some(predicate),
        child: child.map(Box::new),
    })
}

/// Creates a condition node from a closure.
///
/// Shorthand for `condition(Box::new(f), child)`.
#[inline]
pub fn when<C: 'static, F>(f: F, child: Node<C>) -> Node<C>
where
    F: FnMut(&mut C) -> Status + 'static,
{
    condition(Box::new(f), Some(child))
}

/// Creates a condition node with no predicate bound.
///
/// Evaluates to `Undefined`; mirrors what a script compiler produces for an
/// unknown predicate name.
#[inline]
pub fn unbound_condition<C: 'static>(child: Option<Node<C>>) -> Node<C> {
    Node::new(NodeKind::Condition {
        predicate: None,
        child: child.map(Box::new),
    })
}

/// Creates a node that always fails.
#[inline]
pub fn failure<C: 'static>() -> Node<C> {
    Node::new(NodeKind::Failure)
}

/// Creates an ignore-failure (succeeder) node.
#[inline]
pub fn ignore_failure<C: 'static>(child: Node<C>) -> Node<C> {
    Node::new(NodeKind::IgnoreFailure(Box::new(child)))
}

/// Creates a repeater that finishes on the call after the `times`-th.
#[inline]
pub fn repeat<C: 'static>(times: u32, child: Node<C>) -> Node<C> {
    Node::new(NodeKind::Repeater {
        child: Box::new(child),
        repeat: Repeat::Times(times),
        count: 0,
    })
}

/// Creates a repeater that never finishes.
#[inline]
pub fn repeat_forever<C: 'static>(child: Node<C>) -> Node<C> {
    Node::new(NodeKind::Repeater {
        child: Box::new(child),
        repeat: Repeat::Forever,
        count: 0,
    })
}

/// Wraps a leaf task.
#[inline]
pub fn task<C: 'static, B>(behavior: B) -> Node<C>
where
    B: Behavior<C> + 'static,
{
    Node::new(NodeKind::Task(Box::new(behavior)))
}

/// Creates a root holding `body`.
#[inline]
pub fn tree<C: 'static>(body: Node<C>) -> Root<C> {
    Root::new(body)
}
