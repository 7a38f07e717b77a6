//! Tree nodes.
//!
//! Control nodes form a closed set ([`NodeKind`]) so evaluation is an
//! exhaustive `match`; leaf tasks stay open through the [`Behavior`] trait.
//! Children are owned by their parent and fixed once the node is built.

use std::fmt::{self, Write as _};

use crate::decorator::Repeat;
use crate::{Behavior, Status, composite, decorator};

/// Predicate evaluated by a Condition node.
///
/// Predicates return a [`Status`] rather than a `bool` so they can report
/// `Undefined` when they cannot evaluate (e.g., the actor has vanished).
pub type Predicate<C> = Box<dyn FnMut(&mut C) -> Status>;

/// The kinds of node a tree is built from.
pub enum NodeKind<C> {
    /// Logical AND with short-circuit, children in insertion order.
    Sequence(Vec<Node<C>>),
    /// Logical OR with short-circuit, children in insertion order.
    Selector(Vec<Node<C>>),
    /// Gates an optional child behind a predicate.
    Condition {
        predicate: Option<Predicate<C>>,
        child: Option<Box<Node<C>>>,
    },
    /// Always fails.
    Failure,
    /// Runs its child and reports child failure as success.
    IgnoreFailure(Box<Node<C>>),
    /// Runs its child once per call and counts calls.
    Repeater {
        child: Box<Node<C>>,
        repeat: Repeat,
        count: u32,
    },
    /// A leaf task.
    Task(Box<dyn Behavior<C>>),
}

impl<C> NodeKind<C> {
    /// Short tag used in logs and tree dumps.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Sequence(_) => "SEQ",
            NodeKind::Selector(_) => "SEL",
            NodeKind::Condition { .. } => "COND",
            NodeKind::Failure => "FAIL",
            NodeKind::IgnoreFailure(_) => "SUCC",
            NodeKind::Repeater { .. } => "REPEAT",
            NodeKind::Task(_) => "TASK",
        }
    }
}

/// A behavior tree node plus its first-run bookkeeping.
pub struct Node<C> {
    kind: NodeKind<C>,
    first_run_done: bool,
}

impl<C> Node<C> {
    pub fn new(kind: NodeKind<C>) -> Self {
        Self {
            kind,
            first_run_done: false,
        }
    }

    pub fn kind(&self) -> &NodeKind<C> {
        &self.kind
    }

    /// Returns `true` once the setup hook has run since the last reset.
    pub fn first_run_done(&self) -> bool {
        self.first_run_done
    }

    /// Evaluates this node once.
    ///
    /// The first call since construction or the last [`Node::reset`] runs the
    /// setup hook of a leaf task before its `tick`.
    pub fn run(&mut self, ctx: &mut C) -> Status {
        if !self.first_run_done {
            if let NodeKind::Task(task) = &mut self.kind {
                task.first_run(ctx);
            }
            self.first_run_done = true;
        }

        match &mut self.kind {
            NodeKind::Sequence(children) => composite::run_sequence(children, ctx),
            NodeKind::Selector(children) => composite::run_selector(children, ctx),
            NodeKind::Condition { predicate, child } => {
                decorator::run_condition(predicate.as_mut(), child.as_deref_mut(), ctx)
            }
            NodeKind::Failure => Status::Failure,
            NodeKind::IgnoreFailure(child) => decorator::run_ignore_failure(child, ctx),
            NodeKind::Repeater {
                child,
                repeat,
                count,
            } => decorator::run_repeater(child, *repeat, count, ctx),
            NodeKind::Task(task) => {
                let status = task.tick(ctx);
                tracing::trace!(task = task.name(), ?status, "task evaluated");
                status
            }
        }
    }

    /// Clears state recursively and re-arms the first-run hook.
    pub fn reset(&mut self) {
        self.first_run_done = false;

        match &mut self.kind {
            NodeKind::Sequence(children) | NodeKind::Selector(children) => {
                children.iter_mut().for_each(Node::reset);
            }
            NodeKind::Condition { child, .. } => {
                if let Some(child) = child {
                    child.reset();
                }
            }
            NodeKind::Failure => {}
            NodeKind::IgnoreFailure(child) => child.reset(),
            NodeKind::Repeater { child, count, .. } => {
                *count = 0;
                child.reset();
            }
            NodeKind::Task(task) => task.reset(),
        }
    }

    /// Renders the subtree as indented lines, one node per line.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        self.describe_into(&mut out, 0);
        out
    }

    fn describe_into(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = match &self.kind {
            NodeKind::Task(task) => writeln!(out, "{indent}[TASK {}]", task.name()),
            NodeKind::Repeater { repeat, .. } => writeln!(out, "{indent}[REPEAT {repeat}]"),
            NodeKind::Condition { predicate: None, .. } => {
                writeln!(out, "{indent}[COND unbound]")
            }
            kind => writeln!(out, "{indent}[{}]", kind.label()),
        };

        match &self.kind {
            NodeKind::Sequence(children) | NodeKind::Selector(children) => {
                for child in children {
                    child.describe_into(out, depth + 1);
                }
            }
            NodeKind::Condition {
                child: Some(child), ..
            }
            | NodeKind::IgnoreFailure(child)
            | NodeKind::Repeater { child, .. } => child.describe_into(out, depth + 1),
            _ => {}
        }
    }
}

impl<C> fmt::Debug for Node<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("kind", &self.kind.label())
            .field("first_run_done", &self.first_run_done)
            .finish()
    }
}
