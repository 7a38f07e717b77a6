//! Tree root.

use crate::{Node, Status};

/// Entry point of a behavior tree.
///
/// Holds exactly one child, the tree body, and is the only node a per-actor
/// model calls directly.
pub struct Root<C> {
    body: Option<Node<C>>,
}

impl<C> Root<C> {
    pub fn new(body: Node<C>) -> Self {
        Self { body: Some(body) }
    }

    /// Creates a root with no body. Running it fails.
    pub fn empty() -> Self {
        Self { body: None }
    }

    pub fn body(&self) -> Option<&Node<C>> {
        self.body.as_ref()
    }

    /// Evaluates the whole tree once.
    pub fn run(&mut self, ctx: &mut C) -> Status {
        match &mut self.body {
            Some(body) => body.run(ctx),
            None => {
                tracing::warn!("behavior tree root has no body");
                Status::Failure
            }
        }
    }

    /// Resets every node in the tree.
    pub fn reset(&mut self) {
        if let Some(body) = &mut self.body {
            body.reset();
        }
    }

    pub fn describe(&self) -> String {
        let mut out = String::from("[TREE]\n");
        if let Some(body) = &self.body {
            for line in body.describe().lines() {
                out.push_str("  ");
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }
}

impl<C> Default for Root<C> {
    fn default() -> Self {
        Self::empty()
    }
}
