//! Runtime error types.
//!
//! In-tree outcomes (unmet predicates, blocked moves, unreachable targets)
//! never show up here; they are ordinary `Status` values. These errors cover
//! wiring mistakes made while assembling brains.
use thiserror::Error;

use game_core::EntityId;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("actor {0} does not exist")]
    UnknownActor(EntityId),

    #[error("unknown task '{0}'")]
    UnknownTask(String),

    #[error("unknown condition '{0}'")]
    UnknownCondition(String),

    #[error("runtime needs a world to drive")]
    MissingWorld,

    #[error("unknown AI kind '{0}'")]
    UnknownAiKind(String),

    #[error("invalid parameter '{value}' for '{leaf}'")]
    InvalidParameter { leaf: String, value: String },
}
