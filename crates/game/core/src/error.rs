//! World mutation errors.
//!
//! Every fallible `WorldState` operation reports one of these. Leaf tasks turn
//! them into an ordinary `Failure` result; nothing here is fatal.

use crate::state::{EntityId, Position};

/// Severity level of an error, used for log levels and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Temporary condition; a different action may succeed.
    ///
    /// Examples: destination blocked, cell occupied
    Recoverable,

    /// Invalid input that should not be retried unchanged.
    ///
    /// Examples: actor not found, move longer than one step
    Validation,

    /// Unexpected state; indicates a bug in the caller or in content data.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Errors raised while mutating [`WorldState`](crate::state::WorldState).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("position {0} is out of bounds")]
    OutOfBounds(Position),

    #[error("position {0} is blocked")]
    Blocked(Position),

    #[error("position {0} is occupied")]
    Occupied(Position),

    #[error("cannot step from {from} to {to}: not adjacent")]
    NotAdjacent { from: Position, to: Position },

    #[error("nothing to mine at {0}")]
    NotMineable(Position),

    #[error("unknown actor {0}")]
    UnknownActor(EntityId),

    #[error("malformed layout: {0}")]
    MalformedLayout(String),
}

impl WorldError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Blocked(_) | Self::Occupied(_) => ErrorSeverity::Recoverable,
            Self::OutOfBounds(_) | Self::NotAdjacent { .. } | Self::NotMineable(_) => {
                ErrorSeverity::Validation
            }
            Self::UnknownActor(_) | Self::MalformedLayout(_) => ErrorSeverity::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocked_moves_are_recoverable() {
        assert!(WorldError::Occupied(Position::new(1, 1)).severity().is_recoverable());
        assert_eq!(
            WorldError::UnknownActor(EntityId(4)).severity(),
            ErrorSeverity::Internal
        );
        assert_eq!(
            WorldError::Blocked(Position::new(2, 3)).to_string(),
            "position 2,3 is blocked"
        );
    }
}
