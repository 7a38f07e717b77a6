//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// # Turn-based Semantics
///
/// Every evaluation returns within the same scheduler turn:
/// - Conditions evaluate immediately (e.g., "Is enemy adjacent?")
/// - Actions commit or reject their world mutation before returning
/// - `Running` only tells the caller the action spans several turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action executed without errors.
    Success,

    /// The behavior needs more scheduler turns to complete.
    Running,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be executed (e.g., invalid move).
    Failure,

    /// The node has no meaningful outcome this call.
    ///
    /// Produced by a Condition with no predicate bound, or by leaf tasks
    /// that cannot evaluate. Control nodes treat it as a non-match and
    /// propagate it unchanged.
    Undefined,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` if this status is `Undefined`.
    #[inline]
    pub fn is_undefined(self) -> bool {
        matches!(self, Status::Undefined)
    }

    /// Maps a boolean check onto Success/Failure.
    #[inline]
    pub fn from_bool(value: bool) -> Self {
        if value {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

impl From<bool> for Status {
    fn from(value: bool) -> Self {
        Status::from_bool(value)
    }
}
