//! Errors raised by the variant registry and the position tracker.
//!
//! `TrackerError` is the single error type returned across the crate. Every
//! variant is a terminal outcome of the call that produced it: the tracker
//! never retries and never leaves a half-applied state behind.
//!
//! Usage guidelines:
//! - `NoSuchMove` is the one recoverable input error; callers may retry with
//!   corrected notation.
//! - `AmbiguousMove` means the oracle returned two legal moves with the same
//!   rendering. Treat it as a defect signal from upstream, not user error.
//! - `EmptyHistory` and `EmptyMove` are precondition violations.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// The variant name did not normalize to a key in the registry table.
    ///
    /// Payload: the name as supplied by the caller.
    #[error("unknown variant: {0}")]
    UnknownVariant(String),

    /// The starting position lacks a usable side-to-move field.
    ///
    /// Payload: the offending position string.
    #[error("malformed position (no side-to-move field): {0}")]
    MalformedPosition(String),

    /// The notation matched none of the oracle's legal moves.
    #[error("no legal move matches: {0}")]
    NoSuchMove(String),

    /// The notation matched more than one of the oracle's legal moves.
    #[error("ambiguous move: {0}")]
    AmbiguousMove(String),

    /// `pop` was called with no moves on the stack.
    #[error("cannot pop from an empty move history")]
    EmptyHistory,

    /// A move was built from an empty notation string.
    #[error("move notation must not be empty")]
    EmptyMove,

    /// The oracle itself reported a failure.
    #[error("oracle error: {0}")]
    Oracle(String),
}

pub type TrackerResult<T> = Result<T, TrackerError>;
