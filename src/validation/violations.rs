//! Structural defects a transition table can have.

use thiserror::Error;

/// A broken table invariant, named by wire values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableViolation {
    #[error("Transition '{transition}' from status '{from}' is defined more than once")]
    DuplicateEdge { from: String, transition: String },

    #[error("Transition '{transition}' leaves status '{state}' unchanged")]
    SelfLoop { state: String, transition: String },

    #[error("Status '{state}' is unreachable from initial status '{initial}'")]
    UnreachableState { state: String, initial: String },
}
