//! The per-entity state machine contract.

use crate::core::error::InvalidTransition;
use crate::core::status::{Status, Transition};
use crate::core::table::TransitionTable;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};

/// Binds an entity's status enum, transition enum, owner id type and
/// transition table into one machine.
///
/// Implementors are zero-sized markers; all operations are provided and
/// delegate to the static table. Every operation is pure.
///
/// # Example
///
/// ```rust
/// use cadence::core::StatusMachine;
/// use cadence::machines::goal::{GoalMachine, GoalStatusTransition, GoalStatusValue};
///
/// let next = GoalMachine::resulting_status(GoalStatusValue::Created, GoalStatusTransition::Start);
/// assert_eq!(next, Some(GoalStatusValue::InProgress));
///
/// let err = GoalMachine::transition(GoalStatusValue::Achieved, GoalStatusTransition::Start)
///     .unwrap_err();
/// assert_eq!(err.to_string(), "Invalid status transition 'START' from status 'ACHIEVED'");
/// ```
pub trait StatusMachine: Copy + Debug + PartialEq + Send + Sync + 'static {
    type Status: Status;
    type Transition: Transition;
    /// Typed key of the entity owning the status records.
    type EntityId: Copy + Eq + Debug + Display + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Entity name used in logs and descriptors, e.g. `Goal`.
    const ENTITY: &'static str;

    /// JSON key of the owning entity in a status record, e.g. `goalId`.
    const FOREIGN_KEY: &'static str;

    fn table() -> &'static TransitionTable<Self::Status, Self::Transition>;

    /// Status a freshly created entity starts in.
    fn initial_status() -> Self::Status;

    fn is_valid_transition(current: Self::Status, transition: Self::Transition) -> bool {
        Self::table().is_valid_transition(current, transition)
    }

    fn resulting_status(
        current: Self::Status,
        transition: Self::Transition,
    ) -> Option<Self::Status> {
        Self::table().resulting_status(current, transition)
    }

    fn transition(
        current: Self::Status,
        transition: Self::Transition,
    ) -> Result<Self::Status, InvalidTransition> {
        Self::table().transition(current, transition)
    }

    fn transitions_from(current: Self::Status) -> Vec<Self::Transition> {
        Self::table().transitions_from(current)
    }

    /// The transition leading directly from `from` to `to`, if any.
    fn transition_between(from: Self::Status, to: Self::Status) -> Option<Self::Transition> {
        Self::table().transition_between(from, to)
    }

    fn is_terminal(status: Self::Status) -> bool {
        Self::table().is_terminal(status)
    }
}
