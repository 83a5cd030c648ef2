//! Immutable transition tables.
//!
//! A table maps `(current status, transition)` to the resulting status. It is
//! stored as a flat list of edges; tables in this crate hold fewer than ten
//! edges, so lookups are a linear scan.

use crate::core::error::InvalidTransition;
use crate::core::status::{Status, Transition};
use crate::validation::{rules, TableViolation};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// One allowed move: `from` --`transition`--> `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<S, T> {
    pub from: S,
    pub transition: T,
    pub to: S,
}

impl<S, T> Edge<S, T> {
    pub const fn new(from: S, transition: T, to: S) -> Self {
        Self {
            from,
            transition,
            to,
        }
    }
}

/// Static lookup from `(status, transition)` to the next status.
///
/// A status with no outgoing edges is terminal. Each `(status, transition)`
/// pair appears at most once; [`TransitionTable::validate`] checks this.
///
/// # Example
///
/// ```rust
/// use cadence::machines::rate::{RateStatusTransition, RateStatusValue, RATE_TABLE};
///
/// assert_eq!(
///     RATE_TABLE.resulting_status(RateStatusValue::Inactive, RateStatusTransition::Activate),
///     Some(RateStatusValue::Active)
/// );
/// assert!(!RATE_TABLE.is_valid_transition(RateStatusValue::Active, RateStatusTransition::Activate));
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTable<S, T>
where
    S: Clone + 'static,
    T: Clone + 'static,
{
    edges: Cow<'static, [Edge<S, T>]>,
}

impl<S, T> TransitionTable<S, T>
where
    S: Clone + 'static,
    T: Clone + 'static,
{
    /// Wrap a static edge list. Usable in `static` items.
    pub const fn from_static(edges: &'static [Edge<S, T>]) -> Self {
        Self {
            edges: Cow::Borrowed(edges),
        }
    }

    /// Build a table from edges assembled at runtime.
    ///
    /// Prefer [`TableBuilder`](crate::builder::TableBuilder), which also
    /// validates the result.
    pub fn from_edges(edges: Vec<Edge<S, T>>) -> Self {
        Self {
            edges: Cow::Owned(edges),
        }
    }

    /// All edges, in declaration order.
    pub fn edges(&self) -> &[Edge<S, T>] {
        &self.edges
    }
}

impl<S: Status, T: Transition> TransitionTable<S, T> {
    fn edge(&self, current: S, transition: T) -> Option<&Edge<S, T>> {
        self.edges
            .iter()
            .find(|edge| edge.from == current && edge.transition == transition)
    }

    /// True iff `transition` is allowed from `current`.
    pub fn is_valid_transition(&self, current: S, transition: T) -> bool {
        self.edge(current, transition).is_some()
    }

    /// The status `transition` leads to from `current`, or `None` when the
    /// transition is not allowed.
    pub fn resulting_status(&self, current: S, transition: T) -> Option<S> {
        self.edge(current, transition).map(|edge| edge.to)
    }

    /// Like [`resulting_status`](Self::resulting_status), but reports the
    /// offending pair as an error.
    pub fn transition(&self, current: S, transition: T) -> Result<S, InvalidTransition> {
        self.resulting_status(current, transition)
            .ok_or_else(|| InvalidTransition::new(transition.name(), current.name()))
    }

    /// Transitions allowed from `current`, in declaration order.
    pub fn transitions_from(&self, current: S) -> Vec<T> {
        self.edges
            .iter()
            .filter(|edge| edge.from == current)
            .map(|edge| edge.transition)
            .collect()
    }

    /// The transition that moves `from` directly to `to`, if any.
    ///
    /// Used for requests that name a target status instead of an action.
    pub fn transition_between(&self, from: S, to: S) -> Option<T> {
        self.edges
            .iter()
            .find(|edge| edge.from == from && edge.to == to)
            .map(|edge| edge.transition)
    }

    /// A status with no outgoing edges.
    pub fn is_terminal(&self, status: S) -> bool {
        !self.edges.iter().any(|edge| edge.from == status)
    }

    /// Statuses with no outgoing edges, in declaration order of `S`.
    pub fn terminal_statuses(&self) -> Vec<S> {
        S::all()
            .iter()
            .copied()
            .filter(|status| self.is_terminal(*status))
            .collect()
    }

    /// Check the structural invariants of the table, accumulating every
    /// violation instead of stopping at the first.
    pub fn validate(&self, initial: S) -> Validation<(), NonEmptyVec<TableViolation>> {
        rules::validate_table(self, initial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machines::goal::{GoalStatusTransition as T, GoalStatusValue as S, GOAL_TABLE};

    #[test]
    fn documented_edges_resolve() {
        assert_eq!(GOAL_TABLE.resulting_status(S::Created, T::Start), Some(S::InProgress));
        assert_eq!(GOAL_TABLE.resulting_status(S::InProgress, T::Complete), Some(S::Achieved));
        assert!(GOAL_TABLE.is_valid_transition(S::Achieved, T::Abandon));
    }

    #[test]
    fn missing_edges_are_invalid() {
        assert!(!GOAL_TABLE.is_valid_transition(S::Achieved, T::Start));
        assert_eq!(GOAL_TABLE.resulting_status(S::Achieved, T::Start), None);
        assert_eq!(
            GOAL_TABLE.transition(S::Achieved, T::Start),
            Err(InvalidTransition::new("START", "ACHIEVED"))
        );
    }

    #[test]
    fn transitions_from_lists_outgoing_actions() {
        assert_eq!(
            GOAL_TABLE.transitions_from(S::Created),
            vec![T::Start, T::Abandon]
        );
        assert!(GOAL_TABLE.transitions_from(S::Abandoned).is_empty());
    }

    #[test]
    fn transition_between_finds_reverse_edge() {
        assert_eq!(
            GOAL_TABLE.transition_between(S::InProgress, S::Achieved),
            Some(T::Complete)
        );
        assert_eq!(GOAL_TABLE.transition_between(S::Created, S::Achieved), None);
    }

    #[test]
    fn terminal_statuses_have_no_edges() {
        assert_eq!(GOAL_TABLE.terminal_statuses(), vec![S::Abandoned]);
        assert!(!GOAL_TABLE.is_terminal(S::Achieved));
    }

    #[test]
    fn owned_tables_behave_like_static_ones() {
        let table = TransitionTable::from_edges(GOAL_TABLE.edges().to_vec());
        assert_eq!(table.edges().len(), GOAL_TABLE.edges().len());
        assert_eq!(table.resulting_status(S::Created, T::Abandon), Some(S::Abandoned));
    }
}
