//! Builder for transition tables assembled at runtime.

use crate::builder::error::BuildError;
use crate::core::{Edge, Status, Transition, TransitionTable};
use stillwater::validation::Validation;

/// Fluent builder for a validated [`TransitionTable`].
///
/// # Example
///
/// ```rust
/// use cadence::builder::TableBuilder;
/// use cadence::machines::rate::{RateStatusTransition as T, RateStatusValue as S};
///
/// let table = TableBuilder::new()
///     .edge(S::Active, T::Deactivate, S::Inactive)
///     .edge(S::Inactive, T::Activate, S::Active)
///     .build(S::Active)
///     .unwrap();
///
/// assert!(table.is_valid_transition(S::Inactive, T::Activate));
/// ```
pub struct TableBuilder<S: Status, T: Transition> {
    edges: Vec<Edge<S, T>>,
}

impl<S: Status, T: Transition> TableBuilder<S, T> {
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Allow `transition` from `from`, leading to `to`.
    pub fn edge(mut self, from: S, transition: T, to: S) -> Self {
        self.edges.push(Edge::new(from, transition, to));
        self
    }

    /// Add several pre-built edges at once.
    pub fn edges(mut self, edges: impl IntoIterator<Item = Edge<S, T>>) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Build the table, validating it against `initial`.
    pub fn build(self, initial: S) -> Result<TransitionTable<S, T>, BuildError> {
        if self.edges.is_empty() {
            return Err(BuildError::NoEdges);
        }

        let table = TransitionTable::from_edges(self.edges);
        match table.validate(initial) {
            Validation::Success(_) => Ok(table),
            Validation::Failure(violations) => {
                Err(BuildError::Invalid(violations.iter().cloned().collect()))
            }
        }
    }
}

impl<S: Status, T: Transition> Default for TableBuilder<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machines::lesson::{LessonStatusTransition as T, LessonStatusValue as S};
    use crate::validation::TableViolation;

    #[test]
    fn builder_requires_edges() {
        let result = TableBuilder::<S, T>::new().build(S::Requested);
        assert_eq!(result.unwrap_err(), BuildError::NoEdges);
    }

    #[test]
    fn builder_reports_violations() {
        let result = TableBuilder::new()
            .edge(S::Requested, T::Accept, S::Accepted)
            .edge(S::Requested, T::Accept, S::Rejected)
            .build(S::Requested);

        match result {
            Err(BuildError::Invalid(violations)) => {
                assert!(violations.contains(&TableViolation::DuplicateEdge {
                    from: "REQUESTED".to_string(),
                    transition: "ACCEPT".to_string(),
                }));
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, TableViolation::UnreachableState { .. })));
            }
            other => panic!("Expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn fluent_api_builds_table() {
        let table = TableBuilder::new()
            .edges(crate::machines::lesson::LESSON_TABLE.edges().iter().copied())
            .build(S::Requested)
            .unwrap();

        assert_eq!(
            table.resulting_status(S::Started, T::MarkIncomplete),
            Some(S::Incomplete)
        );
        assert!(table.is_terminal(S::Completed));
    }

    #[test]
    fn build_error_message_counts_violations() {
        let err = BuildError::Invalid(vec![TableViolation::SelfLoop {
            state: "STARTED".to_string(),
            transition: "START".to_string(),
        }]);
        assert_eq!(
            err.to_string(),
            "Transition table failed validation with 1 violation(s)"
        );
    }
}
