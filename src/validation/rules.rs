//! Table checks using Validation.

use crate::core::{Status, Transition, TransitionTable};
use crate::validation::violations::TableViolation;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<TableViolation>>;

/// Run every table check, accumulating ALL violations.
pub fn validate_table<S: Status, T: Transition>(
    table: &TransitionTable<S, T>,
    initial: S,
) -> Check {
    let mut checks: Vec<Check> = Vec::new();
    checks.extend(check_duplicates(table));
    checks.extend(check_self_loops(table));
    checks.extend(check_reachability(table, initial));

    Validation::all_vec(checks).map(|_| ())
}

/// Each `(status, transition)` pair maps to exactly one next status.
pub fn check_duplicates<S: Status, T: Transition>(table: &TransitionTable<S, T>) -> Vec<Check> {
    let edges = table.edges();
    edges
        .iter()
        .enumerate()
        .map(|(i, edge)| {
            let repeated = edges[..i]
                .iter()
                .any(|prev| prev.from == edge.from && prev.transition == edge.transition);
            if repeated {
                Validation::fail(TableViolation::DuplicateEdge {
                    from: edge.from.name().to_string(),
                    transition: edge.transition.name().to_string(),
                })
            } else {
                Validation::success(())
            }
        })
        .collect()
}

/// A transition always produces a new record, so it must change the status.
pub fn check_self_loops<S: Status, T: Transition>(table: &TransitionTable<S, T>) -> Vec<Check> {
    table
        .edges()
        .iter()
        .map(|edge| {
            if edge.from == edge.to {
                Validation::fail(TableViolation::SelfLoop {
                    state: edge.from.name().to_string(),
                    transition: edge.transition.name().to_string(),
                })
            } else {
                Validation::success(())
            }
        })
        .collect()
}

/// Every status is reachable from the initial one.
pub fn check_reachability<S: Status, T: Transition>(
    table: &TransitionTable<S, T>,
    initial: S,
) -> Vec<Check> {
    let mut reached = HashSet::from([initial]);
    let mut frontier = vec![initial];

    while let Some(state) = frontier.pop() {
        for edge in table.edges().iter().filter(|edge| edge.from == state) {
            if reached.insert(edge.to) {
                frontier.push(edge.to);
            }
        }
    }

    S::all()
        .iter()
        .map(|state| {
            if reached.contains(state) {
                Validation::success(())
            } else {
                Validation::fail(TableViolation::UnreachableState {
                    state: state.name().to_string(),
                    initial: initial.name().to_string(),
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Edge;
    use crate::machines::goal::{GoalStatusTransition as T, GoalStatusValue as S};

    fn violations(check: Check) -> Vec<TableViolation> {
        match check {
            Validation::Failure(errors) => errors.iter().cloned().collect(),
            Validation::Success(_) => Vec::new(),
        }
    }

    #[test]
    fn well_formed_table_passes() {
        let table = TransitionTable::from_edges(vec![
            Edge::new(S::Created, T::Start, S::InProgress),
            Edge::new(S::InProgress, T::Complete, S::Achieved),
            Edge::new(S::Achieved, T::Abandon, S::Abandoned),
        ]);

        assert!(validate_table(&table, S::Created).is_success());
    }

    #[test]
    fn duplicate_edge_is_reported() {
        let table = TransitionTable::from_edges(vec![
            Edge::new(S::Created, T::Start, S::InProgress),
            Edge::new(S::Created, T::Abandon, S::Abandoned),
            Edge::new(S::InProgress, T::Complete, S::Achieved),
            Edge::new(S::InProgress, T::Complete, S::Abandoned),
        ]);

        assert_eq!(
            check_duplicates(&table)
                .into_iter()
                .flat_map(violations)
                .collect::<Vec<_>>(),
            vec![TableViolation::DuplicateEdge {
                from: "IN_PROGRESS".to_string(),
                transition: "COMPLETE".to_string(),
            }]
        );
    }

    #[test]
    fn self_loop_is_reported() {
        let table = TransitionTable::from_edges(vec![
            Edge::new(S::Created, T::Start, S::InProgress),
            Edge::new(S::InProgress, T::Complete, S::Achieved),
            Edge::new(S::Achieved, T::Abandon, S::Abandoned),
            Edge::new(S::Abandoned, T::Abandon, S::Abandoned),
        ]);

        let found = violations(validate_table(&table, S::Created));
        assert_eq!(
            found,
            vec![TableViolation::SelfLoop {
                state: "ABANDONED".to_string(),
                transition: "ABANDON".to_string(),
            }]
        );
    }

    #[test]
    fn unreachable_state_is_reported() {
        let table = TransitionTable::from_edges(vec![
            Edge::new(S::Created, T::Start, S::InProgress),
            Edge::new(S::InProgress, T::Abandon, S::Abandoned),
            Edge::new(S::Achieved, T::Abandon, S::Abandoned),
        ]);

        let found = check_reachability(&table, S::Created)
            .into_iter()
            .flat_map(violations)
            .collect::<Vec<_>>();
        assert_eq!(
            found,
            vec![TableViolation::UnreachableState {
                state: "ACHIEVED".to_string(),
                initial: "CREATED".to_string(),
            }]
        );
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let table = TransitionTable::from_edges(vec![
            Edge::new(S::Created, T::Start, S::InProgress),
            Edge::new(S::Created, T::Start, S::Abandoned),
            Edge::new(S::InProgress, T::Start, S::InProgress),
        ]);

        let found = violations(validate_table(&table, S::Created));

        assert!(found.contains(&TableViolation::DuplicateEdge {
            from: "CREATED".to_string(),
            transition: "START".to_string(),
        }));
        assert!(found.contains(&TableViolation::SelfLoop {
            state: "IN_PROGRESS".to_string(),
            transition: "START".to_string(),
        }));
        assert!(found.contains(&TableViolation::UnreachableState {
            state: "ACHIEVED".to_string(),
            initial: "CREATED".to_string(),
        }));
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn reachability_follows_edges_transitively() {
        let table = TransitionTable::from_edges(vec![
            Edge::new(S::Created, T::Start, S::InProgress),
            Edge::new(S::InProgress, T::Complete, S::Achieved),
        ]);

        let found = violations(validate_table(&table, S::Created));
        assert_eq!(
            found,
            vec![TableViolation::UnreachableState {
                state: "ABANDONED".to_string(),
                initial: "CREATED".to_string(),
            }]
        );
    }
}
