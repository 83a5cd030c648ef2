//! Goal lifecycle.
//!
//! ```text
//! CREATED ──START──▶ IN_PROGRESS ──COMPLETE──▶ ACHIEVED
//!    │                    │                       │
//!    └──────ABANDON───────┴────────ABANDON────────┴──▶ ABANDONED (terminal)
//! ```

use crate::core::{Edge, StatusMachine, StatusRecord, TransitionTable};

crate::status_enum! {
    /// Status of a student's goal.
    pub enum GoalStatusValue {
        Created = "CREATED" => "Created",
        InProgress = "IN_PROGRESS" => "In Progress",
        Achieved = "ACHIEVED" => "Achieved",
        Abandoned = "ABANDONED" => "Abandoned",
    }
}

crate::transition_enum! {
    /// Action requested on a goal.
    pub enum GoalStatusTransition {
        Start = "START" => "Start",
        Complete = "COMPLETE" => "Mark Achieved",
        Abandon = "ABANDON" => "Abandon",
    }
}

crate::entity_id! {
    /// Key of a goal.
    pub struct GoalId;
}

use GoalStatusTransition as T;
use GoalStatusValue as S;

// ACHIEVED -> ABANDON is kept pending product review; a separate VOID
// transition was proposed for retracting an achieved goal.
const GOAL_EDGES: &[Edge<S, T>] = &[
    Edge::new(S::Created, T::Start, S::InProgress),
    Edge::new(S::Created, T::Abandon, S::Abandoned),
    Edge::new(S::InProgress, T::Complete, S::Achieved),
    Edge::new(S::InProgress, T::Abandon, S::Abandoned),
    Edge::new(S::Achieved, T::Abandon, S::Abandoned),
];

pub static GOAL_TABLE: TransitionTable<S, T> = TransitionTable::from_static(GOAL_EDGES);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GoalMachine;

impl StatusMachine for GoalMachine {
    type Status = GoalStatusValue;
    type Transition = GoalStatusTransition;
    type EntityId = GoalId;

    const ENTITY: &'static str = "Goal";
    const FOREIGN_KEY: &'static str = "goalId";

    fn table() -> &'static TransitionTable<S, T> {
        &GOAL_TABLE
    }

    fn initial_status() -> S {
        S::Created
    }
}

/// Status record of a goal.
pub type GoalStatus = StatusRecord<GoalMachine>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WireEnum;

    #[test]
    fn documented_edges() {
        let cases = [
            (S::Created, T::Start, S::InProgress),
            (S::Created, T::Abandon, S::Abandoned),
            (S::InProgress, T::Complete, S::Achieved),
            (S::InProgress, T::Abandon, S::Abandoned),
            (S::Achieved, T::Abandon, S::Abandoned),
        ];
        for (from, transition, to) in cases {
            assert!(GoalMachine::is_valid_transition(from, transition));
            assert_eq!(GoalMachine::resulting_status(from, transition), Some(to));
        }
    }

    #[test]
    fn achieved_cannot_restart() {
        assert!(!GoalMachine::is_valid_transition(S::Achieved, T::Start));
        assert!(GoalMachine::transition(S::Achieved, T::Complete).is_err());
    }

    #[test]
    fn abandoned_is_terminal() {
        assert!(GoalMachine::is_terminal(S::Abandoned));
        assert!(GoalMachine::transitions_from(S::Abandoned).is_empty());
    }

    #[test]
    fn labels() {
        assert_eq!(S::InProgress.display_label(), "In Progress");
        assert_eq!(T::Complete.display_label(), "Mark Achieved");
    }

    #[test]
    fn table_is_well_formed() {
        assert!(GOAL_TABLE.validate(GoalMachine::initial_status()).is_success());
    }
}
