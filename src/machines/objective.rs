//! Objective lifecycle.
//!
//! Objectives break a goal into steps and follow the same table shape as
//! goals.

use crate::core::{Edge, StatusMachine, StatusRecord, TransitionTable};

crate::status_enum! {
    /// Status of an objective within a goal.
    pub enum ObjectiveStatusValue {
        Created = "CREATED" => "Created",
        InProgress = "IN_PROGRESS" => "In Progress",
        Achieved = "ACHIEVED" => "Achieved",
        Abandoned = "ABANDONED" => "Abandoned",
    }
}

crate::transition_enum! {
    /// Action requested on an objective.
    pub enum ObjectiveStatusTransition {
        Start = "START" => "Start",
        Complete = "COMPLETE" => "Complete",
        Abandon = "ABANDON" => "Abandon",
    }
}

crate::entity_id! {
    /// Key of an objective.
    pub struct ObjectiveId;
}

use ObjectiveStatusTransition as T;
use ObjectiveStatusValue as S;

const OBJECTIVE_EDGES: &[Edge<S, T>] = &[
    Edge::new(S::Created, T::Start, S::InProgress),
    Edge::new(S::Created, T::Abandon, S::Abandoned),
    Edge::new(S::InProgress, T::Complete, S::Achieved),
    Edge::new(S::InProgress, T::Abandon, S::Abandoned),
    Edge::new(S::Achieved, T::Abandon, S::Abandoned),
];

pub static OBJECTIVE_TABLE: TransitionTable<S, T> = TransitionTable::from_static(OBJECTIVE_EDGES);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ObjectiveMachine;

impl StatusMachine for ObjectiveMachine {
    type Status = ObjectiveStatusValue;
    type Transition = ObjectiveStatusTransition;
    type EntityId = ObjectiveId;

    const ENTITY: &'static str = "Objective";
    const FOREIGN_KEY: &'static str = "objectiveId";

    fn table() -> &'static TransitionTable<S, T> {
        &OBJECTIVE_TABLE
    }

    fn initial_status() -> S {
        S::Created
    }
}

/// Status record of an objective.
pub type ObjectiveStatus = StatusRecord<ObjectiveMachine>;
