//! Teacher lesson hourly rate lifecycle.
//!
//! A rate toggles between ACTIVE and INACTIVE; there is no terminal status.

use crate::core::{Edge, StatusMachine, StatusRecord, TransitionTable};

crate::status_enum! {
    pub enum RateStatusValue {
        Active = "ACTIVE" => "Active",
        Inactive = "INACTIVE" => "Inactive",
    }
}

crate::transition_enum! {
    pub enum RateStatusTransition {
        Activate = "ACTIVATE" => "Activate",
        Deactivate = "DEACTIVATE" => "Deactivate",
    }
}

crate::entity_id! {
    /// Key of a teacher's hourly rate.
    pub struct TeacherLessonHourlyRateId;
}

use RateStatusTransition as T;
use RateStatusValue as S;

const RATE_EDGES: &[Edge<S, T>] = &[
    Edge::new(S::Active, T::Deactivate, S::Inactive),
    Edge::new(S::Inactive, T::Activate, S::Active),
];

pub static RATE_TABLE: TransitionTable<S, T> = TransitionTable::from_static(RATE_EDGES);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RateMachine;

impl StatusMachine for RateMachine {
    type Status = RateStatusValue;
    type Transition = RateStatusTransition;
    type EntityId = TeacherLessonHourlyRateId;

    const ENTITY: &'static str = "TeacherLessonHourlyRate";
    const FOREIGN_KEY: &'static str = "teacherLessonHourlyRateId";

    fn table() -> &'static TransitionTable<S, T> {
        &RATE_TABLE
    }

    fn initial_status() -> S {
        S::Active
    }
}

pub type TeacherLessonHourlyRateStatus = StatusRecord<RateMachine>;
