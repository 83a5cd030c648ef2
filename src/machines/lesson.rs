//! Lesson lifecycle.
//!
//! ```text
//! REQUESTED ──ACCEPT──▶ ACCEPTED ──START──▶ STARTED ──COMPLETE──────────▶ COMPLETED
//!     │                                        │
//!     └──REJECT──▶ REJECTED                    └──MARK_INCOMPLETE──▶ INCOMPLETE
//! ```
//!
//! REJECTED, COMPLETED and INCOMPLETE are terminal.

use crate::core::{Edge, StatusMachine, StatusRecord, TransitionTable};

crate::status_enum! {
    /// Status of a booked or requested lesson.
    pub enum LessonStatusValue {
        Requested = "REQUESTED" => "Requested",
        Accepted = "ACCEPTED" => "Accepted",
        Rejected = "REJECTED" => "Rejected",
        Started = "STARTED" => "In Session",
        Completed = "COMPLETED" => "Completed",
        Incomplete = "INCOMPLETE" => "Incomplete",
    }
}

crate::transition_enum! {
    pub enum LessonStatusTransition {
        Accept = "ACCEPT" => "Accept Lesson",
        Reject = "REJECT" => "Reject Lesson",
        Start = "START" => "Start Lesson",
        Complete = "COMPLETE" => "Complete Lesson",
        /// The lesson started but could not be finished.
        MarkIncomplete = "MARK_INCOMPLETE" => "Mark Incomplete",
    }
}

crate::entity_id! {
    pub struct LessonId;
}

use LessonStatusTransition as T;
use LessonStatusValue as S;

const LESSON_EDGES: &[Edge<S, T>] = &[
    Edge::new(S::Requested, T::Accept, S::Accepted),
    Edge::new(S::Requested, T::Reject, S::Rejected),
    Edge::new(S::Accepted, T::Start, S::Started),
    Edge::new(S::Started, T::Complete, S::Completed),
    Edge::new(S::Started, T::MarkIncomplete, S::Incomplete),
];

pub static LESSON_TABLE: TransitionTable<S, T> = TransitionTable::from_static(LESSON_EDGES);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LessonMachine;

impl StatusMachine for LessonMachine {
    type Status = LessonStatusValue;
    type Transition = LessonStatusTransition;
    type EntityId = LessonId;

    const ENTITY: &'static str = "Lesson";
    const FOREIGN_KEY: &'static str = "lessonId";

    fn table() -> &'static TransitionTable<S, T> {
        &LESSON_TABLE
    }

    fn initial_status() -> S {
        S::Requested
    }
}

pub type LessonStatus = StatusRecord<LessonMachine>;
