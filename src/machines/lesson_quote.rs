//! Lesson quote lifecycle.
//!
//! A teacher answers a lesson request with a quote; the student accepts or
//! rejects it, or it expires. Every outcome is terminal.

use crate::core::{Edge, StatusMachine, StatusRecord, TransitionTable};

crate::status_enum! {
    pub enum LessonQuoteStatusValue {
        Created = "CREATED" => "Pending",
        Accepted = "ACCEPTED" => "Accepted",
        Rejected = "REJECTED" => "Declined",
        Expired = "EXPIRED" => "Expired",
    }
}

crate::transition_enum! {
    pub enum LessonQuoteStatusTransition {
        Accept = "ACCEPT" => "Accept Quote",
        Reject = "REJECT" => "Decline Quote",
        Expire = "EXPIRE" => "Expire Quote",
    }
}

crate::entity_id! {
    pub struct LessonQuoteId;
}

use LessonQuoteStatusTransition as T;
use LessonQuoteStatusValue as S;

const LESSON_QUOTE_EDGES: &[Edge<S, T>] = &[
    Edge::new(S::Created, T::Accept, S::Accepted),
    Edge::new(S::Created, T::Reject, S::Rejected),
    Edge::new(S::Created, T::Expire, S::Expired),
];

pub static LESSON_QUOTE_TABLE: TransitionTable<S, T> =
    TransitionTable::from_static(LESSON_QUOTE_EDGES);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LessonQuoteMachine;

impl StatusMachine for LessonQuoteMachine {
    type Status = LessonQuoteStatusValue;
    type Transition = LessonQuoteStatusTransition;
    type EntityId = LessonQuoteId;

    const ENTITY: &'static str = "LessonQuote";
    const FOREIGN_KEY: &'static str = "lessonQuoteId";

    fn table() -> &'static TransitionTable<S, T> {
        &LESSON_QUOTE_TABLE
    }

    fn initial_status() -> S {
        S::Created
    }
}

pub type LessonQuoteStatus = StatusRecord<LessonQuoteMachine>;
