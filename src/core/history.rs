//! Status history of a single entity.
//!
//! Models the owning entity's side of the relationship: an append-only list
//! of [`StatusRecord`]s whose last element is the entity's current status.
//! History values are immutable; every operation returns a new history.

use crate::core::error::InvalidTransition;
use crate::core::machine::StatusMachine;
use crate::core::record::StatusRecord;
use crate::core::status::WireEnum;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use stillwater::NonEmptyVec;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

/// Errors raised while building or extending a history.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HistoryError {
    #[error("A status history needs at least one record")]
    Empty,

    #[error("Record belongs to entity {found}, history belongs to {expected}")]
    ForeignRecord { expected: String, found: String },

    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),
}

/// Ordered, non-empty status history of one entity.
///
/// # Example
///
/// ```rust
/// use cadence::core::StatusHistory;
/// use cadence::machines::goal::{GoalId, GoalMachine, GoalStatusTransition, GoalStatusValue};
/// use uuid::Uuid;
///
/// let history = StatusHistory::<GoalMachine>::start(GoalId::new_v4(), Uuid::new_v4());
/// let history = history
///     .apply(Uuid::new_v4(), GoalStatusTransition::Start, None)
///     .unwrap();
///
/// assert_eq!(history.current_status(), GoalStatusValue::InProgress);
/// assert_eq!(history.path(), vec![GoalStatusValue::Created, GoalStatusValue::InProgress]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    bound = "",
    try_from = "Vec<StatusRecord<M>>",
    into = "Vec<StatusRecord<M>>"
)]
pub struct StatusHistory<M: StatusMachine> {
    records: NonEmptyVec<StatusRecord<M>>,
}

impl<M: StatusMachine> TryFrom<Vec<StatusRecord<M>>> for StatusHistory<M> {
    type Error = HistoryError;

    fn try_from(records: Vec<StatusRecord<M>>) -> Result<Self, Self::Error> {
        Self::from_records(records)
    }
}

impl<M: StatusMachine> From<StatusHistory<M>> for Vec<StatusRecord<M>> {
    fn from(history: StatusHistory<M>) -> Self {
        history.records.into_vec()
    }
}

impl<M: StatusMachine> StatusHistory<M> {
    /// Begin a history with the machine's initial status, stamped now.
    pub fn start(entity_id: M::EntityId, record_id: Uuid) -> Self {
        Self::start_at(entity_id, record_id, Utc::now())
    }

    /// [`start`](Self::start) with an explicit creation time.
    pub fn start_at(entity_id: M::EntityId, record_id: Uuid, at: DateTime<Utc>) -> Self {
        Self::new(
            StatusRecord::builder(record_id, entity_id, M::initial_status())
                .created_at(at)
                .build(),
        )
    }

    /// Begin a history from an existing first record.
    pub fn new(initial: StatusRecord<M>) -> Self {
        Self {
            records: NonEmptyVec::singleton(initial),
        }
    }

    /// Rebuild a history from stored records, oldest first.
    ///
    /// Transitions between stored records are not re-validated; the
    /// records were validated when they were written.
    pub fn from_records(records: Vec<StatusRecord<M>>) -> Result<Self, HistoryError> {
        let records = NonEmptyVec::from_vec(records).ok_or(HistoryError::Empty)?;
        let entity_id = records.head().entity_id();

        if let Some(foreign) = records.iter().find(|r| r.entity_id() != entity_id) {
            return Err(HistoryError::ForeignRecord {
                expected: entity_id.to_string(),
                found: foreign.entity_id().to_string(),
            });
        }

        Ok(Self { records })
    }

    pub fn entity_id(&self) -> M::EntityId {
        self.current().entity_id()
    }

    /// The most recent record.
    pub fn current(&self) -> &StatusRecord<M> {
        self.records.last()
    }

    pub fn current_status(&self) -> M::Status {
        self.current().status()
    }

    /// All records, oldest first.
    pub fn records(&self) -> &NonEmptyVec<StatusRecord<M>> {
        &self.records
    }

    /// Whether the current status allows no further transitions.
    pub fn is_terminal(&self) -> bool {
        M::is_terminal(self.current_status())
    }

    /// Append an already-validated record, returning a new history.
    ///
    /// Only the owning entity is checked; use [`apply`](Self::apply) to
    /// validate the transition as well.
    pub fn record(&self, record: StatusRecord<M>) -> Result<Self, HistoryError> {
        if record.entity_id() != self.entity_id() {
            return Err(HistoryError::ForeignRecord {
                expected: self.entity_id().to_string(),
                found: record.entity_id().to_string(),
            });
        }

        let mut records = self.records.clone();
        records.push(record);
        Ok(Self { records })
    }

    /// Validate `transition` against the current status and append the
    /// resulting record, stamped now.
    pub fn apply(
        &self,
        record_id: Uuid,
        transition: M::Transition,
        context: Option<Value>,
    ) -> Result<Self, HistoryError> {
        self.apply_at(record_id, transition, context, Utc::now())
    }

    /// [`apply`](Self::apply) with an explicit creation time.
    pub fn apply_at(
        &self,
        record_id: Uuid,
        transition: M::Transition,
        context: Option<Value>,
        at: DateTime<Utc>,
    ) -> Result<Self, HistoryError> {
        let current = self.current_status();
        let next = M::transition(current, transition).inspect_err(|err| {
            warn!(
                entity = M::ENTITY,
                entity_id = %self.entity_id(),
                error = %err,
                "rejected status transition"
            );
        })?;

        debug!(
            entity = M::ENTITY,
            entity_id = %self.entity_id(),
            from = current.name(),
            transition = transition.name(),
            to = next.name(),
            "applied status transition"
        );

        let record = StatusRecord::builder(record_id, self.entity_id(), next)
            .maybe_context(context)
            .created_at(at)
            .build();
        self.record(record)
    }

    /// Statuses traversed, oldest first.
    pub fn path(&self) -> Vec<M::Status> {
        self.records.iter().map(StatusRecord::status).collect()
    }

    /// Time between the first and the current record.
    ///
    /// `None` if the records are not in chronological order.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.records.head().created_at();
        self.current()
            .created_at()
            .signed_duration_since(first)
            .to_std()
            .ok()
    }
}
