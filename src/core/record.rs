//! Immutable status records.
//!
//! One record is written per status change. Records are never updated in
//! place; an entity's history is the ordered list of its records.

use crate::core::machine::StatusMachine;
use chrono::{DateTime, Utc};
use serde::de::{Error as _, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Timestamped snapshot of an entity's status.
///
/// The record is a plain data holder: it does not check that its status is
/// reachable from the previous one. Validate the transition first, through
/// [`StatusMachine::transition`] or [`StatusHistory::apply`](crate::core::StatusHistory::apply).
///
/// # Example
///
/// ```rust
/// use cadence::machines::goal::{GoalId, GoalStatus, GoalStatusValue};
/// use serde_json::json;
/// use uuid::Uuid;
///
/// let record = GoalStatus::builder(Uuid::new_v4(), GoalId::new_v4(), GoalStatusValue::Achieved)
///     .context(json!({ "notes": "did great" }))
///     .build();
///
/// assert_eq!(record.context().unwrap()["notes"], "did great");
/// ```
///
/// On the wire the owning entity's id is keyed by
/// [`StatusMachine::FOREIGN_KEY`]:
///
/// ```json
/// { "id": "...", "goalId": "...", "status": "ACHIEVED", "context": null, "createdAt": "..." }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StatusRecord<M: StatusMachine> {
    id: Uuid,
    entity_id: M::EntityId,
    status: M::Status,
    context: Option<Value>,
    created_at: DateTime<Utc>,
}

impl<M: StatusMachine> StatusRecord<M> {
    /// Record with no context, stamped with the current time.
    pub fn new(id: Uuid, entity_id: M::EntityId, status: M::Status) -> Self {
        Self::builder(id, entity_id, status).build()
    }

    pub fn builder(id: Uuid, entity_id: M::EntityId, status: M::Status) -> StatusRecordBuilder<M> {
        StatusRecordBuilder {
            id,
            entity_id,
            status,
            context: None,
            created_at: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn entity_id(&self) -> M::EntityId {
        self.entity_id
    }

    pub fn status(&self) -> M::Status {
        self.status
    }

    /// Free-form metadata attached to the change, such as completion notes.
    pub fn context(&self) -> Option<&Value> {
        self.context.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl<M: StatusMachine> Serialize for StatusRecord<M> {
    fn serialize<Se: Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry(M::FOREIGN_KEY, &self.entity_id)?;
        map.serialize_entry("status", &self.status)?;
        map.serialize_entry("context", &self.context)?;
        map.serialize_entry("createdAt", &self.created_at)?;
        map.end()
    }
}

impl<'de, M: StatusMachine> Deserialize<'de> for StatusRecord<M> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RecordVisitor(PhantomData))
    }
}

struct RecordVisitor<M>(PhantomData<M>);

impl<'de, M: StatusMachine> Visitor<'de> for RecordVisitor<M> {
    type Value = StatusRecord<M>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} status record", M::ENTITY)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut id = None;
        let mut entity_id = None;
        let mut status = None;
        let mut context = None;
        let mut created_at = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "id" => id = Some(map.next_value()?),
                "status" => status = Some(map.next_value()?),
                "context" => context = map.next_value::<Option<Value>>()?,
                "createdAt" => created_at = Some(map.next_value()?),
                key if key == M::FOREIGN_KEY => entity_id = Some(map.next_value()?),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(StatusRecord {
            id: id.ok_or_else(|| A::Error::missing_field("id"))?,
            entity_id: entity_id
                .ok_or_else(|| A::Error::missing_field(M::FOREIGN_KEY))?,
            status: status.ok_or_else(|| A::Error::missing_field("status"))?,
            context,
            created_at: created_at
                .ok_or_else(|| A::Error::missing_field("createdAt"))?,
        })
    }
}

/// Builder for the optional fields of a [`StatusRecord`].
#[derive(Debug)]
pub struct StatusRecordBuilder<M: StatusMachine> {
    id: Uuid,
    entity_id: M::EntityId,
    status: M::Status,
    context: Option<Value>,
    created_at: Option<DateTime<Utc>>,
}

impl<M: StatusMachine> StatusRecordBuilder<M> {
    pub fn context(mut self, context: Value) -> Self {
        self.context = Some(context);
        self
    }

    /// Set or clear the context.
    pub fn maybe_context(mut self, context: Option<Value>) -> Self {
        self.context = context;
        self
    }

    /// Override the creation time. Defaults to the time of [`build`](Self::build).
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn build(self) -> StatusRecord<M> {
        StatusRecord {
            id: self.id,
            entity_id: self.entity_id,
            status: self.status,
            context: self.context,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}
