//! Inbound status change requests.
//!
//! Clients ask for a change either by naming an action,
//! `{ "transition": "COMPLETE", "context": { "notes": "..." } }`, or by naming
//! the status they want, `{ "status": "ACHIEVED" }`. [`resolve`] checks the
//! request against the entity's current status and yields a [`Decision`] the
//! caller can persist.

use crate::core::{InvalidTransition, StatusMachine, StatusRecord, UnknownValue, WireEnum};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

/// Raw request body. Values are kept as strings so unknown names surface as
/// [`RequestError::UnknownValue`] rather than a generic parse error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChangeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

impl ChangeRequest {
    pub fn transition(transition: impl Into<String>) -> Self {
        Self {
            transition: Some(transition.into()),
            ..Self::default()
        }
    }

    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Self::default()
        }
    }

    pub fn with_context(mut self, context: Value) -> Self {
        self.context = Some(context);
        self
    }

    pub fn from_json(body: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Why a request cannot be honoured. All variants are client errors.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Request must name either a transition or a status")]
    Empty,

    #[error("Request names both a transition and a status")]
    Ambiguous,

    #[error("No transition leads from status '{from}' to status '{to}'")]
    Unreachable { from: String, to: String },

    #[error(transparent)]
    UnknownValue(#[from] UnknownValue),

    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),

    #[error("Malformed request body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A validated status change, ready to be recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision<M: StatusMachine> {
    pub from: M::Status,
    pub transition: M::Transition,
    pub next: M::Status,
    pub context: Option<Value>,
}

impl<M: StatusMachine> Decision<M> {
    /// The record to persist for this change, stamped now.
    pub fn into_record(self, record_id: Uuid, entity_id: M::EntityId) -> StatusRecord<M> {
        StatusRecord::builder(record_id, entity_id, self.next)
            .maybe_context(self.context)
            .build()
    }
}

/// Check `request` against `current` for machine `M`.
pub fn resolve<M: StatusMachine>(
    current: M::Status,
    request: ChangeRequest,
) -> Result<Decision<M>, RequestError> {
    let ChangeRequest {
        transition,
        status,
        context,
    } = request;

    let (transition, next) = match (transition, status) {
        (Some(_), Some(_)) => return Err(RequestError::Ambiguous),
        (None, None) => return Err(RequestError::Empty),
        (Some(raw), None) => {
            let transition = <M::Transition as WireEnum>::parse(&raw)?;
            (transition, M::transition(current, transition)?)
        }
        (None, Some(raw)) => {
            let target = <M::Status as WireEnum>::parse(&raw)?;
            let transition = M::transition_between(current, target)
                .ok_or_else(|| RequestError::Unreachable {
                    from: current.name().to_string(),
                    to: target.name().to_string(),
                })?;
            (transition, target)
        }
    };

    Ok(Decision {
        from: current,
        transition,
        next,
        context,
    })
}
