//! Errors raised by status lookups and parsing.

use thiserror::Error;

/// A requested transition has no edge from the current status.
///
/// This is the expected, client-driven failure: the caller asked for an
/// action the current status does not allow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid status transition '{transition}' from status '{from}'")]
pub struct InvalidTransition {
    /// Wire name of the requested transition
    pub transition: String,
    /// Wire name of the status the transition was requested from
    pub from: String,
}

impl InvalidTransition {
    pub fn new(transition: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            transition: transition.into(),
            from: from.into(),
        }
    }
}

/// A raw string did not name any member of a status or transition enum.
///
/// Usually a data-integrity problem: a legacy or corrupted value read back
/// from storage, or a typo in an inbound request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} '{value}'")]
pub struct UnknownValue {
    /// Either "status" or "transition"
    pub kind: &'static str,
    /// The raw value that failed to parse
    pub value: String,
}

impl UnknownValue {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_transition_message_names_transition_and_status() {
        let err = InvalidTransition::new("START", "ACHIEVED");
        assert_eq!(
            err.to_string(),
            "Invalid status transition 'START' from status 'ACHIEVED'"
        );
    }

    #[test]
    fn unknown_value_message_names_kind() {
        let err = UnknownValue::new("status", "FOO");
        assert_eq!(err.to_string(), "Unknown status 'FOO'");
        assert_eq!(err.kind, "status");
    }
}
