//! Display labels for stored status and transition values.
//!
//! Stored values can be legacy or corrupted. Label lookups over raw strings
//! never fail: an unrecognized value is logged and replaced by a fallback.

use crate::core::{StatusMachine, WireEnum};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const UNKNOWN_STATUS: &str = "Unknown Status";
pub const UNKNOWN_ACTION: &str = "Unknown Action";

/// What to show for a value that does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelFallback {
    /// Show the placeholder label.
    #[default]
    Placeholder,
    /// Show the raw stored value, or the placeholder when it is empty.
    RawValue,
}

/// Label lookup settings.
///
/// # Example
///
/// ```rust
/// use cadence::labels::{LabelConfig, LabelFallback};
/// use cadence::machines::GoalMachine;
///
/// let config = LabelConfig::new().fallback(LabelFallback::RawValue);
/// assert_eq!(config.status_label::<GoalMachine>("IN_PROGRESS"), "In Progress");
/// assert_eq!(config.status_label::<GoalMachine>("PAUSED"), "PAUSED");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabelConfig {
    pub fallback: LabelFallback,
    pub unknown_status: String,
    pub unknown_transition: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            fallback: LabelFallback::Placeholder,
            unknown_status: UNKNOWN_STATUS.to_string(),
            unknown_transition: UNKNOWN_ACTION.to_string(),
        }
    }
}

impl LabelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fallback(mut self, fallback: LabelFallback) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn unknown_status(mut self, label: impl Into<String>) -> Self {
        self.unknown_status = label.into();
        self
    }

    pub fn unknown_transition(mut self, label: impl Into<String>) -> Self {
        self.unknown_transition = label.into();
        self
    }

    /// Label for a raw stored status of machine `M`.
    pub fn status_label<M: StatusMachine>(&self, raw: &str) -> String {
        label_or_fallback::<M::Status>(M::ENTITY, raw, self.fallback, &self.unknown_status)
    }

    /// Label for a raw stored transition of machine `M`.
    pub fn transition_label<M: StatusMachine>(&self, raw: &str) -> String {
        label_or_fallback::<M::Transition>(M::ENTITY, raw, self.fallback, &self.unknown_transition)
    }
}

fn label_or_fallback<V: WireEnum>(
    entity: &'static str,
    raw: &str,
    fallback: LabelFallback,
    placeholder: &str,
) -> String {
    match V::parse(raw) {
        Ok(value) => value.display_label().to_string(),
        Err(err) => {
            warn!(entity, kind = V::KIND, value = raw, error = %err, "unrecognized value, using fallback label");
            match fallback {
                LabelFallback::RawValue if !raw.is_empty() => raw.to_string(),
                _ => placeholder.to_string(),
            }
        }
    }
}

/// [`LabelConfig::status_label`] with default settings.
pub fn status_label<M: StatusMachine>(raw: &str) -> String {
    LabelConfig::default().status_label::<M>(raw)
}

/// [`LabelConfig::transition_label`] with default settings.
pub fn transition_label<M: StatusMachine>(raw: &str) -> String {
    LabelConfig::default().transition_label::<M>(raw)
}
