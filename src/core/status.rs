//! Status and transition value traits.
//!
//! Every entity lifecycle is described by two closed enumerations: the
//! statuses an entity can occupy and the transitions a client can request.
//! Both share the same wire behaviour (a stable SCREAMING_SNAKE_CASE name and
//! a human-readable label), captured by [`WireEnum`].

use crate::core::error::UnknownValue;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A closed enumeration with a stable wire name and a display label.
///
/// Implementations are normally generated by the
/// [`status_enum!`](crate::status_enum) and
/// [`transition_enum!`](crate::transition_enum) macros.
///
/// # Required Traits
///
/// - `Copy` + `Eq` + `Hash`: values are small tags used as table keys
/// - `Display`: renders the wire name
/// - `Serialize` + `Deserialize`: values are persisted and sent over the wire
/// - `Send` + `Sync` + `'static`: tables holding them live in statics
pub trait WireEnum:
    Copy + Eq + Hash + Debug + Display + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Name of the value family, used in error messages.
    const KIND: &'static str;

    /// Stable wire name, e.g. `IN_PROGRESS`.
    fn name(&self) -> &'static str;

    /// Human-readable label for UI rendering, e.g. `In Progress`.
    ///
    /// Never empty.
    fn display_label(&self) -> &'static str;

    /// Every member of the enumeration, in declaration order.
    fn all() -> &'static [Self];

    /// Parse a wire name back into a member.
    fn parse(raw: &str) -> Result<Self, UnknownValue> {
        Self::all()
            .iter()
            .copied()
            .find(|value| value.name() == raw)
            .ok_or_else(|| UnknownValue::new(Self::KIND, raw))
    }
}

/// A state an entity can occupy.
pub trait Status: WireEnum {}

/// A named action that moves an entity between statuses.
pub trait Transition: WireEnum {}
