//! Cadence: status workflows for a music lesson marketplace.
//!
//! Goals, objectives, lessons, lesson quotes and teacher hourly rates each
//! move through a small lifecycle. Every lifecycle is one instance of the same
//! table-driven machine: a status enum, a transition enum and a static table
//! mapping `(status, transition)` to the next status.
//!
//! # Core Concepts
//!
//! - **Status / Transition**: closed enums with wire names and display labels
//! - **TransitionTable**: immutable lookup of allowed moves
//! - **StatusMachine**: binds the enums, the table and the owning entity
//! - **StatusRecord / StatusHistory**: append-only, timestamped status changes
//!
//! Everything is pure and synchronous. Persisting records and serializing
//! concurrent changes to one entity is the caller's job.
//!
//! # Example
//!
//! ```rust
//! use cadence::core::StatusMachine;
//! use cadence::machines::goal::{GoalMachine, GoalStatusTransition, GoalStatusValue};
//!
//! assert!(GoalMachine::is_valid_transition(
//!     GoalStatusValue::Created,
//!     GoalStatusTransition::Start,
//! ));
//! assert_eq!(
//!     GoalMachine::resulting_status(GoalStatusValue::Achieved, GoalStatusTransition::Start),
//!     None
//! );
//! ```

pub mod builder;
pub mod catalog;
pub mod core;
pub mod labels;
pub mod machines;
pub mod request;
pub mod validation;

// Re-export commonly used types
pub use core::{
    Edge, InvalidTransition, Status, StatusHistory, StatusMachine, StatusRecord, Transition,
    TransitionTable, UnknownValue, WireEnum,
};
