//! Core status machine types and logic.
//!
//! - Status and transition values via the `Status`/`Transition` traits
//! - Static transition tables and the `StatusMachine` contract
//! - Immutable status records and per-entity history
//!
//! Everything here is pure: lookups over immutable tables, no I/O and no
//! shared mutable state.

mod error;
mod history;
mod machine;
mod record;
mod status;
mod table;

pub use error::{InvalidTransition, UnknownValue};
pub use history::{HistoryError, StatusHistory};
pub use machine::StatusMachine;
pub use record::{StatusRecord, StatusRecordBuilder};
pub use status::{Status, Transition, WireEnum};
pub use table::{Edge, TransitionTable};
