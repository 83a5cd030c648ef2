//! Builder API for status machines.
//!
//! - `status_enum!` / `transition_enum!` generate the value enums
//! - `entity_id!` generates typed owner keys
//! - [`TableBuilder`] assembles and validates tables at runtime

pub mod error;
pub mod macros;
pub mod table;

pub use error::BuildError;
pub use table::TableBuilder;
