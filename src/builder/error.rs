//! Build errors for runtime transition tables.

use crate::validation::TableViolation;
use thiserror::Error;

/// Errors that can occur when building a transition table.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("No edges defined. Add at least one edge with .edge(from, transition, to)")]
    NoEdges,

    #[error("Transition table failed validation with {} violation(s)", .0.len())]
    Invalid(Vec<TableViolation>),
}
