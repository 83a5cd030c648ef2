//! Structural validation of transition tables.
//!
//! Uses Stillwater's `Validation` type so a broken table reports every
//! defect at once instead of the first one found.
//!
//! # Example
//!
//! ```rust
//! use cadence::core::StatusMachine;
//! use cadence::machines::lesson::LessonMachine;
//!
//! let table = LessonMachine::table();
//! assert!(table.validate(LessonMachine::initial_status()).is_success());
//! ```

pub mod rules;
pub mod violations;

pub use violations::TableViolation;
