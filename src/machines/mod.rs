//! The five marketplace status machines.

pub mod goal;
pub mod lesson;
pub mod lesson_quote;
pub mod objective;
pub mod rate;

pub use goal::{GoalMachine, GoalStatus};
pub use lesson::{LessonMachine, LessonStatus};
pub use lesson_quote::{LessonQuoteMachine, LessonQuoteStatus};
pub use objective::{ObjectiveMachine, ObjectiveStatus};
pub use rate::{RateMachine, TeacherLessonHourlyRateStatus};
