//! Serializable description of every status machine.
//!
//! UI code renders statuses, labels and available actions from this
//! catalog instead of keeping its own copy of the tables.

use crate::core::{StatusMachine, WireEnum};
use crate::machines::{GoalMachine, LessonMachine, LessonQuoteMachine, ObjectiveMachine, RateMachine};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDescriptor {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDescriptor {
    pub from: String,
    pub transition: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineDescriptor {
    pub entity: String,
    pub initial_status: String,
    pub statuses: Vec<MemberDescriptor>,
    pub transitions: Vec<MemberDescriptor>,
    pub edges: Vec<EdgeDescriptor>,
    pub terminal_statuses: Vec<String>,
}

fn members<V: WireEnum>() -> Vec<MemberDescriptor> {
    V::all()
        .iter()
        .map(|value| MemberDescriptor {
            value: value.name().to_string(),
            label: value.display_label().to_string(),
        })
        .collect()
}

/// Describe machine `M`.
pub fn describe<M: StatusMachine>() -> MachineDescriptor {
    let table = M::table();
    MachineDescriptor {
        entity: M::ENTITY.to_string(),
        initial_status: M::initial_status().name().to_string(),
        statuses: members::<M::Status>(),
        transitions: members::<M::Transition>(),
        edges: table
            .edges()
            .iter()
            .map(|edge| EdgeDescriptor {
                from: edge.from.name().to_string(),
                transition: edge.transition.name().to_string(),
                to: edge.to.name().to_string(),
            })
            .collect(),
        terminal_statuses: table
            .terminal_statuses()
            .iter()
            .map(|status| status.name().to_string())
            .collect(),
    }
}

/// Descriptors for all five machines.
pub fn catalog() -> Vec<MachineDescriptor> {
    vec![
        describe::<GoalMachine>(),
        describe::<ObjectiveMachine>(),
        describe::<LessonMachine>(),
        describe::<LessonQuoteMachine>(),
        describe::<RateMachine>(),
    ]
}

/// The catalog as pretty-printed JSON.
pub fn catalog_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&catalog())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_descriptor_matches_table() {
        let goal = describe::<GoalMachine>();

        assert_eq!(goal.entity, "Goal");
        assert_eq!(goal.initial_status, "CREATED");
        assert_eq!(goal.statuses.len(), 4);
        assert_eq!(goal.transitions.len(), 3);
        assert_eq!(goal.edges.len(), 5);
        assert_eq!(goal.terminal_statuses, vec!["ABANDONED".to_string()]);
        assert_eq!(
            goal.statuses[1],
            MemberDescriptor {
                value: "IN_PROGRESS".to_string(),
                label: "In Progress".to_string(),
            }
        );
    }

    #[test]
    fn catalog_covers_every_machine() {
        let entities: Vec<String> = catalog().into_iter().map(|m| m.entity).collect();
        assert_eq!(
            entities,
            vec!["Goal", "Objective", "Lesson", "LessonQuote", "TeacherLessonHourlyRate"]
        );
    }

    #[test]
    fn catalog_json_round_trips() {
        let json = catalog_json().unwrap();
        assert!(json.contains("\"initialStatus\""));

        let back: Vec<MachineDescriptor> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog());
    }
}
