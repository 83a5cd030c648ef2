//! Property-based tests for the status machines.
//!
//! These tests use proptest to check that every machine's lookups agree
//! with its table over all status/transition pairs.

use cadence::core::{StatusMachine, WireEnum};
use cadence::labels::{self, UNKNOWN_ACTION, UNKNOWN_STATUS};
use cadence::machines::goal::GoalStatus;
use cadence::machines::{GoalMachine, LessonMachine, LessonQuoteMachine, ObjectiveMachine, RateMachine};
use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use uuid::Uuid;

fn any_member<V: WireEnum + std::fmt::Debug>() -> impl Strategy<Value = V> {
    proptest::sample::select(V::all())
}

fn check_lookup_agreement<M: StatusMachine>(
    status: M::Status,
    transition: M::Transition,
) -> Result<(), TestCaseError> {
    let valid = M::is_valid_transition(status, transition);
    let next = M::resulting_status(status, transition);
    let edge = M::table()
        .edges()
        .iter()
        .find(|edge| edge.from == status && edge.transition == transition);

    prop_assert_eq!(valid, next.is_some());
    prop_assert_eq!(next, edge.map(|edge| edge.to));
    prop_assert_eq!(M::transition(status, transition).ok(), next);
    prop_assert_eq!(valid, M::transitions_from(status).contains(&transition));
    if M::is_terminal(status) {
        prop_assert!(!valid);
    }
    Ok(())
}

macro_rules! machine_properties {
    ($module:ident, $machine:ty) => {
        mod $module {
            use super::*;

            proptest! {
                #[test]
                fn lookups_agree_with_table(
                    status in any_member::<<$machine as StatusMachine>::Status>(),
                    transition in any_member::<<$machine as StatusMachine>::Transition>(),
                ) {
                    check_lookup_agreement::<$machine>(status, transition)?;
                }

                #[test]
                fn lookups_are_deterministic(
                    status in any_member::<<$machine as StatusMachine>::Status>(),
                    transition in any_member::<<$machine as StatusMachine>::Transition>(),
                ) {
                    prop_assert_eq!(
                        <$machine>::resulting_status(status, transition),
                        <$machine>::resulting_status(status, transition)
                    );
                    prop_assert_eq!(
                        <$machine>::is_valid_transition(status, transition),
                        <$machine>::is_valid_transition(status, transition)
                    );
                }

                #[test]
                fn labels_are_total(
                    status in any_member::<<$machine as StatusMachine>::Status>(),
                    transition in any_member::<<$machine as StatusMachine>::Transition>(),
                ) {
                    prop_assert!(!status.display_label().is_empty());
                    prop_assert!(!transition.display_label().is_empty());
                    prop_assert_eq!(
                        labels::status_label::<$machine>(status.name()),
                        status.display_label()
                    );
                    prop_assert_eq!(
                        labels::transition_label::<$machine>(transition.name()),
                        transition.display_label()
                    );
                }

                #[test]
                fn unknown_raw_values_never_panic(raw in "[a-z0-9 ]{0,12}") {
                    // Wire names are upper case, so lower-case input never parses.
                    prop_assert_eq!(labels::status_label::<$machine>(&raw), UNKNOWN_STATUS);
                    prop_assert_eq!(labels::transition_label::<$machine>(&raw), UNKNOWN_ACTION);
                }
            }

            #[test]
            fn table_is_well_formed() {
                let table = <$machine>::table();
                assert!(table.validate(<$machine>::initial_status()).is_success());
            }
        }
    };
}

machine_properties!(goal, GoalMachine);
machine_properties!(objective, ObjectiveMachine);
machine_properties!(lesson, LessonMachine);
machine_properties!(lesson_quote, LessonQuoteMachine);
machine_properties!(rate, RateMachine);

proptest! {
    #[test]
    fn record_preserves_created_at_and_context(
        secs in 0i64..4_000_000_000,
        note in ".{0,40}",
    ) {
        let at = Utc.timestamp_opt(secs, 0).unwrap();
        let context = serde_json::json!({ "notes": note });
        let record = GoalStatus::builder(
            Uuid::new_v4(),
            cadence::machines::goal::GoalId::new_v4(),
            GoalMachine::initial_status(),
        )
        .context(context.clone())
        .created_at(at)
        .build();

        prop_assert_eq!(record.created_at(), at);
        prop_assert_eq!(record.context(), Some(&context));

        let json = serde_json::to_string(&record).unwrap();
        let back: GoalStatus = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, record);
    }
}
