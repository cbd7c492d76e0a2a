//! Property-based tests for the rule table and evaluation engine.
//!
//! These tests use proptest to verify permit/deny properties hold across
//! many randomly generated state pairs and transition lists.

use proptest::prelude::*;
use turnstile::{state_enum, Machine, Ruleset, State, Transition, TransitionError};

state_enum! {
    enum OrderState {
        Pending,
        Started,
        Finished,
        Cancelled,
    }
}

prop_compose! {
    fn arbitrary_state()(variant in 0..4u8) -> OrderState {
        match variant {
            0 => OrderState::Pending,
            1 => OrderState::Started,
            2 => OrderState::Finished,
            _ => OrderState::Cancelled,
        }
    }
}

prop_compose! {
    fn arbitrary_transition()(from in arbitrary_state(), to in arbitrary_state()) -> Transition<OrderState> {
        Transition::new(from, to)
    }
}

proptest! {
    #[test]
    fn registered_origin_permits_and_others_fail(
        transition in arbitrary_transition(),
        probe in arbitrary_state(),
    ) {
        let mut rules = Ruleset::new();
        rules.add_transition(transition.clone());

        prop_assert!(rules.permitted(transition.from(), transition.to()).is_ok());

        if probe != *transition.from() {
            prop_assert!(rules.permitted(&probe, transition.to()).is_err());
        }
    }

    #[test]
    fn unregistered_pairs_fail_with_no_rule(
        registered in prop::collection::vec(arbitrary_transition(), 0..6),
        attempt in arbitrary_transition(),
    ) {
        let rules = Ruleset::from_transitions(registered.clone());

        if !registered.contains(&attempt) {
            let verdict = rules.permitted(attempt.from(), attempt.to());
            prop_assert_eq!(
                verdict,
                Err(TransitionError::NoRule {
                    from: attempt.from().name().to_string(),
                    to: attempt.to().name().to_string(),
                })
            );
        }
    }

    #[test]
    fn from_transitions_is_idempotent(
        transitions in prop::collection::vec(arbitrary_transition(), 0..6),
        current in arbitrary_state(),
        goal in arbitrary_state(),
    ) {
        let first = Ruleset::from_transitions(transitions.clone());
        let second = Ruleset::from_transitions(transitions);

        let verdict_a = first.permitted(&current, &goal);
        let verdict_b = second.permitted(&current, &goal);
        prop_assert_eq!(verdict_a, verdict_b);
    }

    #[test]
    fn permitted_is_deterministic(
        transitions in prop::collection::vec(arbitrary_transition(), 0..6),
        current in arbitrary_state(),
        goal in arbitrary_state(),
    ) {
        let rules = Ruleset::from_transitions(transitions);

        let verdict_a = rules.permitted(&current, &goal);
        let verdict_b = rules.permitted(&current, &goal);
        prop_assert_eq!(verdict_a, verdict_b);
    }

    #[test]
    fn machine_state_changes_only_on_success(
        transitions in prop::collection::vec(arbitrary_transition(), 0..6),
        initial in arbitrary_state(),
        goal in arbitrary_state(),
    ) {
        let rules = Ruleset::from_transitions(transitions);
        let permitted = rules.permitted(&initial, &goal).is_ok();

        let mut machine = Machine::new(rules, initial.clone());
        let verdict = machine.transition(goal.clone());

        if permitted {
            prop_assert!(verdict.is_ok());
            prop_assert_eq!(machine.state(), &goal);
        } else {
            prop_assert!(verdict.is_err());
            prop_assert_eq!(machine.state(), &initial);
        }
    }

    #[test]
    fn state_roundtrip_serialization(state in arbitrary_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: OrderState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }
}
