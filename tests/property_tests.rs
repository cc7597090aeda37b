//! Property-based tests for the decision core.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated event sequences.

use proptest::prelude::*;
use trailcam::agent::{Controller, Perception};
use trailcam::core::{Action, Event};
use trailcam::game::{CharacterController, CharacterState, GameCommand, GameEvent};

/// Expected `(successor, action)` for every edge of the photographer graph.
fn edge(state: CharacterState, event: GameEvent) -> Option<(CharacterState, Option<GameCommand>)> {
    use CharacterState::*;
    use GameCommand::*;
    use GameEvent::*;

    match (state, event) {
        (Search, Animal) => Some((Watch, Some(Approach))),
        (Search, Noise) => Some((Inspect, Some(Approach))),
        (Search, Quiet) => Some((Search, Some(Seek))),
        (Inspect, Quiet) => Some((Search, None)),
        (Inspect, Animal) => Some((Watch, Some(Approach))),
        (Inspect, Noise) => Some((Inspect, Some(Seek))),
        (Watch, Animal) => Some((Record, Some(Observe))),
        (Watch, Flee) => Some((Inspect, None)),
        (Record, Flee) => Some((Search, None)),
        (Record, Photographed) => Some((Search, None)),
        (Record, Animal) => Some((Record, Some(Capture))),
        _ => None,
    }
}

prop_compose! {
    fn arbitrary_event()(index in 0..GameEvent::ALL.len()) -> GameEvent {
        GameEvent::ALL[index]
    }
}

prop_compose! {
    fn arbitrary_state()(index in 0..CharacterState::ALL.len()) -> CharacterState {
        CharacterState::ALL[index]
    }
}

fn arbitrary_perception() -> impl Strategy<Value = Perception<GameEvent>> {
    prop::option::of(arbitrary_event()).prop_map(Perception::new)
}

proptest! {
    #[test]
    fn step_matches_transition_table(state in arbitrary_state(), event in arbitrary_event()) {
        let mut controller = CharacterController::starting_in(state);

        let action = controller
            .decide(&Perception::from(event))
            .map(Action::into_command);

        match edge(state, event) {
            Some((successor, expected)) => {
                prop_assert_eq!(controller.character_state(), successor);
                prop_assert_eq!(action, expected);
            }
            None => {
                prop_assert_eq!(controller.character_state(), state);
                prop_assert_eq!(action, None);
            }
        }
    }

    #[test]
    fn decide_is_deterministic(state in arbitrary_state(), perception in arbitrary_perception()) {
        let mut first = CharacterController::starting_in(state);
        let mut second = CharacterController::starting_in(state);

        let action1 = first.decide(&perception);
        let action2 = second.decide(&perception);

        prop_assert_eq!(action1, action2);
        prop_assert_eq!(first.character_state(), second.character_state());
    }

    #[test]
    fn machine_follows_reference_model(
        start in arbitrary_state(),
        perceptions in prop::collection::vec(arbitrary_perception(), 0..50)
    ) {
        let mut controller = CharacterController::starting_in(start);
        let mut expected_state = start;

        for perception in &perceptions {
            let action = controller.decide(perception).map(Action::into_command);

            let expected_action = match perception.event().and_then(|e| edge(expected_state, *e)) {
                Some((successor, action)) => {
                    expected_state = successor;
                    action
                }
                None => None,
            };

            prop_assert_eq!(action, expected_action);
            prop_assert_eq!(controller.character_state(), expected_state);
            prop_assert_eq!(controller.current_state().name(), expected_state.name());
        }
    }

    #[test]
    fn terminal_and_empty_perceptions_never_move(
        start in arbitrary_state(),
        terminal in any::<bool>()
    ) {
        let mut controller = CharacterController::starting_in(start);
        let perception = if terminal {
            Perception::from(GameEvent::Terminate)
        } else {
            Perception::nothing()
        };

        prop_assert!(controller.decide(&perception).is_none());
        prop_assert_eq!(controller.character_state(), start);
    }

    #[test]
    fn only_terminate_is_terminal(event in arbitrary_event()) {
        prop_assert_eq!(event.is_terminal(), event == GameEvent::Terminate);
    }

    #[test]
    fn event_roundtrip_serialization(event in arbitrary_event()) {
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(event, deserialized);
    }
}
