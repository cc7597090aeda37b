//! Decision graph of the wildlife photographer.
//!
//! ```text
//! Search  --Animal/Approach-->       Watch
//! Search  --Noise/Approach-->        Inspect
//! Search  --Quiet/Seek-->            Search
//! Inspect --Quiet-->                 Search
//! Inspect --Animal/Approach-->       Watch
//! Inspect --Noise/Seek-->            Inspect
//! Watch   --Animal/Observe-->        Record
//! Watch   --Flee-->                  Inspect
//! Record  --Flee-->                  Search
//! Record  --Photographed-->          Search
//! Record  --Animal/Capture-->        Record
//! ```
//!
//! `Terminate` has no edge anywhere: stopping is up to the run loop.

use super::alphabet::{GameCommand, GameEvent};
use crate::agent::{Controller, Perception};
use crate::builder::{BuildError, StateMachineBuilder};
use crate::core::{Action, Command, Event, State, StateMachine};
use std::fmt;
use tracing::debug;

/// The photographer's four behaviours.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CharacterState {
    Search,
    Inspect,
    Watch,
    Record,
}

impl CharacterState {
    pub const ALL: [CharacterState; 4] = [Self::Search, Self::Inspect, Self::Watch, Self::Record];

    pub fn name(self) -> &'static str {
        match self {
            Self::Search => "Search",
            Self::Inspect => "Inspect",
            Self::Watch => "Watch",
            Self::Record => "Record",
        }
    }
}

impl fmt::Display for CharacterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Controller driving the photographer through its decision graph.
#[derive(Clone, Debug)]
pub struct CharacterController {
    machine: StateMachine<GameEvent, GameCommand>,
}

impl CharacterController {
    /// Controller starting in `Search`.
    pub fn new() -> Self {
        Self::starting_in(CharacterState::Search)
    }

    /// Controller with the same graph, starting in `start`.
    pub fn starting_in(start: CharacterState) -> Self {
        let machine = Self::assemble(start).expect("character graph is well-formed");
        Self { machine }
    }

    fn assemble(start: CharacterState) -> Result<StateMachine<GameEvent, GameCommand>, BuildError> {
        use GameCommand::*;
        use GameEvent::*;

        let mut builder = StateMachineBuilder::<GameEvent, GameCommand>::new();
        let [search, inspect, watch, record] = CharacterState::ALL.map(|s| builder.state(s.name()));

        let seek = Some(Action::new(Seek));
        let approach = Some(Action::new(Approach));
        let observe = Some(Action::new(Observe));
        let capture = Some(Action::new(Capture));

        builder
            .state_mut(search)?
            .add_transition(Animal, watch, approach.clone())
            .add_transition(Noise, inspect, approach.clone())
            .add_transition(Quiet, search, seek.clone());

        builder
            .state_mut(inspect)?
            .add_transition(Quiet, search, None)
            .add_transition(Animal, watch, approach)
            .add_transition(Noise, inspect, seek);

        builder
            .state_mut(watch)?
            .add_transition(Animal, record, observe)
            .add_transition(Flee, inspect, None);

        builder
            .state_mut(record)?
            .add_transition(Flee, search, None)
            .add_transition(Photographed, search, None)
            .add_transition(Animal, record, capture);

        let initial = match start {
            CharacterState::Search => search,
            CharacterState::Inspect => inspect,
            CharacterState::Watch => watch,
            CharacterState::Record => record,
        };

        builder.initial(initial).build()
    }

    /// The state the photographer is in.
    pub fn current_state(&self) -> &State<GameEvent, GameCommand> {
        self.machine.current_state()
    }

    /// The current behaviour as a typed value.
    pub fn character_state(&self) -> CharacterState {
        CharacterState::ALL[self.machine.current().index()]
    }

    /// The underlying state machine, for inspecting the graph.
    pub fn machine(&self) -> &StateMachine<GameEvent, GameCommand> {
        &self.machine
    }
}

impl Default for CharacterController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller<GameEvent, GameCommand> for CharacterController {
    fn decide(&mut self, perception: &Perception<GameEvent>) -> Option<Action<GameCommand>> {
        let action = self.machine.decide(perception);

        debug!(
            event = perception.event().map(|e| e.name()),
            action = action.as_ref().map(|a| a.command().name()),
            state = self.current_state().name(),
            "Decision made"
        );

        action
    }

    fn state_name(&self) -> Option<&str> {
        Some(self.current_state().name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decide(
        controller: &mut CharacterController,
        event: GameEvent,
    ) -> Option<GameCommand> {
        controller
            .decide(&Perception::from(event))
            .map(Action::into_command)
    }

    #[test]
    fn starts_in_search() {
        let controller = CharacterController::new();

        assert_eq!(controller.character_state(), CharacterState::Search);
        assert_eq!(controller.current_state().name(), "Search");
    }

    #[test]
    fn starting_in_picks_initial_state() {
        for state in CharacterState::ALL {
            let controller = CharacterController::starting_in(state);
            assert_eq!(controller.character_state(), state);
            assert_eq!(controller.current_state().name(), state.name());
        }
    }

    #[test]
    fn graph_has_expected_shape() {
        let controller = CharacterController::new();
        let graph = controller.machine().graph();

        let edge_counts: Vec<(String, usize)> = graph
            .states()
            .map(|(_, state)| (state.name().to_string(), state.len()))
            .collect();

        assert_eq!(
            edge_counts,
            vec![
                ("Search".to_string(), 3),
                ("Inspect".to_string(), 3),
                ("Watch".to_string(), 2),
                ("Record".to_string(), 3),
            ]
        );
    }

    #[test]
    fn search_edges() {
        let mut c = CharacterController::new();
        assert_eq!(decide(&mut c, GameEvent::Quiet), Some(GameCommand::Seek));
        assert_eq!(c.character_state(), CharacterState::Search);

        let mut c = CharacterController::new();
        assert_eq!(decide(&mut c, GameEvent::Noise), Some(GameCommand::Approach));
        assert_eq!(c.character_state(), CharacterState::Inspect);

        let mut c = CharacterController::new();
        assert_eq!(decide(&mut c, GameEvent::Animal), Some(GameCommand::Approach));
        assert_eq!(c.character_state(), CharacterState::Watch);
    }

    #[test]
    fn inspect_edges() {
        let start = CharacterState::Inspect;

        let mut c = CharacterController::starting_in(start);
        assert_eq!(decide(&mut c, GameEvent::Quiet), None);
        assert_eq!(c.character_state(), CharacterState::Search);

        let mut c = CharacterController::starting_in(start);
        assert_eq!(decide(&mut c, GameEvent::Animal), Some(GameCommand::Approach));
        assert_eq!(c.character_state(), CharacterState::Watch);

        let mut c = CharacterController::starting_in(start);
        assert_eq!(decide(&mut c, GameEvent::Noise), Some(GameCommand::Seek));
        assert_eq!(c.character_state(), CharacterState::Inspect);
    }

    #[test]
    fn watch_edges() {
        let start = CharacterState::Watch;

        let mut c = CharacterController::starting_in(start);
        assert_eq!(decide(&mut c, GameEvent::Animal), Some(GameCommand::Observe));
        assert_eq!(c.character_state(), CharacterState::Record);

        let mut c = CharacterController::starting_in(start);
        assert_eq!(decide(&mut c, GameEvent::Flee), None);
        assert_eq!(c.character_state(), CharacterState::Inspect);
    }

    #[test]
    fn record_edges() {
        let start = CharacterState::Record;

        let mut c = CharacterController::starting_in(start);
        assert_eq!(decide(&mut c, GameEvent::Flee), None);
        assert_eq!(c.character_state(), CharacterState::Search);

        let mut c = CharacterController::starting_in(start);
        assert_eq!(decide(&mut c, GameEvent::Photographed), None);
        assert_eq!(c.character_state(), CharacterState::Search);

        let mut c = CharacterController::starting_in(start);
        assert_eq!(decide(&mut c, GameEvent::Animal), Some(GameCommand::Capture));
        assert_eq!(c.character_state(), CharacterState::Record);
    }

    #[test]
    fn terminate_is_ignored_everywhere() {
        for state in CharacterState::ALL {
            let mut c = CharacterController::starting_in(state);
            assert_eq!(decide(&mut c, GameEvent::Terminate), None);
            assert_eq!(c.character_state(), state);
        }
    }

    #[test]
    fn names_state_after_each_decision() {
        let mut c = CharacterController::new();
        assert_eq!(c.state_name(), Some("Search"));

        decide(&mut c, GameEvent::Noise);
        assert_eq!(c.state_name(), Some("Inspect"));

        decide(&mut c, GameEvent::Animal);
        assert_eq!(c.state_name(), Some("Watch"));
    }

    #[test]
    fn empty_perception_holds_state() {
        let mut c = CharacterController::starting_in(CharacterState::Watch);

        assert!(c.decide(&Perception::nothing()).is_none());
        assert_eq!(c.character_state(), CharacterState::Watch);
    }
}
