//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{Command, Event, State, StateGraph, StateId, StateMachine};

/// Builder for assembling a decision graph and its start state.
///
/// States are declared first, which hands out their handles; edges are then
/// registered on each state with chained
/// [`add_transition`](State::add_transition) calls. `build` checks that the
/// start state and every successor exist in the graph.
pub struct StateMachineBuilder<E: Event, C: Command> {
    graph: StateGraph<E, C>,
    initial: Option<StateId>,
}

impl<E: Event, C: Command> StateMachineBuilder<E, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            graph: StateGraph::new(),
            initial: None,
        }
    }

    /// Declare a state and get its handle.
    pub fn state(&mut self, name: impl Into<String>) -> StateId {
        self.graph.add_state(name)
    }

    /// Access a declared state to register its edges.
    pub fn state_mut(&mut self, id: StateId) -> Result<&mut State<E, C>, BuildError> {
        self.graph
            .get_mut(id)
            .ok_or(BuildError::UnknownState { id })
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: StateId) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the initial state without consuming the builder.
    pub fn set_initial(&mut self, state: StateId) -> &mut Self {
        self.initial = Some(state);
        self
    }

    /// Build the state machine.
    /// Returns an error if the start state is missing or any handle is
    /// foreign to the graph.
    pub fn build(self) -> Result<StateMachine<E, C>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if !self.graph.contains(initial) {
            return Err(BuildError::UnknownState { id: initial });
        }

        for (_, state) in self.graph.states() {
            for (event, transition) in state.transitions() {
                if !self.graph.contains(transition.successor()) {
                    return Err(BuildError::DanglingSuccessor {
                        state: state.name().to_string(),
                        event: event.name().to_string(),
                        successor: transition.successor(),
                    });
                }
            }
        }

        Ok(StateMachine::new(self.graph, initial))
    }
}

impl<E: Event, C: Command> Default for StateMachineBuilder<E, C> {
    fn default() -> Self {
        Self::new()
    }
}
