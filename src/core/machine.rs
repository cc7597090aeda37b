//! State machine that steps through a decision graph one event at a time.

use super::action::Action;
use super::event::{Command, Event};
use super::graph::StateGraph;
use super::state::{State, StateId};
use tracing::trace;

/// Event-driven finite-state machine.
///
/// The graph is fixed once the machine is built; the current state handle is
/// the only thing [`step`](StateMachine::step) ever changes. Machines are
/// created through [`StateMachineBuilder`](crate::builder::StateMachineBuilder),
/// which guarantees every handle in the graph is valid.
#[derive(Clone, Debug)]
pub struct StateMachine<E: Event, C: Command> {
    graph: StateGraph<E, C>,
    current: StateId,
}

impl<E: Event, C: Command> StateMachine<E, C> {
    /// Callers must have checked that `start` and every successor belong
    /// to `graph`.
    pub(crate) fn new(graph: StateGraph<E, C>, start: StateId) -> Self {
        Self {
            graph,
            current: start,
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &State<E, C> {
        self.graph.state(self.current)
    }

    /// Get handle of the current state (pure)
    pub fn current(&self) -> StateId {
        self.current
    }

    /// Get the decision graph (pure)
    pub fn graph(&self) -> &StateGraph<E, C> {
        &self.graph
    }

    /// Feed one event to the machine.
    ///
    /// If the current state has an edge for `event` the machine moves to its
    /// successor and returns the edge's action, which may be `None`.
    /// Otherwise the machine stays where it is and returns `None`.
    pub fn step(&mut self, event: &E) -> Option<Action<C>> {
        let from = self.current;
        let resolution = self.graph.resolve(from, event);
        let action = resolution.action.cloned();

        if resolution.matched {
            trace!(
                from = self.graph.state(from).name(),
                to = self.graph.state(resolution.next).name(),
                event = event.name(),
                action = action.as_ref().map(|a| a.command().name()),
                "transition taken"
            );
            self.current = resolution.next;
        } else {
            trace!(
                state = self.graph.state(from).name(),
                event = event.name(),
                "no transition registered, holding state"
            );
        }

        action
    }
}
