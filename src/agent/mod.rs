//! Perceive, decide, act.
//!
//! An [`Agent`] is the composition of an [`Environment`] it observes and acts
//! on, and a [`Controller`] that maps each perception to an optional action.
//! Neither side knows about the other; the agent loop wires them together.

mod perception;
mod runner;

pub use perception::Perception;
pub use runner::{Agent, Cycle, RunSummary};

use crate::core::{Action, Command, Event, StateMachine};

/// Decision logic: maps what was perceived to what to do.
pub trait Controller<E: Event, C: Command> {
    /// Decide on an action for this cycle, or `None` to do nothing.
    fn decide(&mut self, perception: &Perception<E>) -> Option<Action<C>>;

    /// Name of the state the controller is in, if it has one.
    fn state_name(&self) -> Option<&str> {
        None
    }
}

/// The world an agent lives in.
///
/// Failures while producing events or carrying out commands belong to the
/// environment and are reported through [`Environment::Error`].
pub trait Environment<E: Event, C: Command> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Advance the environment by one tick, producing the next event.
    ///
    /// Default implementation does nothing.
    fn evolve(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// The latest event, or `None` if nothing happened.
    fn observe(&mut self) -> Option<E>;

    /// Carry out a command.
    fn apply(&mut self, command: &C) -> Result<(), Self::Error>;

    /// Show the controller's state after a decision.
    ///
    /// Default implementation does nothing.
    fn show_state(&mut self, _name: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A bare state machine is a controller: the perceived event drives one
/// step, and a perception without an event is a no-op.
impl<E: Event, C: Command> Controller<E, C> for StateMachine<E, C> {
    fn decide(&mut self, perception: &Perception<E>) -> Option<Action<C>> {
        perception.event().and_then(|event| self.step(event))
    }

    fn state_name(&self) -> Option<&str> {
        Some(self.current_state().name())
    }
}
