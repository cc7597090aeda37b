//! States of the decision graph.
//!
//! A state is a named node owning its outgoing edges, keyed by event.
//! States never point at each other directly; successors are referred to by
//! [`StateId`] handles into the graph that owns them, which keeps cyclic
//! graphs (self-loops included) free of ownership cycles.

use super::action::Action;
use super::event::{Command, Event};
use super::transition::Transition;
use std::collections::HashMap;
use std::fmt;

/// Stable handle of a state inside one graph.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct StateId(usize);

impl StateId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the state in its graph.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One node of the decision graph and its outgoing edges.
///
/// The transition table is a partial function from events to transitions:
/// at most one transition per event, and events without one are ignored.
///
/// # Example
///
/// ```rust
/// use trailcam::builder::StateMachineBuilder;
/// use trailcam::{command_enum, event_enum};
///
/// event_enum! {
///     enum Bell { Ring, Silence }
/// }
///
/// command_enum! {
///     enum Reply { Answer }
/// }
///
/// let mut builder = StateMachineBuilder::<Bell, Reply>::new();
/// let idle = builder.state("Idle");
/// let busy = builder.state("Busy");
///
/// builder
///     .state_mut(idle)
///     .unwrap()
///     .add_transition(Bell::Ring, busy, Some(Reply::Answer.into()))
///     .add_transition(Bell::Silence, idle, None);
///
/// let machine = builder.initial(idle).build().unwrap();
/// let state = machine.current_state();
///
/// assert_eq!(state.name(), "Idle");
/// assert_eq!(state.lookup(&Bell::Ring).unwrap().successor(), busy);
/// assert!(state.lookup(&Bell::Silence).unwrap().action().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct State<E: Event, C: Command> {
    name: String,
    transitions: HashMap<E, Transition<C>>,
}

impl<E: Event, C: Command> State<E, C> {
    /// Create a state with no outgoing edges.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: HashMap::new(),
        }
    }

    /// Register the edge taken when `event` occurs in this state.
    ///
    /// A second registration for the same event replaces the first.
    /// `successor` is not checked here; the builder validates every handle
    /// once the graph is complete.
    pub fn add_transition(
        &mut self,
        event: E,
        successor: StateId,
        action: Option<Action<C>>,
    ) -> &mut Self {
        self.transitions.insert(event, Transition::new(successor, action));
        self
    }

    /// Look up the edge for `event`. `None` is a normal outcome.
    pub fn lookup(&self, event: &E) -> Option<&Transition<C>> {
        self.transitions.get(event)
    }

    /// Get the state's name for display/logging.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterate over all registered edges, in no particular order.
    pub fn transitions(&self) -> impl Iterator<Item = (&E, &Transition<C>)> {
        self.transitions.iter()
    }

    /// Number of registered edges.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

impl<E: Event, C: Command> fmt::Display for State<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
