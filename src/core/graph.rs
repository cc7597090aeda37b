//! Arena holding every state of one decision graph.

use super::action::Action;
use super::event::{Command, Event};
use super::state::{State, StateId};

/// Outcome of feeding one event to one state.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution<'g, C: Command> {
    /// State the machine is in after the event.
    pub next: StateId,
    /// Action to emit, if any.
    pub action: Option<&'g Action<C>>,
    /// Whether a registered edge was taken.
    pub matched: bool,
}

/// Arena of states addressed by [`StateId`].
///
/// States are only ever appended, so a handle handed out by [`add_state`]
/// stays valid for the lifetime of the graph.
///
/// [`add_state`]: StateGraph::add_state
#[derive(Clone, Debug)]
pub struct StateGraph<E: Event, C: Command> {
    states: Vec<State<E, C>>,
}

impl<E: Event, C: Command> Default for StateGraph<E, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event, C: Command> StateGraph<E, C> {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Append a state with no edges and return its handle.
    pub fn add_state(&mut self, name: impl Into<String>) -> StateId {
        let id = StateId::new(self.states.len());
        self.states.push(State::new(name));
        id
    }

    pub fn get(&self, id: StateId) -> Option<&State<E, C>> {
        self.states.get(id.index())
    }

    /// Index a handle known to belong to this graph.
    pub(crate) fn state(&self, id: StateId) -> &State<E, C> {
        &self.states[id.index()]
    }

    pub fn get_mut(&mut self, id: StateId) -> Option<&mut State<E, C>> {
        self.states.get_mut(id.index())
    }

    pub fn contains(&self, id: StateId) -> bool {
        id.index() < self.states.len()
    }

    /// Iterate over all states with their handles.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &State<E, C>)> {
        self.states
            .iter()
            .enumerate()
            .map(|(index, state)| (StateId::new(index), state))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Decide where `event` leads from `from` (pure).
    ///
    /// An unknown handle or an unregistered event resolves to staying put
    /// with no action.
    pub fn resolve(&self, from: StateId, event: &E) -> Resolution<'_, C> {
        match self.get(from).and_then(|state| state.lookup(event)) {
            Some(transition) => Resolution {
                next: transition.successor(),
                action: transition.action(),
                matched: true,
            },
            None => Resolution {
                next: from,
                action: None,
                matched: false,
            },
        }
    }
}
