//! Edges of the decision graph.

use super::action::Action;
use super::event::Command;
use super::state::StateId;

/// An immutable edge: where to go next and what, if anything, to emit.
///
/// A transition without an action is valid and simply moves the machine.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition<C: Command> {
    successor: StateId,
    action: Option<Action<C>>,
}

impl<C: Command> Transition<C> {
    pub fn new(successor: StateId, action: Option<Action<C>>) -> Self {
        Self { successor, action }
    }

    /// Handle of the destination state.
    pub fn successor(&self) -> StateId {
        self.successor
    }

    /// Action emitted when this edge is taken.
    pub fn action(&self) -> Option<&Action<C>> {
        self.action.as_ref()
    }

    /// True when taking this edge changes state without emitting anything.
    pub fn is_silent(&self) -> bool {
        self.action.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Flash;

    impl Command for Flash {
        fn name(&self) -> &str {
            "Flash"
        }
    }

    #[test]
    fn transition_exposes_successor_and_action() {
        let transition = Transition::new(StateId::new(2), Some(Action::new(Flash)));

        assert_eq!(transition.successor(), StateId::new(2));
        assert_eq!(transition.action(), Some(&Action::new(Flash)));
        assert!(!transition.is_silent());
    }

    #[test]
    fn transition_without_action_is_silent() {
        let transition: Transition<Flash> = Transition::new(StateId::new(0), None);

        assert!(transition.action().is_none());
        assert!(transition.is_silent());
    }
}
