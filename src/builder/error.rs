//! Build errors for state machine graphs.

use crate::core::StateId;
use thiserror::Error;

/// Errors that can occur when building state machines.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("State {id} does not belong to this graph")]
    UnknownState { id: StateId },

    #[error("Transition '{state}' --{event}--> {successor} points outside the graph")]
    DanglingSuccessor {
        state: String,
        event: String,
        successor: StateId,
    },
}
