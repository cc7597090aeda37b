//! Core state machine types and logic.
//!
//! This module contains the event-driven decision core:
//! - Event and command alphabets via the `Event` and `Command` traits
//! - States, transitions and the arena graph that owns them
//! - The `StateMachine` that steps through the graph
//!
//! Nothing in this module performs I/O. Deciding on an action is a pure
//! function of the current state and the incoming event.

mod action;
mod event;
mod graph;
mod machine;
mod state;
mod transition;

pub use action::Action;
pub use event::{Command, Event};
pub use graph::{Resolution, StateGraph};
pub use machine::StateMachine;
pub use state::{State, StateId};
pub use transition::Transition;
