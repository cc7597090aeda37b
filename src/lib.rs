//! Trailcam: an event-driven finite-state controller for reactive agents
//!
//! An agent repeatedly perceives its environment, decides on an action with a
//! finite-state controller, and acts on the environment, until a terminal
//! event is observed. Decisions are a pure function of the current state and
//! the perceived event; all I/O lives in the environment.
//!
//! # Core Concepts
//!
//! - **Event / Command**: closed alphabets, usually declared with
//!   [`event_enum!`] and [`command_enum!`]
//! - **State**: a named node with at most one transition per event
//! - **StateMachine**: holds the current state and steps on each event
//! - **Agent**: composes an `Environment` with a `Controller`
//!
//! # Example
//!
//! ```rust
//! use trailcam::agent::{Controller, Perception};
//! use trailcam::game::{CharacterController, GameCommand, GameEvent};
//!
//! let mut controller = CharacterController::new();
//!
//! let action = controller.decide(&Perception::from(GameEvent::Animal));
//! assert_eq!(action.map(|a| a.into_command()), Some(GameCommand::Approach));
//! assert_eq!(controller.current_state().name(), "Watch");
//!
//! // Nobody reacts to the stop signal; the run loop watches for it.
//! assert!(controller.decide(&Perception::from(GameEvent::Terminate)).is_none());
//! assert_eq!(controller.current_state().name(), "Watch");
//! ```

pub mod agent;
pub mod builder;
pub mod config;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::agent::{Agent, Controller, Environment, Perception};
pub use crate::core::{Action, Command, Event, State, StateId, StateMachine, Transition};
