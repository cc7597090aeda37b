//! The wildlife photographer game.
//!
//! A photographer roams an environment that produces sounds, animals and
//! photo opportunities. Its behaviour is a four-state decision graph
//! ([`CharacterController`]); the environment is either the interactive
//! console or a replayed script.

mod alphabet;
mod controller;
mod environment;
mod error;

pub use alphabet::{GameCommand, GameEvent};
pub use controller::{CharacterController, CharacterState};
pub use environment::{ConsoleEnvironment, ScriptedEnvironment};
pub use error::EnvironmentError;

use crate::agent::{Agent, Environment};

/// The photographer: a generic agent composed with the character controller.
pub type Photographer<Env> = Agent<GameEvent, GameCommand, Env, CharacterController>;

/// Drop a fresh photographer, starting in `Search`, into `environment`.
pub fn photographer<Env>(environment: Env) -> Photographer<Env>
where
    Env: Environment<GameEvent, GameCommand>,
{
    Agent::new(environment, CharacterController::new())
}
