//! Actions emitted by state machine transitions.

use super::event::Command;
use std::fmt;

/// Opaque, read-only wrapper around exactly one command.
///
/// An action has no behavior of its own; the environment decides what the
/// wrapped command means.
#[derive(Clone, Debug, PartialEq)]
pub struct Action<C: Command> {
    command: C,
}

impl<C: Command> Action<C> {
    /// Wrap a command.
    pub fn new(command: C) -> Self {
        Self { command }
    }

    /// The wrapped command.
    pub fn command(&self) -> &C {
        &self.command
    }

    /// Consume the action, returning the wrapped command.
    pub fn into_command(self) -> C {
        self.command
    }
}

impl<C: Command> From<C> for Action<C> {
    fn from(command: C) -> Self {
        Self::new(command)
    }
}

impl<C: Command> fmt::Display for Action<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command.name())
    }
}
