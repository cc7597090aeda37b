//! Events the photographer can perceive and commands it can issue.

use crate::{command_enum, event_enum};

event_enum! {
    /// What happened around the photographer this cycle.
    pub enum GameEvent {
        Quiet,
        Noise,
        Animal,
        Flee,
        Photographed,
        Terminate,
    }
    terminal: [Terminate]
}

command_enum! {
    /// What the photographer does about it.
    pub enum GameCommand {
        Seek,
        Approach,
        Observe,
        Capture,
    }
}

impl GameEvent {
    /// One-letter console code for this event.
    pub fn code(self) -> char {
        match self {
            Self::Quiet => 's',
            Self::Noise => 'r',
            Self::Animal => 'a',
            Self::Flee => 'f',
            Self::Photographed => 'o',
            Self::Terminate => 't',
        }
    }

    /// Event for a one-letter console code, if it is one.
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|event| event.code() == code)
    }
}
