//! Environments the photographer can be dropped into.

use super::alphabet::{GameCommand, GameEvent};
use super::error::EnvironmentError;
use crate::agent::Environment;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use tracing::warn;

/// Interactive environment reading one-letter event codes.
///
/// Each tick prompts with `Event? ` and takes the next whitespace-separated
/// token, so one line may carry the codes of several ticks and blank lines
/// are skipped. Known codes become the tick's event and are echoed as
/// `Event: <name>`; anything else is a tick in which nothing happened. The
/// photographer's state is printed as `State: <name>` after each decision
/// and applied commands as `Action: <name>`.
pub struct ConsoleEnvironment<R: BufRead, W: Write> {
    input: R,
    output: W,
    pending: VecDeque<String>,
    event: Option<GameEvent>,
}

impl<R: BufRead, W: Write> ConsoleEnvironment<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
            event: None,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Next token, reading further lines only once the buffered ones are used up.
    fn next_token(&mut self) -> Result<String, EnvironmentError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(EnvironmentError::InputClosed);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn read_event(&mut self) -> Result<Option<GameEvent>, EnvironmentError> {
        write!(self.output, "Event? ")?;
        self.output.flush()?;

        let code = self.next_token()?;
        let mut chars = code.chars();
        let event = match (chars.next(), chars.next()) {
            (Some(c), None) => GameEvent::from_code(c),
            _ => None,
        };

        if event.is_none() {
            warn!(code = %code, "Unrecognized event code, nothing observed");
        }

        Ok(event)
    }
}

impl<R: BufRead, W: Write> Environment<GameEvent, GameCommand> for ConsoleEnvironment<R, W> {
    type Error = EnvironmentError;

    fn evolve(&mut self) -> Result<(), Self::Error> {
        self.event = self.read_event()?;
        if let Some(event) = self.event {
            writeln!(self.output, "Event: {event}")?;
        }
        Ok(())
    }

    fn observe(&mut self) -> Option<GameEvent> {
        self.event
    }

    fn apply(&mut self, command: &GameCommand) -> Result<(), Self::Error> {
        writeln!(self.output, "Action: {command}")?;
        Ok(())
    }

    fn show_state(&mut self, name: &str) -> Result<(), Self::Error> {
        writeln!(self.output, "State: {name}")?;
        Ok(())
    }
}

/// Environment replaying a fixed sequence of ticks.
///
/// `None` entries are ticks in which nothing happened. Every applied command
/// and every shown state is recorded for later inspection.
#[derive(Clone, Debug, Default)]
pub struct ScriptedEnvironment {
    script: VecDeque<Option<GameEvent>>,
    event: Option<GameEvent>,
    applied: Vec<GameCommand>,
    states: Vec<String>,
}

impl ScriptedEnvironment {
    pub fn new(script: impl IntoIterator<Item = Option<GameEvent>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            event: None,
            applied: Vec::new(),
            states: Vec::new(),
        }
    }

    /// Script from console codes; unknown codes become empty ticks and
    /// whitespace is skipped.
    pub fn from_codes(codes: &str) -> Self {
        Self::new(
            codes
                .chars()
                .filter(|c| !c.is_whitespace() && *c != ',')
                .map(GameEvent::from_code),
        )
    }

    /// Commands applied so far, in order.
    pub fn applied(&self) -> &[GameCommand] {
        &self.applied
    }

    /// States shown after each decision, in order.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// Ticks not yet replayed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Environment<GameEvent, GameCommand> for ScriptedEnvironment {
    type Error = EnvironmentError;

    fn evolve(&mut self) -> Result<(), Self::Error> {
        self.event = self
            .script
            .pop_front()
            .ok_or(EnvironmentError::ScriptExhausted)?;
        Ok(())
    }

    fn observe(&mut self) -> Option<GameEvent> {
        self.event
    }

    fn apply(&mut self, command: &GameCommand) -> Result<(), Self::Error> {
        self.applied.push(*command);
        Ok(())
    }

    fn show_state(&mut self, name: &str) -> Result<(), Self::Error> {
        self.states.push(name.to_string());
        Ok(())
    }
}
