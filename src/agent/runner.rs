//! The agent run loop.

use super::{Controller, Environment, Perception};
use crate::core::{Action, Command, Event};
use std::marker::PhantomData;
use tracing::{debug, info};

/// Record of one perceive, decide, act cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct Cycle<E: Event, C: Command> {
    pub perception: Perception<E>,
    pub action: Option<Action<C>>,
}

impl<E: Event, C: Command> Cycle<E, C> {
    /// Check if this cycle observed the stop signal.
    pub fn is_terminal(&self) -> bool {
        self.perception.is_terminal()
    }
}

/// Totals for a completed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Cycles executed, the terminal one included.
    pub cycles: usize,
    /// Cycles in which a command was applied.
    pub actions: usize,
}

/// An environment and the controller acting in it.
pub struct Agent<E, C, Env, Ctrl>
where
    E: Event,
    C: Command,
    Env: Environment<E, C>,
    Ctrl: Controller<E, C>,
{
    environment: Env,
    controller: Ctrl,
    _alphabet: PhantomData<fn(E) -> C>,
}

impl<E, C, Env, Ctrl> Agent<E, C, Env, Ctrl>
where
    E: Event,
    C: Command,
    Env: Environment<E, C>,
    Ctrl: Controller<E, C>,
{
    pub fn new(environment: Env, controller: Ctrl) -> Self {
        Self {
            environment,
            controller,
            _alphabet: PhantomData,
        }
    }

    pub fn environment(&self) -> &Env {
        &self.environment
    }

    pub fn controller(&self) -> &Ctrl {
        &self.controller
    }

    pub fn into_parts(self) -> (Env, Ctrl) {
        (self.environment, self.controller)
    }

    /// Run one cycle against the environment's current event.
    ///
    /// The controller's state, if it names one, is shown to the environment
    /// between deciding and acting.
    ///
    /// Does not advance the environment; [`run`](Agent::run) calls
    /// [`Environment::evolve`] before each cycle.
    pub fn execute(&mut self) -> Result<Cycle<E, C>, Env::Error> {
        let perception = Perception::new(self.environment.observe());
        let action = self.controller.decide(&perception);

        if let Some(name) = self.controller.state_name() {
            self.environment.show_state(name)?;
        }

        if let Some(action) = &action {
            self.environment.apply(action.command())?;
        }

        Ok(Cycle { perception, action })
    }

    /// Cycle until an observed event is terminal.
    ///
    /// The terminal cycle itself is still executed, so the controller sees
    /// the stop event like any other.
    pub fn run(&mut self) -> Result<RunSummary, Env::Error> {
        info!("Agent started");
        let mut summary = RunSummary::default();

        loop {
            self.environment.evolve()?;
            let cycle = self.execute()?;

            summary.cycles += 1;
            if cycle.action.is_some() {
                summary.actions += 1;
            }

            debug!(
                cycle = summary.cycles,
                event = cycle.perception.event().map(|e| e.name()),
                action = cycle.action.as_ref().map(|a| a.command().name()),
                "Cycle complete"
            );

            if cycle.is_terminal() {
                break;
            }
        }

        info!(
            cycles = summary.cycles,
            actions = summary.actions,
            "Agent stopped"
        );
        Ok(summary)
    }
}
